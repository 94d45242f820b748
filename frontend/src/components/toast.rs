use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Bottom-corner notice that dismisses itself after `TOAST_DURATION_MS`.
/// Give it a fresh `key` to restart the timer.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(()));
                // Dropping the handle cancels it if we unmount first
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-body">
                <div class="toast-title">{props.title.to_string()}</div>
                <div class="toast-description">{props.description.to_string()}</div>
            </div>
            <button class="toast-close" aria-label="Dismiss" onclick={close}>{"×"}</button>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    max-width: 22rem;
                    padding: 1rem 1.25rem;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    animation: toast-in 0.2s ease-out;
                }
                .toast-title {
                    font-weight: 600;
                    color: #111827;
                }
                .toast-description {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .toast-close {
                    border: none;
                    background: none;
                    font-size: 1.25rem;
                    line-height: 1;
                    color: #9ca3af;
                    cursor: pointer;
                }
                @keyframes toast-in {
                    from { opacity: 0; transform: translateY(1rem); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
