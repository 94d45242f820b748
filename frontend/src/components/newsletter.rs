use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::state::newsletter::{EmailDraft, LoggingSubscription};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NewsletterVariant {
    /// Light inline form in the call-to-action section.
    Cta,
    /// Dark stacked form in the footer.
    Footer,
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    pub variant: NewsletterVariant,
    #[prop_or_default]
    pub on_subscribed: Callback<String>,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let draft = use_state(EmailDraft::default);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(EmailDraft::from(input.value()));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_subscribed = props.on_subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            match next.submit(&LoggingSubscription) {
                Ok(email) => {
                    draft.set(next);
                    on_subscribed.emit(email);
                }
                Err(err) => debug!("newsletter submit ignored: {}", err),
            }
        })
    };

    let (form_class, placeholder, submit_label) = match props.variant {
        NewsletterVariant::Cta => ("newsletter-form cta", "Enter your email address", "Subscribe"),
        NewsletterVariant::Footer => ("newsletter-form footer", "Your email address", "Subscribe Now"),
    };

    html! {
        <form class={form_class} onsubmit={onsubmit}>
            <div class="newsletter-field">
                <IconGlyph icon={Icon::Mail} class={classes!("newsletter-field-icon")} />
                <input
                    type="email"
                    class="newsletter-input"
                    placeholder={placeholder}
                    value={draft.as_str().to_string()}
                    oninput={oninput}
                    required={true}
                />
            </div>
            <button type="submit" class="newsletter-submit">
                <span>{submit_label}</span>
                {
                    if props.variant == NewsletterVariant::Cta {
                        html! { <IconGlyph icon={Icon::Send} class={classes!("send-icon")} /> }
                    } else {
                        html! {}
                    }
                }
            </button>
        </form>
    }
}
