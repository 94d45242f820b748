//! Window-level subscriptions wrapped as hooks.
//!
//! Each hook registers its listener inside an effect and removes it in the
//! effect's destructor, so unmounting a component never leaves one behind.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    Node, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

use crate::state::scroll::ScrollState;
use crate::state::viewport::ViewportLatch;

pub fn current_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Tracks the window's vertical scroll offset.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let offset = use_state(current_scroll_offset);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        offset.set(current_scroll_offset());
                    }) as Box<dyn FnMut()>);

                    match window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some((window, scroll_callback)),
                        Err(err) => {
                            warn!("could not subscribe to scroll events: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    if let Some((window, scroll_callback)) = subscription {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    ScrollState::new(*offset)
}

/// While `armed`, reports every document `mousedown` to `on_pointer_down`
/// with whether it landed inside any of `regions`.
///
/// The listener only exists while `armed` is true.
#[hook]
pub fn use_pointer_down_watch(armed: bool, regions: Vec<NodeRef>, on_pointer_down: Callback<bool>) {
    use_effect_with_deps(
        move |armed| {
            let subscription = if *armed {
                web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| {
                        let pointer_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                            let inside = regions.iter().any(|region| {
                                region
                                    .cast::<Node>()
                                    .map_or(false, |node| node.contains(target.as_ref()))
                            });
                            on_pointer_down.emit(inside);
                        }) as Box<dyn FnMut(MouseEvent)>);

                        match document.add_event_listener_with_callback(
                            "mousedown",
                            pointer_callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Some((document, pointer_callback)),
                            Err(err) => {
                                warn!("could not watch pointer-down: {:?}", err);
                                None
                            }
                        }
                    })
            } else {
                None
            };

            move || {
                if let Some((document, pointer_callback)) = subscription {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        pointer_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        armed,
    );
}

/// Becomes `true` the first time `node` is at least `threshold` visible (or
/// fills that share of the viewport) and stays `true`. The observer disconnects itself as soon as that happens.
///
/// Browsers without `IntersectionObserver` get `true` straight away so the
/// content is never stuck hidden.
#[hook]
pub fn use_viewport_entry(node: NodeRef, threshold: f64) -> bool {
    let latch = use_mut_ref(|| ViewportLatch::new(threshold));
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |node| {
                let target = node
                    .cast::<Element>()
                    .filter(|_| !latch.borrow().has_entered());
                let observer = target.and_then(|target| observe_once(&target, latch, entered));

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *entered
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// Elements taller than the viewport never reach a high intersection ratio, so
// filling that share of the viewport counts as well.
fn visible_fraction(entry: &IntersectionObserverEntry) -> f64 {
    let viewport_cover = entry
        .root_bounds()
        .filter(|root| root.height() > 0.0)
        .map_or(0.0, |root| entry.intersection_rect().height() / root.height());
    entry.intersection_ratio().max(viewport_cover)
}

fn observe_once(
    target: &Element,
    latch: Rc<RefCell<ViewportLatch>>,
    entered: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, EntryCallback)> {
    let threshold = latch.borrow().threshold();
    let on_entries = {
        let entered = entered.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let tripped = latch
                        .borrow_mut()
                        .observe(entry.is_intersecting(), visible_fraction(&entry));
                    if tripped {
                        debug!("element entered the viewport");
                        entered.set(true);
                        observer.disconnect();
                        break;
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    // Report every tenth too, so tall elements get a chance at the
    // viewport-cover check.
    let steps: Array = (0..=10)
        .map(|step| f64::from(step) / 10.0)
        .chain(std::iter::once(threshold))
        .map(JsValue::from_f64)
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&steps);

    match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            Some((observer, on_entries))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
            entered.set(true);
            None
        }
    }
}
