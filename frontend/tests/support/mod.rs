// Shared harness for the browser tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, EventTarget, HtmlElement, MouseEvent, MouseEventInit};
use yew::html::BaseComponent;
use yew::platform::time::sleep;
use yew::AppHandle;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Destroy the app, running every effect destructor, then drop its mount-point.
pub fn unmount<C: BaseComponent>(app: AppHandle<C>, mount: &Element) {
    app.destroy();
    cleanup(mount);
}

pub fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn expect_element(root: &Element, selector: &str) -> Element {
    find(root, selector).unwrap_or_else(|| panic!("{} missing", selector))
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_name().split_whitespace().any(|c| c == class)
}

pub fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

/// Dispatch a bubbling mouse event of the given type on `target`.
pub fn dispatch_mouse(target: &EventTarget, kind: &str) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Dispatch a bubbling plain event, e.g. `input`, `submit` or `scroll`.
pub fn dispatch(target: &EventTarget, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Let Yew flush pending renders.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}

/// Poll `condition` every 20ms until it holds or `timeout_ms` elapses.
pub async fn wait_until(timeout_ms: u64, mut condition: impl FnMut() -> bool) -> bool {
    let mut waited = 0;
    loop {
        if condition() {
            return true;
        }
        if waited >= timeout_ms {
            return false;
        }
        sleep(Duration::from_millis(20)).await;
        waited += 20;
    }
}

/// Make the page tall enough that window scrolling has somewhere to go.
pub fn make_page_scrollable() {
    let body = gloo_utils::document().body().unwrap();
    body.style().set_property("min-height", "5000px").unwrap();
}

pub fn scroll_window_to(y: f64) {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, y);
}

/// Scroll so the bottom of the page is in view.
pub fn scroll_to_bottom() {
    let height = gloo_utils::document()
        .document_element()
        .unwrap()
        .scroll_height();
    scroll_window_to(f64::from(height));
}

pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap()
}
