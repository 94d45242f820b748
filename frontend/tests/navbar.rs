// Browser tests for the site header: hover menus, the join popover and the
// mobile burger toggle.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    click, create_mount_point, dispatch, dispatch_mouse, expect_element, find, has_class, settle,
    unmount,
};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew::AppHandle;
use yew_router::prelude::*;

use career_landing::components::navbar::Navbar;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(NavbarTestWrapper)]
fn navbar_test_wrapper() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
        </BrowserRouter>
    }
}

async fn mount_navbar() -> (AppHandle<NavbarTestWrapper>, web_sys::Element) {
    let mount = create_mount_point();
    let app = yew::Renderer::<NavbarTestWrapper>::with_root(mount.clone()).render();
    settle().await;
    (app, mount)
}

fn popover_open(mount: &web_sys::Element) -> bool {
    find(mount, ".desktop-join .join-options").is_some()
}

#[wasm_bindgen_test]
async fn header_renders_menu_titles_and_join_button() {
    let (app, mount) = mount_navbar().await;

    let text = mount.text_content().unwrap_or_default();
    for title in ["Resource Hub", "Career Listings", "Workshops", "Networking", "Courses", "FAQ"] {
        assert!(text.contains(title), "{} missing from header", title);
    }
    assert!(text.contains("Join our community"), "join button missing");
    assert!(
        find(&mount, ".submenu-panel").is_none(),
        "no submenu should be open initially"
    );

    let header = expect_element(&mount, ".site-header");
    assert!(!has_class(&header, "scrolled"), "header starts transparent");

    unmount(app, &mount);
}

#[wasm_bindgen_test]
async fn hovering_items_switches_the_open_submenu() {
    let (app, mount) = mount_navbar().await;

    let resource_hub = expect_element(&mount, ".desktop-nav > .nav-item:nth-child(1)");
    let careers = expect_element(&mount, ".desktop-nav > .nav-item:nth-child(2)");

    dispatch_mouse(&resource_hub, "mouseenter");
    settle().await;
    let panel = expect_element(&mount, ".submenu-panel");
    let panel_text = panel.text_content().unwrap_or_default();
    assert!(panel_text.contains("Business News & Updates"));
    assert!(panel_text.contains("Find Business School and University"));

    // Entering the next item before the first one reports leaving.
    dispatch_mouse(&careers, "mouseenter");
    settle().await;
    dispatch_mouse(&resource_hub, "mouseleave");
    settle().await;

    let panel_text = expect_element(&mount, ".submenu-panel")
        .text_content()
        .unwrap_or_default();
    assert!(panel_text.contains("Internships"), "career submenu should be open");
    assert!(!panel_text.contains("Course Syllabi"), "resource submenu should be closed");

    dispatch_mouse(&careers, "mouseleave");
    settle().await;
    assert!(find(&mount, ".submenu-panel").is_none());

    unmount(app, &mount);
}

#[wasm_bindgen_test]
async fn join_popover_closes_on_outside_pointer_down_only() {
    let (app, mount) = mount_navbar().await;

    let join_button = expect_element(&mount, ".desktop-join .join-button");
    click(&join_button);
    settle().await;

    let options = expect_element(&mount, ".desktop-join .join-options");
    let text = options.text_content().unwrap_or_default();
    assert!(text.contains("As Student"));
    assert!(text.contains("As Volunteer"));

    // Pressing inside the popover keeps it open.
    let option = expect_element(&mount, ".desktop-join .join-option");
    dispatch_mouse(&option, "mousedown");
    settle().await;
    assert!(find(&mount, ".desktop-join .join-options").is_some());

    let body = gloo_utils::document().body().unwrap();
    dispatch_mouse(&body, "mousedown");
    settle().await;
    assert!(
        find(&mount, ".desktop-join .join-options").is_none(),
        "outside pointer-down should close the popover"
    );

    unmount(app, &mount);
}

#[wasm_bindgen_test]
async fn join_button_toggles_popover() {
    let (app, mount) = mount_navbar().await;

    let join_button = expect_element(&mount, ".desktop-join .join-button");
    click(&join_button);
    settle().await;
    assert!(find(&mount, ".desktop-join .join-options").is_some());

    click(&join_button);
    settle().await;
    assert!(find(&mount, ".desktop-join .join-options").is_none());

    unmount(app, &mount);
}

#[wasm_bindgen_test]
async fn burger_toggles_mobile_menu() {
    let (app, mount) = mount_navbar().await;

    let menu = expect_element(&mount, ".mobile-menu");
    assert!(!has_class(&menu, "open"));

    let burger = expect_element(&mount, ".burger-menu");
    click(&burger);
    settle().await;
    assert!(has_class(&expect_element(&mount, ".mobile-menu"), "open"));
    assert_eq!(burger.get_attribute("aria-expanded").as_deref(), Some("true"));

    click(&burger);
    settle().await;
    assert!(!has_class(&expect_element(&mount, ".mobile-menu"), "open"));

    unmount(app, &mount);
}

#[wasm_bindgen_test]
async fn outside_click_watch_rearms_on_every_open() {
    let (app, mount) = mount_navbar().await;
    let body = gloo_utils::document().body().unwrap();
    let join_button = expect_element(&mount, ".desktop-join .join-button");

    click(&join_button);
    settle().await;
    assert!(popover_open(&mount));
    dispatch_mouse(&body, "mousedown");
    settle().await;
    assert!(!popover_open(&mount), "first outside press closes");

    // A closed popover ignores presses entirely.
    dispatch_mouse(&body, "mousedown");
    settle().await;
    assert!(!popover_open(&mount));

    click(&join_button);
    settle().await;
    assert!(popover_open(&mount), "popover reopens");

    dispatch_mouse(&expect_element(&mount, ".desktop-join .join-option"), "mousedown");
    settle().await;
    assert!(popover_open(&mount), "inside press keeps the reopened popover");

    dispatch_mouse(&body, "mousedown");
    settle().await;
    assert!(!popover_open(&mount), "second outside press closes again");

    // One more toggle pair: a stacked listener would flip state twice.
    click(&join_button);
    settle().await;
    assert!(popover_open(&mount));
    click(&join_button);
    settle().await;
    assert!(!popover_open(&mount));

    unmount(app, &mount);
}

#[wasm_bindgen_test]
async fn destroying_the_header_releases_window_listeners() {
    let (app, mount) = mount_navbar().await;

    click(&expect_element(&mount, ".desktop-join .join-button"));
    settle().await;
    assert!(popover_open(&mount), "watch is armed before teardown");

    app.destroy();
    settle().await;
    assert!(find(&mount, ".site-header").is_none(), "destroy should remove the header");

    // With the effects torn down these reach no component callbacks.
    let body = gloo_utils::document().body().unwrap();
    dispatch_mouse(&body, "mousedown");
    dispatch(&gloo_utils::document(), "mousedown");
    dispatch(&gloo_utils::window(), "scroll");
    settle().await;

    support::cleanup(&mount);
}
