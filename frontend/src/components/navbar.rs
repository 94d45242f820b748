use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::join_options::{JoinOptions, JoinOptionsVariant};
use crate::config::LOGO_URL;
use crate::content::{MenuItem, MenuTarget, SubMenuItem, MENU_ITEMS};
use crate::hooks::{use_pointer_down_watch, use_scroll_state};
use crate::state::disclosure::{DisclosureAction, DisclosureState};
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let disclosure = use_reducer(DisclosureState::default);
    let scroll = use_scroll_state();
    let desktop_join_ref = use_node_ref();
    let mobile_join_ref = use_node_ref();

    {
        let dispatcher = disclosure.dispatcher();
        use_pointer_down_watch(
            disclosure.join_popover_open,
            vec![desktop_join_ref.clone(), mobile_join_ref.clone()],
            Callback::from(move |inside_join_control: bool| {
                if !inside_join_control {
                    debug!("pointer-down outside join control, closing popover");
                }
                dispatcher.dispatch(DisclosureAction::PointerDown { inside_join_control });
            }),
        );
    }

    let toggle_menu = {
        let dispatcher = disclosure.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(DisclosureAction::ToggleMobileMenu);
        })
    };

    let toggle_join = {
        let dispatcher = disclosure.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(DisclosureAction::ToggleJoinPopover);
        })
    };

    let desktop_items = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| desktop_item(index, item, &disclosure))
        .collect::<Html>();

    let mobile_items = MENU_ITEMS.iter().map(mobile_item).collect::<Html>();

    let join_open = disclosure.join_popover_open;
    let mobile_open = disclosure.mobile_menu_open;

    html! {
        <header class={classes!("site-header", scroll.is_scrolled_past_threshold().then(|| "scrolled"))}>
            <div class="header-content">
                <div class="header-row">
                    <Link<Route> to={Route::Home} classes="header-logo">
                        <img src={LOGO_URL} alt="Intend Career Logo" width="200" height="80" />
                    </Link<Route>>

                    <nav class="desktop-nav">
                        {desktop_items}
                    </nav>

                    <div class="desktop-join">
                        <div class="join-control" ref={desktop_join_ref}>
                            <button class="join-button" onclick={toggle_join.clone()}>
                                <span class="join-button-label">{"Join our community"}</span>
                                <IconGlyph icon={Icon::ChevronDown} class={classes!("chevron", join_open.then(|| "rotated"))} />
                            </button>
                            {
                                if join_open {
                                    html! { <JoinOptions variant={JoinOptionsVariant::Dropdown} /> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>

                    <button
                        class="burger-menu"
                        aria-label="Toggle menu"
                        aria-expanded={mobile_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <IconGlyph icon={if mobile_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>

                <div class={classes!("mobile-menu", mobile_open.then(|| "open"))} aria-hidden={(!mobile_open).to_string()}>
                    <nav class="mobile-nav">
                        {mobile_items}
                        <div class="mobile-join" ref={mobile_join_ref}>
                            <button class="join-button full-width" onclick={toggle_join}>
                                <span class="join-button-label">{"Join our community"}</span>
                                <IconGlyph icon={Icon::ChevronDown} class={classes!("chevron", join_open.then(|| "rotated"))} />
                            </button>
                            {
                                if join_open {
                                    html! { <JoinOptions variant={JoinOptionsVariant::Inline} /> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </nav>
                </div>
            </div>
            <style>{NAVBAR_STYLE}</style>
        </header>
    }
}

fn desktop_item(index: usize, item: &'static MenuItem, disclosure: &UseReducerHandle<DisclosureState>) -> Html {
    match item.target {
        MenuTarget::Submenu(entries) => {
            let is_open = disclosure.is_menu_open(index);
            let on_enter = {
                let dispatcher = disclosure.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(DisclosureAction::OpenMenu(index)))
            };
            let on_leave = {
                let dispatcher = disclosure.dispatcher();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(DisclosureAction::CloseMenu(index)))
            };

            // Handlers sit on the wrapper so crossing from trigger to panel
            // never counts as leaving.
            html! {
                <div key={item.title} class="nav-item" onmouseenter={on_enter} onmouseleave={on_leave}>
                    <button class={classes!("nav-trigger", is_open.then(|| "active"))} aria-expanded={is_open.to_string()}>
                        <IconGlyph icon={item.icon} />
                        <span class="nav-label">{item.title}</span>
                        <IconGlyph icon={Icon::ChevronDown} class={classes!("chevron", is_open.then(|| "rotated"))} />
                    </button>
                    {
                        if is_open {
                            html! {
                                <div class="submenu-panel">
                                    <div class="submenu-card">
                                        { for entries.iter().map(submenu_link) }
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            }
        }
        MenuTarget::Link(path) => html! {
            <div key={item.title} class="nav-item">
                <a href={path} class="nav-trigger">
                    <IconGlyph icon={item.icon} />
                    <span class="nav-label">{item.title}</span>
                </a>
            </div>
        },
    }
}

fn submenu_link(entry: &'static SubMenuItem) -> Html {
    html! {
        <a key={entry.link} href={entry.link} class="submenu-link">
            <span class="submenu-title">{entry.title}</span>
            <span class="submenu-description">{entry.description}</span>
        </a>
    }
}

// Mobile dropdowns open on :hover/:focus-within of the group, not from state.
fn mobile_item(item: &'static MenuItem) -> Html {
    match item.target {
        MenuTarget::Submenu(entries) => html! {
            <div key={item.title} class="mobile-group">
                <button class="mobile-link">
                    <span class="mobile-link-label">
                        <IconGlyph icon={item.icon} />
                        <span>{item.title}</span>
                    </span>
                    <IconGlyph icon={Icon::ChevronDown} class={classes!("chevron")} />
                </button>
                <div class="mobile-submenu">
                    { for entries.iter().map(|entry| html! {
                        <a key={entry.link} href={entry.link} class="mobile-submenu-link">
                            <span class="submenu-title">{entry.title}</span>
                            <span class="submenu-description">{entry.description}</span>
                        </a>
                    }) }
                </div>
            </div>
        },
        MenuTarget::Link(path) => html! {
            <div key={item.title} class="mobile-group">
                <a href={path} class="mobile-link">
                    <span class="mobile-link-label">
                        <IconGlyph icon={item.icon} />
                        <span>{item.title}</span>
                    </span>
                </a>
            </div>
        },
    }
}

const NAVBAR_STYLE: &str = r#"
.site-header {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: transparent;
    transition: background-color 0.5s ease, box-shadow 0.5s ease;
}

.site-header.scrolled {
    background: #ffffff;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.header-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 1rem;
}

.header-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.header-logo img {
    height: 3rem;
    width: auto;
}

.desktop-nav {
    display: none;
    align-items: center;
    gap: 0.5rem;
}

.nav-item {
    position: relative;
}

.nav-trigger {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.5rem 0.75rem;
    border: none;
    border-radius: 9999px;
    background: none;
    color: #374151;
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.3s ease;
}

.nav-trigger:hover,
.nav-trigger.active {
    color: #2581f3;
    background: #f3f4f6;
}

.chevron {
    display: inline-block;
    transition: transform 0.3s ease;
}

.chevron.rotated {
    transform: rotate(180deg);
}

.submenu-panel {
    position: absolute;
    left: 0;
    top: 100%;
    width: 16rem;
    padding-top: 0.5rem;
    animation: submenu-in 0.3s ease;
}

.submenu-card {
    display: grid;
    gap: 0.5rem;
    padding: 1rem;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.submenu-link,
.mobile-submenu-link {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 0.5rem;
    border-radius: 0.375rem;
    color: #374151;
    font-size: 0.875rem;
    text-decoration: none;
    transition: color 0.3s ease, background-color 0.3s ease;
}

.submenu-link:hover,
.mobile-submenu-link:hover {
    color: #2581f3;
    background: #f3f4f6;
}

.submenu-title {
    font-weight: 600;
}

.submenu-description {
    font-size: 0.75rem;
    color: #6b7280;
}

@keyframes submenu-in {
    from { opacity: 0; transform: translateY(0.5rem); }
    to { opacity: 1; transform: translateY(0); }
}

.desktop-join {
    display: none;
    align-items: center;
}

.join-control {
    position: relative;
}

.join-button {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 9999px;
    background: #2581f3;
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    transition: transform 0.3s ease, background-color 0.3s ease, box-shadow 0.3s ease;
}

.join-button:hover {
    transform: scale(1.05);
    background: #0a274c;
    box-shadow: 0 10px 15px -3px rgba(37, 129, 243, 0.3);
}

.join-button.full-width {
    width: 100%;
}

.join-options.dropdown {
    position: absolute;
    right: 0;
    margin-top: 0.5rem;
    width: 16rem;
    padding: 0.5rem;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    z-index: 50;
    animation: popover-in 0.2s ease;
}

.join-options.inline {
    display: grid;
    gap: 0.5rem;
    margin-top: 0.5rem;
    animation: popover-in 0.2s ease;
}

.join-option {
    display: flex;
    align-items: center;
    padding: 0.75rem 1rem;
    border-radius: 0.375rem;
    color: #374151;
    text-decoration: none;
    transition: background-color 0.2s ease;
}

.join-options.inline .join-option {
    background: #f3f4f6;
}

.join-option:hover {
    background: #e5e7eb;
}

.join-option-icon {
    flex-shrink: 0;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.tone-blue { background: #dbeafe; }
.tone-green { background: #dcfce7; }
.tone-yellow { background: #fef9c3; }

.join-option-text {
    margin-left: 0.75rem;
}

.join-option-title {
    font-size: 0.875rem;
    font-weight: 500;
}

.join-option-description {
    font-size: 0.75rem;
    color: #6b7280;
}

@keyframes popover-in {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}

.burger-menu {
    padding: 0.5rem;
    border: none;
    border-radius: 9999px;
    background: none;
    color: #374151;
    font-size: 1.5rem;
    cursor: pointer;
}

.burger-menu:hover {
    color: #2581f3;
    background: #f3f4f6;
}

.mobile-menu {
    max-height: 0;
    opacity: 0;
    overflow: hidden;
    visibility: hidden;
    transition: max-height 0.3s ease, opacity 0.3s ease, visibility 0.3s;
}

.mobile-menu.open {
    max-height: 200vh;
    opacity: 1;
    visibility: visible;
}

.mobile-nav {
    margin-top: 1rem;
    padding: 1rem;
    display: grid;
    gap: 0.5rem;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.mobile-link {
    display: flex;
    align-items: center;
    justify-content: space-between;
    width: 100%;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.375rem;
    background: none;
    color: #374151;
    font-size: 0.875rem;
    font-weight: 500;
    text-align: left;
    text-decoration: none;
}

.mobile-link:hover {
    color: #2581f3;
    background: #f3f4f6;
}

.mobile-link-label {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.mobile-submenu {
    padding-left: 2rem;
    max-height: 0;
    opacity: 0;
    overflow: hidden;
    transition: all 0.3s ease-in-out;
}

.mobile-group:hover .mobile-submenu,
.mobile-group:focus-within .mobile-submenu {
    max-height: 100vh;
    opacity: 1;
}

.mobile-group:hover .chevron {
    transform: rotate(180deg);
}

.mobile-join {
    margin-top: 1rem;
    padding-top: 1rem;
    border-top: 1px solid #e5e7eb;
}

@media (min-width: 1024px) {
    .desktop-nav,
    .desktop-join {
        display: flex;
    }

    .burger-menu,
    .mobile-menu {
        display: none;
    }
}
"#;
