use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod content;
pub mod hooks;
pub mod state {
    pub mod accordion;
    pub mod disclosure;
    pub mod feature_tabs;
    pub mod newsletter;
    pub mod scroll;
    pub mod viewport;
}
pub mod components {
    pub mod faq_section;
    pub mod footer;
    pub mod icons;
    pub mod join_options;
    pub mod navbar;
    pub mod newsletter;
    pub mod reveal;
    pub mod toast;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::navbar::Navbar;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
