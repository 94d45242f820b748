use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"This page doesn't exist yet. Head back to the homepage to keep exploring."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 6rem 1rem;
                    text-align: center;
                }
                .not-found-link {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: #2581f3;
                    color: #ffffff;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
