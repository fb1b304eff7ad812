//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::routes::{self, Page};

/// Root application component.
///
/// Sets up document metadata and mounts the router around the route-table
/// outlet. The route table itself lives in [`crate::routes`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Cred Saathi"/>

        <Router>
            <RouteOutlet/>
        </Router>
    }
}

/// Renders the page the static route table selects for the current path.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();

    move || match routes::resolve(routes::ROUTES, &location.pathname.get()) {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
