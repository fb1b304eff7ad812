//! Landing page with product branding.

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page — static brand copy and a link to the login page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Cred Saathi"</h1>
            <p class="home-page__tagline">
                "Your companion for smarter loans — compare offers, plan EMIs, and borrow with confidence."
            </p>
            <A href="/login" attr:class="btn btn--primary home-page__cta">
                "Log in or sign up"
            </A>
        </div>
    }
}
