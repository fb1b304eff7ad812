//! 404 page shown for any path outside the route table.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not-found page — static-hosting 404 copy with a link back to the landing page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__message">"File not found"</p>
            <p>"The site configured at this address does not contain the requested file."</p>
            <p>
                "If this is your site, make sure that the filename case matches the URL as well as any file permissions."
            </p>
            <p>
                "For root URLs (like "
                <code>"http://example.com/"</code>
                ") you must provide an index.html file."
            </p>
            <A href="/" attr:class="not-found-page__home">
                "Back to Cred Saathi"
            </A>
        </div>
    }
}
