//! Landing page for the tourism guide.

use leptos::prelude::*;

/// Home page — hero section pointing at the destination catalog. The
/// session-dependent parts of the chrome live in the navigation bar.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Tourism Guide"</h1>
                <p>"Discover destinations, plan routes, and share your reviews."</p>
                <a href="/" class="btn btn--primary">
                    "Browse destinations"
                </a>
            </section>
        </div>
    }
}
