//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session mirror context, kicks off the initial session check,
/// and sets up client-side routing. The navigation bar re-renders whenever
/// the mirror settles, so it always reflects the latest completed check or
/// logout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    provide_context(session);

    // Mirror the server session once on page load.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let state = crate::state::session::refresh().await;
            session.set(state);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/tourguide.css"/>
        <Title text="Tourism Guide"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=AdminPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
