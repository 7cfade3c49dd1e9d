//! Admin dashboard page, gated on the admin role.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

/// Admin dashboard — shows site-wide counters from the stats endpoint.
/// Non-admin visitors are warned and sent back to the root.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Enforce the admin gate once the initial session check has settled.
    Effect::new(move || {
        let state = session.get();
        if !state.loading {
            let _ = session::require_admin(&state);
        }
    });

    // Re-fetches when the mirror settles so the bearer claim is attached.
    let stats = LocalResource::new(move || {
        let headers = session.get().auth_headers();
        async move { crate::net::api::fetch_dashboard_stats(&headers).await }
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin Dashboard"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|loaded| match loaded {
                            Some(s) => {
                                view! {
                                    <div class="admin-page__stats">
                                        <StatCard label="Destinations" value=s.total_destinations/>
                                        <StatCard label="Active destinations" value=s.active_destinations/>
                                        <StatCard label="Categories" value=s.total_categories/>
                                        <StatCard label="Routes" value=s.total_routes/>
                                        <StatCard label="Reviews" value=s.total_reviews/>
                                        <StatCard label="Pending reviews" value=s.pending_reviews/>
                                        <StatCard label="Feedback" value=s.total_feedback/>
                                        <StatCard label="Unread feedback" value=s.unread_feedback/>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Stats unavailable."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Single labeled counter on the dashboard.
#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
