//! Top navigation bar with the auth-controlled region.
//!
//! The auth region is a pure function of the session mirror: logged out
//! shows a login link, logged in shows the username with a logout button,
//! and admins additionally get the admin-panel link. Re-rendering replaces
//! the whole region, so there is never more than one set of auth items.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// One entry in the auth-controlled region of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthNavItem {
    Login,
    AdminPanel,
    Logout,
}

impl AuthNavItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::AdminPanel => "Admin Panel",
            Self::Logout => "Logout",
        }
    }

    /// Link target, or `None` for action buttons.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Login => Some("/login"),
            Self::AdminPanel => Some("/admin/dashboard"),
            Self::Logout => None,
        }
    }
}

/// Auth items for the current session state.
pub fn auth_nav_items(state: &SessionState) -> Vec<AuthNavItem> {
    match &state.snapshot {
        None => vec![AuthNavItem::Login],
        Some(s) if s.role == Role::Admin => vec![AuthNavItem::AdminPanel, AuthNavItem::Logout],
        Some(_) => vec![AuthNavItem::Logout],
    }
}

/// Site-wide navigation bar.
///
/// Static links on the left, the session-driven auth region on the right.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || {
        session
            .get()
            .snapshot
            .map_or_else(String::new, |s| s.username)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::logout().await;
                if let Err(e) = &result {
                    log::error!("logout failed: {e}");
                }
                let outcome =
                    crate::state::session::apply_logout(&session.get_untracked(), &result);
                if outcome.purge_credentials {
                    crate::util::credentials::clear();
                }
                session.set(outcome.state);
                crate::util::browser::notify(outcome.notice);
                if let Some(path) = outcome.redirect_to {
                    crate::util::browser::redirect(path);
                }
            });
        }
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "Tourism Guide"
            </a>
            <a href="/" class="nav-bar__link">
                "Destinations"
            </a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{user_name}</span>
            {move || {
                auth_nav_items(&session.get())
                    .into_iter()
                    .map(|item| {
                        if let Some(href) = item.href() {
                            view! {
                                <a class="nav-bar__link nav-bar__auth-item" href=href>
                                    {item.label()}
                                </a>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button class="btn nav-bar__auth-item" on:click=on_logout>
                                    {item.label()}
                                </button>
                            }
                                .into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
