//! Client-side session mirror.
//!
//! Keeps a local snapshot of the server-confirmed login state and exposes
//! the queries the rest of the UI is built on. The snapshot is rebuilt from
//! `GET /api/auth/check-session` and cleared by logout; the localStorage
//! credential cache is advisory only and never overrides what the server
//! reported.
//!
//! STATE MODEL
//! ===========
//! Two states only: logged in (snapshot present) and logged out (snapshot
//! absent). Transitions happen through [`refresh`] and the logout fold
//! [`apply_logout`]; everything else is a pure read.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{CheckSessionResponse, Role};

/// In-memory snapshot of the session as of the last successful check.
///
/// Absent means logged out; there is no default user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    /// Bearer token from the credential cache, when one was present at the
    /// time of the check. Advisory; requests work without it on pages that
    /// rely on the cookie session.
    pub token: Option<String>,
}

/// Session mirror state held in an `RwSignal` and provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub snapshot: Option<SessionSnapshot>,
    pub loading: bool,
}

/// Result of folding a session-check response into the mirror: the next
/// state, plus whether the persisted credential cache must be purged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub state: SessionState,
    pub purge_credentials: bool,
}

impl SessionState {
    /// Initial state while the first session check is in flight.
    pub fn pending() -> Self {
        Self {
            snapshot: None,
            loading: true,
        }
    }

    /// State for a freshly confirmed login, as returned by the login call.
    pub fn logged_in(user_id: i64, username: String, role: Role, token: Option<String>) -> Self {
        Self {
            snapshot: Some(SessionSnapshot {
                user_id,
                username,
                role,
                token,
            }),
            loading: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| s.role == Role::Admin)
    }

    /// Header set for JSON API requests: always `Content-Type`, plus a
    /// bearer claim when the snapshot holds a token.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = self.snapshot.as_ref().and_then(|s| s.token.as_ref()) {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }

    /// Fold a session-check result into the next mirror state.
    ///
    /// A logged-in response missing its identity fields is malformed and is
    /// treated as logged out, like any other failure. The credential cache
    /// is purged on every logged-out outcome so stale tokens never survive
    /// an expired session.
    pub fn apply_check(
        check: Option<CheckSessionResponse>,
        persisted_token: Option<String>,
    ) -> CheckOutcome {
        let snapshot = check.and_then(|resp| {
            if !resp.logged_in {
                return None;
            }
            let user_id = resp.user_id?;
            let username = resp.username?;
            Some(SessionSnapshot {
                user_id,
                username,
                role: resp.role.unwrap_or_default(),
                token: persisted_token,
            })
        });
        let purge_credentials = snapshot.is_none();
        CheckOutcome {
            state: SessionState {
                snapshot,
                loading: false,
            },
            purge_credentials,
        }
    }
}

/// Query the session authority and rebuild the mirror from the result.
///
/// Never fails: network and parse errors degrade to the logged-out state.
/// Purges the credential cache whenever the outcome is logged out.
pub async fn refresh() -> SessionState {
    let check = crate::net::api::check_session().await;
    let outcome = SessionState::apply_check(check, crate::util::credentials::load_token());
    if outcome.purge_credentials {
        crate::util::credentials::clear();
    }
    outcome.state
}

/// Result of folding a logout attempt into the mirror: the next state, the
/// user-facing notice, and the side effects the caller must apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub state: SessionState,
    pub purge_credentials: bool,
    pub notice: &'static str,
    pub redirect_to: Option<&'static str>,
}

/// Fold a logout attempt into the next mirror state.
///
/// Success clears the snapshot, purges the credential cache, and sends the
/// user back to the root. Failure leaves the current state untouched (no
/// optimistic clearing) so a retry is possible.
pub fn apply_logout(current: &SessionState, result: &Result<(), String>) -> LogoutOutcome {
    match result {
        Ok(()) => LogoutOutcome {
            state: SessionState::default(),
            purge_credentials: true,
            notice: "Logged out successfully!",
            redirect_to: Some("/"),
        },
        Err(_) => LogoutOutcome {
            state: current.clone(),
            purge_credentials: false,
            notice: "Error logging out. Please try again.",
            redirect_to: None,
        },
    }
}

/// Guard for pages that need a logged-in user. Redirects to the login page
/// and returns false when there is none.
pub fn require_login(state: &SessionState) -> bool {
    if state.is_logged_in() {
        return true;
    }
    crate::util::browser::redirect("/login");
    false
}

/// Guard for admin-only pages. Warns and redirects to the root when the
/// current user is not an admin.
pub fn require_admin(state: &SessionState) -> bool {
    if state.is_admin() {
        return true;
    }
    crate::util::browser::notify("Admin access required");
    crate::util::browser::redirect("/");
    false
}
