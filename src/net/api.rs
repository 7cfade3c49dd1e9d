//! REST API helpers for communicating with the guide server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session-check
//! and logout failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{CheckSessionResponse, DashboardStats, LoginResponse};

/// Query the session authority via `GET /api/auth/check-session`.
///
/// Returns `None` on any network or parse failure; the caller treats that
/// the same as a logged-out response.
pub async fn check_session() -> Option<CheckSessionResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/auth/check-session")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                log::warn!("session check failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("session check returned {}", resp.status());
            return None;
        }
        resp.json::<CheckSessionResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// credentials.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// End the server session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-success status. The
/// caller must leave local session state untouched in that case.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("logout failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch admin dashboard statistics from `/api/admin/dashboard/stats`,
/// attaching the session mirror's header set (bearer claim included when a
/// token is cached). Returns `None` if the caller is not an admin or on the
/// server.
pub async fn fetch_dashboard_stats(headers: &[(&'static str, String)]) -> Option<DashboardStats> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/admin/dashboard/stats");
        for (name, value) in headers {
            req = req.header(name, value);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardStats>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = headers;
        None
    }
}
