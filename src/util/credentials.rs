//! Persisted credential cache backed by `localStorage`.
//!
//! Stores the token and identity fields issued at login so a returning page
//! can attach the bearer token to its snapshot. The cache is advisory only:
//! the server-confirmed session check decides login state, and the cache is
//! cleared whenever that check reports logged out. Storage failures are
//! swallowed; a missing cache just means cookie-session requests.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "access_token";
#[cfg(feature = "hydrate")]
const USERNAME_KEY: &str = "username";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "role";

/// Read the cached bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Cache the credential fields issued at login.
pub fn store(token: &str, username: &str, role: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(USERNAME_KEY, username);
                let _ = storage.set_item(ROLE_KEY, role);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, username, role);
    }
}

/// Drop every cached credential field.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USERNAME_KEY);
                let _ = storage.remove_item(ROLE_KEY);
            }
        }
    }
}
