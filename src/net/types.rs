//! Serde types for the guide API wire contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role attached to a user account.
///
/// The server sends roles as plain strings; anything it may add later maps to
/// `Unknown` instead of failing deserialization, and an `Unknown` role is
/// never treated as admin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire spelling of the role, as stored in the credential cache.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Unknown => "unknown",
        }
    }
}

/// Response body of `GET /api/auth/check-session`.
///
/// When `logged_in` is false the server omits the identity fields entirely.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckSessionResponse {
    pub logged_in: bool,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub role: Option<Role>,
}

/// Request body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token issued on login.
#[derive(Clone, Debug, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Public view of a user account.
#[derive(Clone, Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
}

/// Response body of `POST /api/auth/login`: the user plus the issued token.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: Token,
}

/// Response body of `GET /api/admin/dashboard/stats`.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardStats {
    pub total_destinations: u64,
    pub active_destinations: u64,
    pub total_categories: u64,
    pub total_routes: u64,
    pub total_reviews: u64,
    pub pending_reviews: u64,
    pub total_feedback: u64,
    pub unread_feedback: u64,
}
