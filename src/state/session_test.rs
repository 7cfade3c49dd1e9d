use super::*;

fn logged_in_check(role: &str) -> CheckSessionResponse {
    serde_json::from_value(serde_json::json!({
        "logged_in": true,
        "user_id": 42,
        "username": "maria",
        "role": role
    }))
    .expect("parse")
}

fn logged_out_check() -> CheckSessionResponse {
    serde_json::from_value(serde_json::json!({"logged_in": false})).expect("parse")
}

// =============================================================
// apply_check
// =============================================================

#[test]
fn logged_out_response_clears_snapshot_and_purges() {
    let outcome = SessionState::apply_check(Some(logged_out_check()), Some("tok".to_owned()));
    assert!(outcome.state.snapshot.is_none());
    assert!(outcome.purge_credentials);
    assert!(!outcome.state.loading);
}

#[test]
fn failed_check_clears_snapshot_and_purges() {
    let outcome = SessionState::apply_check(None, Some("tok".to_owned()));
    assert!(outcome.state.snapshot.is_none());
    assert!(outcome.purge_credentials);
}

#[test]
fn logged_in_response_builds_snapshot_with_persisted_token() {
    let outcome = SessionState::apply_check(Some(logged_in_check("user")), Some("tok".to_owned()));
    let snapshot = outcome.state.snapshot.expect("snapshot");
    assert_eq!(snapshot.user_id, 42);
    assert_eq!(snapshot.username, "maria");
    assert_eq!(snapshot.role, Role::User);
    assert_eq!(snapshot.token.as_deref(), Some("tok"));
    assert!(!outcome.purge_credentials);
}

#[test]
fn logged_in_response_without_cached_token_has_no_token() {
    let outcome = SessionState::apply_check(Some(logged_in_check("admin")), None);
    let snapshot = outcome.state.snapshot.expect("snapshot");
    assert!(snapshot.token.is_none());
}

#[test]
fn logged_in_response_missing_identity_is_treated_as_logged_out() {
    let malformed: CheckSessionResponse =
        serde_json::from_value(serde_json::json!({"logged_in": true})).expect("parse");
    let outcome = SessionState::apply_check(Some(malformed), Some("tok".to_owned()));
    assert!(outcome.state.snapshot.is_none());
    assert!(outcome.purge_credentials);
}

#[test]
fn missing_role_defaults_to_plain_user() {
    let check: CheckSessionResponse = serde_json::from_value(serde_json::json!({
        "logged_in": true,
        "user_id": 1,
        "username": "tom"
    }))
    .expect("parse");
    let outcome = SessionState::apply_check(Some(check), None);
    assert!(!outcome.state.is_admin());
    assert!(outcome.state.is_logged_in());
}

// =============================================================
// predicates
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert!(!state.is_admin());
    assert!(!state.loading);
}

#[test]
fn pending_state_is_loading_and_logged_out() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(!state.is_logged_in());
}

#[test]
fn admin_role_is_admin_and_logged_in() {
    let state = SessionState::logged_in(1, "maria".to_owned(), Role::Admin, None);
    assert!(state.is_logged_in());
    assert!(state.is_admin());
}

#[test]
fn unknown_role_is_never_admin() {
    let state = SessionState::logged_in(1, "x".to_owned(), Role::Unknown, None);
    assert!(state.is_logged_in());
    assert!(!state.is_admin());
}

// =============================================================
// auth_headers
// =============================================================

#[test]
fn auth_headers_with_token_include_bearer_claim() {
    let state = SessionState::logged_in(1, "maria".to_owned(), Role::User, Some("tok".to_owned()));
    let headers = state.auth_headers();
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
    assert!(headers.contains(&("Authorization", "Bearer tok".to_owned())));
}

#[test]
fn auth_headers_without_snapshot_have_no_authorization() {
    let headers = SessionState::default().auth_headers();
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn auth_headers_without_token_have_no_authorization() {
    let state = SessionState::logged_in(1, "maria".to_owned(), Role::User, None);
    assert!(!state.auth_headers().iter().any(|(k, _)| *k == "Authorization"));
}

// =============================================================
// apply_logout
// =============================================================

#[test]
fn successful_logout_clears_snapshot_purges_and_redirects_to_root() {
    let state = SessionState::logged_in(1, "maria".to_owned(), Role::Admin, Some("tok".to_owned()));
    let outcome = apply_logout(&state, &Ok(()));
    assert!(outcome.state.snapshot.is_none());
    assert!(outcome.purge_credentials);
    assert_eq!(outcome.redirect_to, Some("/"));
}

#[test]
fn failed_logout_leaves_state_untouched_and_purges_nothing() {
    let state = SessionState::logged_in(1, "maria".to_owned(), Role::User, Some("tok".to_owned()));
    let outcome = apply_logout(&state, &Err("logout failed: 500".to_owned()));
    assert_eq!(outcome.state, state);
    assert!(!outcome.purge_credentials);
    assert!(outcome.redirect_to.is_none());
}

#[test]
fn logout_outcomes_carry_distinct_user_notices() {
    let state = SessionState::logged_in(1, "tom".to_owned(), Role::User, None);
    let ok = apply_logout(&state, &Ok(()));
    let err = apply_logout(&state, &Err("network".to_owned()));
    assert!(!ok.notice.is_empty());
    assert!(!err.notice.is_empty());
    assert_ne!(ok.notice, err.notice);
}

// =============================================================
// guards (redirect side effects are no-ops off the browser)
// =============================================================

#[test]
fn require_login_passes_for_logged_in_user() {
    let state = SessionState::logged_in(1, "tom".to_owned(), Role::User, None);
    assert!(require_login(&state));
}

#[test]
fn require_login_fails_when_logged_out() {
    assert!(!require_login(&SessionState::default()));
}

#[test]
fn require_admin_fails_for_plain_user() {
    let state = SessionState::logged_in(1, "tom".to_owned(), Role::User, None);
    assert!(!require_admin(&state));
    assert!(require_login(&state));
}

#[test]
fn require_admin_passes_for_admin() {
    let state = SessionState::logged_in(1, "maria".to_owned(), Role::Admin, None);
    assert!(require_admin(&state));
}
