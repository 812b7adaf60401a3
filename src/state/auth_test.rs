use super::*;

fn user(id: &str) -> User {
    User { id: id.to_owned(), email: None, user_metadata: serde_json::Value::Null }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Lookup lifecycle
// =============================================================

#[test]
fn begin_lookup_keeps_previous_user() {
    let mut state = AuthState { user: Some(user("u1")), loading: false };
    state.begin_lookup();
    assert!(state.loading);
    assert!(state.is_signed_in());
}

#[test]
fn finish_lookup_replaces_user_and_clears_loading() {
    let mut state = AuthState { user: Some(user("u1")), loading: true };
    state.finish_lookup(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());

    state.finish_lookup(Some(user("u2")));
    assert_eq!(state.user.map(|u| u.id), Some("u2".to_owned()));
}
