use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_starts_loading() {
    // The first reconciliation pass has not completed yet at construction.
    let state = AuthState::default();
    assert!(state.loading);
}
