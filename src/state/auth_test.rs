use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.access.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn access_token_drives_is_authenticated() {
    let state = AuthState {
        access: Some("tok".to_owned()),
        ..AuthState::default()
    };
    assert!(state.is_authenticated());
}

// =============================================================
// Teardown latch
// =============================================================

#[test]
fn teardown_clears_everything() {
    let mut state = AuthState {
        user: Some(User {
            id: 1,
            username: "maria".to_owned(),
            ..User::default()
        }),
        access: Some("a".to_owned()),
        refresh: Some("r".to_owned()),
        loading: false,
    };
    assert!(state.teardown());
    assert!(state.user.is_none());
    assert!(state.access.is_none());
    assert!(state.refresh.is_none());
}

#[test]
fn teardown_reports_a_session_exactly_once() {
    let mut state = AuthState {
        access: Some("a".to_owned()),
        ..AuthState::default()
    };
    assert!(state.teardown());
    assert!(!state.teardown());
}

#[test]
fn teardown_without_session_is_false() {
    assert!(!AuthState::default().teardown());
}
