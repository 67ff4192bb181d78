use super::*;

#[test]
fn errors_state_default_has_no_message() {
    assert!(ErrorsState::default().message.is_none());
}

#[test]
fn set_replaces_the_previous_message() {
    let mut state = ErrorsState::default();
    state.set("first");
    state.set("second");
    assert_eq!(state.message.as_deref(), Some("second"));
}

#[test]
fn clear_removes_the_message() {
    let mut state = ErrorsState::default();
    state.set("boom");
    state.clear();
    assert!(state.message.is_none());
}
