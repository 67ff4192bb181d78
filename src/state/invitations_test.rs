use super::*;

fn invitation(id: i64, board: &str) -> Invitation {
    Invitation {
        id,
        board_title: Some(board.to_owned()),
        ..Invitation::default()
    }
}

#[test]
fn invitations_state_defaults_empty() {
    assert!(InvitationsState::default().invitations.is_empty());
}

#[test]
fn replace_all_is_wholesale() {
    let mut state = InvitationsState::default();
    state.replace_all(vec![invitation(1, "a"), invitation(2, "b")]);
    state.replace_all(vec![invitation(3, "c")]);
    assert_eq!(state.invitations.len(), 1);
    assert_eq!(state.invitations[0].id, 3);
}

#[test]
fn remove_drops_only_the_matching_id() {
    let mut state = InvitationsState::default();
    state.replace_all(vec![invitation(1, "a"), invitation(2, "b")]);
    state.remove(1);
    assert_eq!(state.invitations.len(), 1);
    assert_eq!(state.invitations[0].id, 2);

    state.remove(99);
    assert_eq!(state.invitations.len(), 1);
}

#[test]
fn response_actions_match_the_api_contract() {
    assert_eq!(InvitationResponse::Accept.as_action(), "accept");
    assert_eq!(InvitationResponse::Reject.as_action(), "reject");
}
