use super::*;

fn board(id: i64, title: &str) -> Board {
    Board {
        id,
        title: title.to_owned(),
        ..Board::default()
    }
}

#[test]
fn boards_state_defaults_empty() {
    let state = BoardsState::default();
    assert!(state.boards.is_empty());
    assert!(state.current.is_none());
}

#[test]
fn insert_appends_exactly_one() {
    let mut state = BoardsState::default();
    state.replace_all(vec![board(1, "a")]);
    state.insert(board(2, "b"));
    assert_eq!(state.boards.len(), 2);
    assert_eq!(state.boards[1].id, 2);
}

#[test]
fn replace_swaps_by_id_and_updates_current() {
    let mut state = BoardsState::default();
    state.replace_all(vec![board(1, "a"), board(2, "b")]);
    state.set_current(board(2, "b"));

    state.replace(board(2, "renamed"));
    assert_eq!(state.boards[1].title, "renamed");
    assert_eq!(state.current.as_ref().map(|b| b.title.as_str()), Some("renamed"));
    // The other entry is untouched.
    assert_eq!(state.boards[0].title, "a");
}

#[test]
fn replace_with_unknown_id_changes_nothing() {
    let mut state = BoardsState::default();
    state.replace_all(vec![board(1, "a")]);
    state.replace(board(9, "ghost"));
    assert_eq!(state.boards.len(), 1);
    assert_eq!(state.boards[0].title, "a");
}

#[test]
fn remove_drops_only_the_matching_id() {
    let mut state = BoardsState::default();
    state.replace_all(vec![board(1, "a"), board(2, "b"), board(3, "c")]);
    state.remove(2);
    let ids: Vec<i64> = state.boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_clears_current_when_it_matches() {
    let mut state = BoardsState::default();
    state.replace_all(vec![board(1, "a")]);
    state.set_current(board(1, "a"));
    state.remove(1);
    assert!(state.current.is_none());

    state.replace_all(vec![board(2, "b")]);
    state.set_current(board(2, "b"));
    state.remove(3);
    assert!(state.current.is_some());
}

#[test]
fn fetch_replaces_the_collection_wholesale() {
    let mut state = BoardsState::default();
    state.replace_all(vec![board(1, "a"), board(2, "b")]);
    state.replace_all(vec![board(3, "c")]);
    assert_eq!(state.boards.len(), 1);
    assert_eq!(state.boards[0].id, 3);
}
