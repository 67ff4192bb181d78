use super::*;

fn list(id: i64, title: &str) -> List {
    List {
        id,
        title: title.to_owned(),
        ..List::default()
    }
}

#[test]
fn lists_state_defaults_empty() {
    let state = ListsState::default();
    assert!(state.board_id.is_none());
    assert!(state.lists.is_empty());
}

#[test]
fn replace_all_records_the_owning_board() {
    let mut state = ListsState::default();
    state.replace_all(7, vec![list(1, "Todo"), list(2, "Doing")]);
    assert_eq!(state.board_id, Some(7));
    assert_eq!(state.lists.len(), 2);
}

#[test]
fn insert_appends_exactly_one() {
    let mut state = ListsState::default();
    state.replace_all(7, vec![list(1, "Todo")]);
    state.insert(list(2, "Done"));
    assert_eq!(state.lists.len(), 2);
    assert_eq!(state.lists[1].title, "Done");
}

#[test]
fn replace_swaps_by_id_only() {
    let mut state = ListsState::default();
    state.replace_all(7, vec![list(1, "Todo"), list(2, "Doing")]);
    state.replace(list(2, "In Review"));
    assert_eq!(state.lists[1].title, "In Review");
    assert_eq!(state.lists[0].title, "Todo");

    state.replace(list(9, "ghost"));
    assert_eq!(state.lists.len(), 2);
}

#[test]
fn remove_drops_only_the_matching_id() {
    let mut state = ListsState::default();
    state.replace_all(7, vec![list(1, "Todo"), list(2, "Doing"), list(3, "Done")]);
    state.remove(2);
    let ids: Vec<i64> = state.lists.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn clear_resets_board_and_lists() {
    let mut state = ListsState::default();
    state.replace_all(7, vec![list(1, "Todo")]);
    state.clear();
    assert!(state.board_id.is_none());
    assert!(state.lists.is_empty());
}
