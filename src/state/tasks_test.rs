use super::*;

fn task(id: i64, list: i64, title: &str) -> Task {
    Task {
        id,
        list,
        title: title.to_owned(),
        ..Task::default()
    }
}

#[test]
fn tasks_state_defaults_empty() {
    let state = TasksState::default();
    assert!(state.tasks_by_list.is_empty());
    assert!(state.current.is_none());
    assert!(!state.modal_open);
}

#[test]
fn tasks_for_unfetched_list_is_empty() {
    let state = TasksState::default();
    assert!(state.tasks_for(42).is_empty());
}

// =============================================================
// Create / insert
// =============================================================

#[test]
fn insert_appends_exactly_one() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    state.insert(task(2, 4, "b"));
    assert_eq!(state.tasks_for(4).len(), 2);
}

#[test]
fn insert_creates_entry_for_unfetched_list() {
    let mut state = TasksState::default();
    state.insert(task(1, 9, "first"));
    assert_eq!(state.tasks_for(9).len(), 1);
}

// =============================================================
// Replace semantics
// =============================================================

#[test]
fn replace_swaps_the_cached_object_wholesale() {
    let mut state = TasksState::default();
    let mut stale = task(1, 4, "draft");
    stale.description = Some("keep me?".to_owned());
    state.replace_list(4, vec![stale]);

    // The server's representation has no description; after replace the
    // cached object must not retain the old field (replace, not merge).
    state.replace(task(1, 4, "final"));
    let cached = &state.tasks_for(4)[0];
    assert_eq!(cached.title, "final");
    assert!(cached.description.is_none());
}

#[test]
fn replace_updates_the_open_modal_task() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    state.open(task(1, 4, "a"));

    let mut toggled = task(1, 4, "a");
    toggled.is_completed = true;
    state.replace(toggled);
    assert!(state.current.as_ref().is_some_and(|t| t.is_completed));
    assert!(state.tasks_for(4)[0].is_completed);
}

#[test]
fn replace_leaves_other_tasks_untouched() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a"), task(2, 4, "b")]);
    state.replace(task(2, 4, "b2"));
    assert_eq!(state.tasks_for(4)[0].title, "a");
    assert_eq!(state.tasks_for(4)[1].title, "b2");
}

// =============================================================
// Delete / remove
// =============================================================

#[test]
fn remove_drops_only_the_matching_id() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a"), task(2, 4, "b"), task(3, 4, "c")]);
    assert_eq!(state.remove(2), Some(4));
    let ids: Vec<i64> = state.tasks_for(4).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_finds_the_list_via_the_open_task() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    state.open(task(1, 4, "a"));
    assert_eq!(state.remove(1), Some(4));
    assert!(state.tasks_for(4).is_empty());
}

#[test]
fn remove_closes_the_modal_for_the_open_task() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    state.open(task(1, 4, "a"));
    state.remove(1);
    assert!(!state.modal_open);
    assert!(state.current.is_none());
}

#[test]
fn remove_unknown_id_changes_nothing() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    assert_eq!(state.remove(99), None);
    assert_eq!(state.tasks_for(4).len(), 1);
}

// =============================================================
// Move repair: affected lists
// =============================================================

#[test]
fn affected_lists_covers_source_and_destination() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    state.replace_list(5, vec![]);
    assert_eq!(state.affected_lists(1, Some(5)), vec![4, 5]);
}

#[test]
fn affected_lists_dedups_same_list_move() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    assert_eq!(state.affected_lists(1, Some(4)), vec![4]);
}

#[test]
fn affected_lists_without_cached_source() {
    let state = TasksState::default();
    assert_eq!(state.affected_lists(1, Some(5)), vec![5]);
    assert!(state.affected_lists(1, None).is_empty());
}

// =============================================================
// Modal lifecycle
// =============================================================

#[test]
fn open_then_close_resets_the_modal() {
    let mut state = TasksState::default();
    state.open(task(1, 4, "a"));
    assert!(state.modal_open);
    state.close();
    assert!(!state.modal_open);
    assert!(state.current.is_none());
}

#[test]
fn clear_drops_everything() {
    let mut state = TasksState::default();
    state.replace_list(4, vec![task(1, 4, "a")]);
    state.open(task(1, 4, "a"));
    state.clear();
    assert!(state.tasks_by_list.is_empty());
    assert!(state.current.is_none());
    assert!(!state.modal_open);
}
