use super::*;

// =============================================================
// Board shapes
// =============================================================

#[test]
fn board_decodes_list_view_shape() {
    let board: Board = serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Sprint 12",
        "description": null,
        "color": "#60a5fa",
        "is_public": false,
        "owner_username": "maria",
        "members_count": 4,
        "created_at": "2025-01-02T10:00:00Z",
        "updated_at": "2025-01-03T10:00:00Z"
    }))
    .expect("board");
    assert_eq!(board.id, 3);
    assert_eq!(board.owner_username.as_deref(), Some("maria"));
    assert!(board.members.is_empty());
}

#[test]
fn board_decodes_detail_view_shape_with_owner_alias() {
    let board: Board = serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Sprint 12",
        "is_public": true,
        "owner": "maria",
        "members": [
            {"id": 1, "username": "maria", "role": "admin", "status": "accepted"},
            {"id": 2, "user_username": "omar", "role": "member", "status": "pending"}
        ],
        "members_count": 2,
        "can_add_member": true
    }))
    .expect("board");
    assert_eq!(board.owner_username.as_deref(), Some("maria"));
    assert_eq!(board.members.len(), 2);
    // Membership rows use `user_username`; the alias maps both spellings.
    assert_eq!(board.members[1].username.as_deref(), Some("omar"));
}

// =============================================================
// Task shapes
// =============================================================

#[test]
fn task_decodes_with_minimal_fields() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": 9,
        "title": "Write release notes",
        "list": 4,
        "position": 2,
        "is_completed": false
    }))
    .expect("task");
    assert_eq!(task.list, 4);
    assert!(!task.is_completed);
    assert!(task.completed_at.is_none());
}

#[test]
fn unwrap_task_payload_accepts_wrapped_shape() {
    let task = unwrap_task_payload(serde_json::json!({
        "message": "Task marked as completed",
        "task": {"id": 9, "title": "Write release notes", "list": 4, "is_completed": true}
    }))
    .expect("wrapped task");
    assert_eq!(task.id, 9);
    assert!(task.is_completed);
}

#[test]
fn unwrap_task_payload_accepts_bare_shape() {
    let task = unwrap_task_payload(serde_json::json!({
        "id": 9, "title": "Write release notes", "list": 4
    }))
    .expect("bare task");
    assert_eq!(task.id, 9);
}

#[test]
fn unwrap_task_payload_rejects_garbage() {
    assert!(unwrap_task_payload(serde_json::json!({"task": null})).is_err());
    assert!(unwrap_task_payload(serde_json::json!("nope")).is_err());
}

// =============================================================
// Profile response nesting
// =============================================================

#[test]
fn profile_response_nests_user_and_profile() {
    let resp: ProfileResponse = serde_json::from_value(serde_json::json!({
        "user": {"id": 1, "username": "maria", "email": "maria@example.com"},
        "profile": {"bio": "hi", "preferred_language": "en"}
    }))
    .expect("profile response");
    assert_eq!(resp.user.username, "maria");
    assert_eq!(resp.profile.bio.as_deref(), Some("hi"));
}
