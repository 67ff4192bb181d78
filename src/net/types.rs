//! Wire types for the task board REST API.
//!
//! The API serves slightly different shapes for list views and detail views
//! of the same resource (for example boards with and without the expanded
//! member list), so optional fields default instead of failing the decode.
//! All ids are server-assigned integers; timestamps stay as ISO-8601 strings
//! since the client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by `POST /users/auth/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// An account as returned by the user endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Profile fields attached to a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub avatar_thumbnail_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
}

/// `GET/PATCH /users/profile/` responds with the user and profile side by side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
    pub profile: Profile,
}

/// `POST /users/auth/register/` creates the account and signs it in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
    pub tokens: TokenPair,
}

/// A board, in either list-view or detail-view shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    /// Owner username; list views use `owner_username`, detail views `owner`.
    #[serde(default, alias = "owner")]
    pub owner_username: Option<String>,
    #[serde(default)]
    pub members_count: Option<u32>,
    #[serde(default)]
    pub members: Vec<BoardMember>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A board member or membership row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMember {
    pub id: i64,
    #[serde(default, alias = "user_username")]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One entry in a board's activity log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub action_display: Option<String>,
    #[serde(default)]
    pub user_username: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A pending board invitation for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    #[serde(default)]
    pub board_title: Option<String>,
    #[serde(default)]
    pub invited_email: Option<String>,
    #[serde(default)]
    pub invited_by_username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_used: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// A list (column) within a board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A task within a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Id of the owning list.
    pub list: i64,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Decode a task from an action-endpoint response.
///
/// `POST /tasks/:id/toggle-complete/` wraps the task as
/// `{ "message": ..., "task": {...} }` while other task endpoints return the
/// bare object; accept both shapes.
pub fn unwrap_task_payload(value: serde_json::Value) -> Result<Task, serde_json::Error> {
    let inner = match value {
        serde_json::Value::Object(mut map) if map.contains_key("task") => {
            map.remove("task").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner)
}
