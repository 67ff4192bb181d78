//! Board collection store.
//!
//! Owns the signed-in user's board list and the one "current" board shown
//! on the board page. Collections are replaced wholesale on fetch and
//! patched piecemeal after mutations, always with the server's returned
//! representation.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use leptos::prelude::{RwSignal, Update};
use serde_json::json;

use crate::net::http::{self, ApiError};
use crate::net::types::{Activity, Board, BoardMember, Invitation};
use crate::state::errors::{self, ErrorsState};

/// Cached boards plus the active board, if one is open.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub boards: Vec<Board>,
    pub current: Option<Board>,
}

impl BoardsState {
    pub fn replace_all(&mut self, boards: Vec<Board>) {
        self.boards = boards;
    }

    /// Append a freshly created board.
    pub fn insert(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Replace the cached board (and the current board when it matches)
    /// with the server's representation.
    pub fn replace(&mut self, board: Board) {
        if let Some(slot) = self.boards.iter_mut().find(|b| b.id == board.id) {
            *slot = board.clone();
        }
        if self.current.as_ref().is_some_and(|c| c.id == board.id) {
            self.current = Some(board);
        }
    }

    /// Remove exactly the board with the given id.
    pub fn remove(&mut self, id: i64) {
        self.boards.retain(|b| b.id != id);
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
        }
    }

    pub fn set_current(&mut self, board: Board) {
        self.current = Some(board);
    }
}

/// Fetch all boards visible to the user and replace the cache wholesale.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_boards(
    boards: RwSignal<BoardsState>,
    errors: RwSignal<ErrorsState>,
) -> Result<Vec<Board>, ApiError> {
    let list: Vec<Board> = http::get_json("/boards/")
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch boards", e))?;
    boards.update(|s| s.replace_all(list.clone()));
    Ok(list)
}

/// Fetch one board in detail shape and make it current.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_board(
    boards: RwSignal<BoardsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<Board, ApiError> {
    let board: Board = http::get_json(&format!("/boards/{id}/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch board", e))?;
    boards.update(|s| s.set_current(board.clone()));
    Ok(board)
}

/// Create a board and append it to the cache.
///
/// # Errors
///
/// Propagates the server error (for example the per-user board limit).
pub async fn create_board(
    boards: RwSignal<BoardsState>,
    errors: RwSignal<ErrorsState>,
    title: &str,
) -> Result<Board, ApiError> {
    let body = json!({"title": title});
    let board: Board = http::post_json("/boards/", &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to create board", e))?;
    boards.update(|s| s.insert(board.clone()));
    Ok(board)
}

/// Patch a board and replace the cached copy with the response.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn update_board(
    boards: RwSignal<BoardsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
    patch: &serde_json::Value,
) -> Result<Board, ApiError> {
    let board: Board = http::patch_json(&format!("/boards/{id}/"), patch)
        .await
        .inspect_err(|e| errors::report(errors, "failed to update board", e))?;
    boards.update(|s| s.replace(board.clone()));
    Ok(board)
}

/// Delete a board and drop it from the cache.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn delete_board(
    boards: RwSignal<BoardsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<(), ApiError> {
    http::delete(&format!("/boards/{id}/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to delete board", e))?;
    boards.update(|s| s.remove(id));
    Ok(())
}

/// Leave a board someone else owns; locally the edit matches a delete.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn leave_board(
    boards: RwSignal<BoardsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<(), ApiError> {
    http::post_unit(&format!("/boards/{id}/leave/"), &json!({}))
        .await
        .inspect_err(|e| errors::report(errors, "failed to leave board", e))?;
    boards.update(|s| s.remove(id));
    Ok(())
}

/// Invite a registered user by username or email. Not cached locally.
///
/// # Errors
///
/// Propagates the server error (unknown user, member limit, duplicate).
pub async fn invite_member(
    errors: RwSignal<ErrorsState>,
    board_id: i64,
    identifier: &str,
    role: &str,
) -> Result<serde_json::Value, ApiError> {
    let body = json!({"identifier": identifier, "role": role});
    http::post_json(&format!("/boards/{board_id}/invite/user/"), &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to invite member", e))
}

/// Invite an unregistered address by email. Not cached locally.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn invite_email(
    errors: RwSignal<ErrorsState>,
    board_id: i64,
    email: &str,
    role: &str,
) -> Result<serde_json::Value, ApiError> {
    let body = json!({"invited_email": email, "role": role});
    http::post_json(&format!("/boards/{board_id}/invite/"), &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to send invitation", e))
}

/// Fetch the board's member list. Returned to the caller, not cached.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_members(
    errors: RwSignal<ErrorsState>,
    board_id: i64,
) -> Result<Vec<BoardMember>, ApiError> {
    http::get_json(&format!("/boards/{board_id}/members/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch members", e))
}

/// Fetch invitations sent for a board. Returned to the caller, not cached.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_board_invitations(
    errors: RwSignal<ErrorsState>,
    board_id: i64,
) -> Result<Vec<Invitation>, ApiError> {
    http::get_json(&format!("/boards/{board_id}/invite/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch invitations", e))
}

/// Fetch the board's activity log. Returned to the caller, not cached.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_activities(
    errors: RwSignal<ErrorsState>,
    board_id: i64,
) -> Result<Vec<Activity>, ApiError> {
    http::get_json(&format!("/boards/{board_id}/activities/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch activities", e))
}
