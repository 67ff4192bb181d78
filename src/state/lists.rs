//! Lists-of-the-current-board store.
//!
//! Keyed by the owning board: `fetch_lists` records which board the cached
//! lists belong to, and the board page clears the store on unmount.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use serde_json::json;

use crate::net::http::{self, ApiError};
use crate::net::types::List;
use crate::state::errors::{self, ErrorsState};

/// Cached lists of one board.
#[derive(Clone, Debug, Default)]
pub struct ListsState {
    pub board_id: Option<i64>,
    pub lists: Vec<List>,
}

impl ListsState {
    /// Replace the cache wholesale and record the owning board.
    pub fn replace_all(&mut self, board_id: i64, lists: Vec<List>) {
        self.board_id = Some(board_id);
        self.lists = lists;
    }

    /// Append a freshly created list.
    pub fn insert(&mut self, list: List) {
        self.lists.push(list);
    }

    /// Replace the cached list with the server's representation.
    pub fn replace(&mut self, list: List) {
        if let Some(slot) = self.lists.iter_mut().find(|l| l.id == list.id) {
            *slot = list;
        }
    }

    /// Remove exactly the list with the given id.
    pub fn remove(&mut self, id: i64) {
        self.lists.retain(|l| l.id != id);
    }

    /// Drop the cache, e.g. when leaving the board view.
    pub fn clear(&mut self) {
        self.board_id = None;
        self.lists.clear();
    }
}

/// Fetch all lists of a board and replace the cache wholesale.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_lists(
    lists: RwSignal<ListsState>,
    errors: RwSignal<ErrorsState>,
    board_id: i64,
) -> Result<Vec<List>, ApiError> {
    let fetched: Vec<List> = http::get_json(&format!("/boards/{board_id}/lists/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch lists", e))?;
    lists.update(|s| s.replace_all(board_id, fetched.clone()));
    Ok(fetched)
}

/// Create a list on a board and append it to the cache.
///
/// # Errors
///
/// Propagates the server's validation errors.
pub async fn create_list(
    lists: RwSignal<ListsState>,
    errors: RwSignal<ErrorsState>,
    board_id: i64,
    title: &str,
    color: Option<&str>,
) -> Result<List, ApiError> {
    let body = json!({"title": title, "color": color, "board": board_id});
    let list: List = http::post_json(&format!("/boards/{board_id}/lists/"), &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to create list", e))?;
    lists.update(|s| s.insert(list.clone()));
    Ok(list)
}

/// Patch a list and replace the cached copy with the response.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn update_list(
    lists: RwSignal<ListsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
    patch: &serde_json::Value,
) -> Result<List, ApiError> {
    let list: List = http::patch_json(&format!("/lists/{id}/"), patch)
        .await
        .inspect_err(|e| errors::report(errors, "failed to update list", e))?;
    lists.update(|s| s.replace(list.clone()));
    Ok(list)
}

/// Delete a list and drop it from the cache.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn delete_list(
    lists: RwSignal<ListsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<(), ApiError> {
    http::delete(&format!("/lists/{id}/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to delete list", e))?;
    lists.update(|s| s.remove(id));
    Ok(())
}

/// Move a list to a new position, then re-fetch the board's lists so local
/// positions match the server's reassignment.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn move_list(
    lists: RwSignal<ListsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
    position: i64,
) -> Result<List, ApiError> {
    let body = json!({"position": position});
    let moved: List = http::post_json(&format!("/lists/{id}/move/"), &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to move list", e))?;
    if let Some(board_id) = lists.get_untracked().board_id {
        fetch_lists(lists, errors, board_id).await?;
    }
    Ok(moved)
}
