//! Per-list task cache store.
//!
//! The cache maps list id to that list's tasks; at most one task is open in
//! the detail modal at a time. Mutations patch the cache with the server's
//! returned representation, always replacing cached objects wholesale. A
//! move re-fetches every affected list instead of splicing locally, so
//! positions always reflect the server's reassignment.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::collections::HashMap;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use serde_json::json;

use crate::net::http::{self, ApiError};
use crate::net::types::{Task, unwrap_task_payload};
use crate::state::errors::{self, ErrorsState};

/// Cached tasks keyed by list id, plus the task open in the modal.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub tasks_by_list: HashMap<i64, Vec<Task>>,
    pub current: Option<Task>,
    pub modal_open: bool,
}

impl TasksState {
    /// Tasks of a list, or empty if the list was never fetched.
    pub fn tasks_for(&self, list_id: i64) -> Vec<Task> {
        self.tasks_by_list.get(&list_id).cloned().unwrap_or_default()
    }

    /// Replace one list's cache entry wholesale.
    pub fn replace_list(&mut self, list_id: i64, tasks: Vec<Task>) {
        self.tasks_by_list.insert(list_id, tasks);
    }

    /// Append a freshly created task to its list, creating the cache entry
    /// if the list was never fetched.
    pub fn insert(&mut self, task: Task) {
        self.tasks_by_list.entry(task.list).or_default().push(task);
    }

    /// Replace the cached task object (never merge) with the server's
    /// representation, both in the list cache and in the open modal.
    pub fn replace(&mut self, task: Task) {
        if let Some(tasks) = self.tasks_by_list.get_mut(&task.list) {
            if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
                *slot = task.clone();
            }
        }
        if self.current.as_ref().is_some_and(|t| t.id == task.id) {
            self.current = Some(task);
        }
    }

    /// The list a task belongs to: the open modal task when it matches,
    /// otherwise a scan of the cache.
    pub fn owning_list(&self, id: i64) -> Option<i64> {
        if let Some(current) = &self.current {
            if current.id == id {
                return Some(current.list);
            }
        }
        self.tasks_by_list
            .iter()
            .find(|(_, tasks)| tasks.iter().any(|t| t.id == id))
            .map(|(list_id, _)| *list_id)
    }

    /// Remove exactly the task with the given id, closing the modal when it
    /// was the open task. Returns the owning list when known.
    pub fn remove(&mut self, id: i64) -> Option<i64> {
        let list_id = self.owning_list(id);
        if let Some(list_id) = list_id {
            if let Some(tasks) = self.tasks_by_list.get_mut(&list_id) {
                tasks.retain(|t| t.id != id);
            }
        }
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.close();
        }
        list_id
    }

    /// Lists whose cache entries a move invalidates: the source list (found
    /// by cache scan) and the destination, deduplicated.
    pub fn affected_lists(&self, id: i64, new_list: Option<i64>) -> Vec<i64> {
        let mut affected = Vec::new();
        let source = self
            .tasks_by_list
            .iter()
            .find(|(_, tasks)| tasks.iter().any(|t| t.id == id))
            .map(|(list_id, _)| *list_id);
        if let Some(source) = source {
            affected.push(source);
        }
        if let Some(dest) = new_list {
            if !affected.contains(&dest) {
                affected.push(dest);
            }
        }
        affected
    }

    pub fn open(&mut self, task: Task) {
        self.current = Some(task);
        self.modal_open = true;
    }

    pub fn close(&mut self) {
        self.current = None;
        self.modal_open = false;
    }

    /// Drop everything, e.g. when leaving the board view.
    pub fn clear(&mut self) {
        self.tasks_by_list.clear();
        self.current = None;
        self.modal_open = false;
    }
}

/// Fetch one list's tasks and replace its cache entry wholesale.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_tasks(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    list_id: i64,
) -> Result<Vec<Task>, ApiError> {
    let fetched: Vec<Task> = http::get_json(&format!("/tasks/lists/{list_id}/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch tasks", e))?;
    tasks.update(|s| s.replace_list(list_id, fetched.clone()));
    Ok(fetched)
}

/// Create a task in a list and append it to the cache.
///
/// # Errors
///
/// Propagates the server's validation errors.
pub async fn create_task(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    list_id: i64,
    title: &str,
) -> Result<Task, ApiError> {
    let body = json!({"title": title, "list": list_id});
    let task: Task = http::post_json(&format!("/tasks/lists/{list_id}/"), &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to create task", e))?;
    tasks.update(|s| s.insert(task.clone()));
    Ok(task)
}

/// Fetch a single task in detail shape and make it current.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_task(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<Task, ApiError> {
    let task: Task = http::get_json(&format!("/tasks/{id}/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch task", e))?;
    tasks.update(|s| s.current = Some(task.clone()));
    Ok(task)
}

/// Fetch a task and open it in the detail modal.
///
/// # Errors
///
/// Propagates the fetch error; the modal stays closed on failure.
pub async fn open_task(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<Task, ApiError> {
    let task = fetch_task(tasks, errors, id).await?;
    tasks.update(|s| s.modal_open = true);
    Ok(task)
}

/// Close the detail modal and drop the current task.
pub fn close_task(tasks: RwSignal<TasksState>) {
    tasks.update(TasksState::close);
}

/// Patch a task and replace the cached object with the response.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn update_task(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
    patch: &serde_json::Value,
) -> Result<Task, ApiError> {
    let task: Task = http::patch_json(&format!("/tasks/{id}/"), patch)
        .await
        .inspect_err(|e| errors::report(errors, "failed to update task", e))?;
    tasks.update(|s| s.replace(task.clone()));
    Ok(task)
}

/// Toggle a task's completion flag and replace the cached object with the
/// server's returned representation.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn toggle_complete(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<Task, ApiError> {
    let value: serde_json::Value =
        http::post_json(&format!("/tasks/{id}/toggle-complete/"), &json!({}))
            .await
            .inspect_err(|e| errors::report(errors, "failed to toggle completion", e))?;
    let task = unwrap_task_payload(value).map_err(|e| {
        let err = ApiError {
            status: 0,
            message: format!("could not decode task: {e}"),
            payload: None,
        };
        errors::report(errors, "failed to toggle completion", &err);
        err
    })?;
    tasks.update(|s| s.replace(task.clone()));
    Ok(task)
}

/// Delete a task, remove it from the cache, and close the modal when the
/// open task was the one deleted.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn delete_task(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
) -> Result<(), ApiError> {
    http::delete(&format!("/tasks/{id}/"))
        .await
        .inspect_err(|e| errors::report(errors, "failed to delete task", e))?;
    tasks.update(|s| {
        s.remove(id);
    });
    Ok(())
}

/// Move a task to another list and/or position, then re-fetch every
/// affected list so cached positions match the server's reassignment.
///
/// # Errors
///
/// Propagates the move error, or a re-fetch error for an affected list.
pub async fn move_task(
    tasks: RwSignal<TasksState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
    new_list: Option<i64>,
    new_position: Option<i64>,
) -> Result<Task, ApiError> {
    let mut payload = serde_json::Map::new();
    if let Some(list) = new_list {
        payload.insert("new_list".to_owned(), json!(list));
    }
    if let Some(position) = new_position {
        payload.insert("new_position".to_owned(), json!(position));
    }
    let affected = tasks.get_untracked().affected_lists(id, new_list);
    let moved: Task = http::post_json(
        &format!("/tasks/{id}/move/"),
        &serde_json::Value::Object(payload),
    )
    .await
    .inspect_err(|e| errors::report(errors, "failed to move task", e))?;
    for list_id in affected {
        fetch_tasks(tasks, errors, list_id).await?;
    }
    Ok(moved)
}

/// Drop the whole cache, e.g. when leaving the board view.
pub fn clear(tasks: RwSignal<TasksState>) {
    tasks.update(TasksState::clear);
}
