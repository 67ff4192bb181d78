//! Shared error-display state.
//!
//! Every failed store action reports here so the global banner can show a
//! human-readable message; the structured error still flows back to the
//! caller for inline handling.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::http::ApiError;

/// Latest surfaced error message, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorsState {
    pub message: Option<String>,
}

impl ErrorsState {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

/// Log a failed action and surface its message in the banner.
pub fn report(errors: RwSignal<ErrorsState>, context: &str, err: &ApiError) {
    leptos::logging::warn!("{context}: {err}");
    errors.update(|e| e.set(err.message.clone()));
}
