//! Pending-invitation store for the signed-in user.

#[cfg(test)]
#[path = "invitations_test.rs"]
mod invitations_test;

use leptos::prelude::{RwSignal, Update};
use serde_json::json;

use crate::net::http::{self, ApiError};
use crate::net::types::Invitation;
use crate::state::errors::{self, ErrorsState};

/// How the user answers an invitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvitationResponse {
    Accept,
    Reject,
}

impl InvitationResponse {
    /// The `action` value the respond endpoint expects.
    pub fn as_action(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

/// Invitations waiting for the user's response.
#[derive(Clone, Debug, Default)]
pub struct InvitationsState {
    pub invitations: Vec<Invitation>,
}

impl InvitationsState {
    pub fn replace_all(&mut self, invitations: Vec<Invitation>) {
        self.invitations = invitations;
    }

    /// Remove exactly the invitation with the given id.
    pub fn remove(&mut self, id: i64) {
        self.invitations.retain(|inv| inv.id != id);
    }
}

/// Fetch the user's pending invitations and replace the cache wholesale.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_invitations(
    invitations: RwSignal<InvitationsState>,
    errors: RwSignal<ErrorsState>,
) -> Result<Vec<Invitation>, ApiError> {
    let fetched: Vec<Invitation> = http::get_json("/invitations/")
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch invitations", e))?;
    invitations.update(|s| s.replace_all(fetched.clone()));
    Ok(fetched)
}

/// Accept or reject an invitation; either answer removes it from the cache.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn respond(
    invitations: RwSignal<InvitationsState>,
    errors: RwSignal<ErrorsState>,
    id: i64,
    response: InvitationResponse,
) -> Result<serde_json::Value, ApiError> {
    let body = json!({"action": response.as_action()});
    let result: serde_json::Value = http::post_json(&format!("/invitations/{id}/respond/"), &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to respond to invitation", e))?;
    invitations.update(|s| s.remove(id));
    Ok(result)
}
