//! Session and current-user state.
//!
//! Tokens live in `localStorage` (see [`crate::util::session`]) and are
//! mirrored here so components can react to sign-in/sign-out. `AuthState`
//! seeds itself from storage at startup, which is what lets a session
//! survive a page reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use serde_json::json;

use crate::net::http::{self, ApiError};
use crate::net::types::{ProfileResponse, RegisterResponse, TokenPair, User};
use crate::state::errors::{self, ErrorsState};
use crate::util::session;

/// The credential lifecycle: token pair plus the signed-in user record.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub access: Option<String>,
    pub refresh: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Seed the token fields from persisted storage.
    pub fn load() -> Self {
        Self {
            user: None,
            access: session::read_access(),
            refresh: session::read_refresh(),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    /// Drop the in-memory session.
    ///
    /// Returns whether one existed, so callers navigate to the login page
    /// at most once even when several requests fail at the same time.
    pub fn teardown(&mut self) -> bool {
        let had_session = self.access.is_some() || self.refresh.is_some() || self.user.is_some();
        self.user = None;
        self.access = None;
        self.refresh = None;
        had_session
    }

    fn set_tokens(&mut self, pair: &TokenPair) {
        self.access = Some(pair.access.clone());
        self.refresh = Some(pair.refresh.clone());
    }

    /// Replace the cached user with the profile endpoint's nested shape.
    fn set_profile(&mut self, resp: &ProfileResponse) {
        let mut user = resp.user.clone();
        user.profile = Some(resp.profile.clone());
        self.user = Some(user);
    }
}

/// Exchange credentials for a token pair, persist it, and load the user.
///
/// # Errors
///
/// Returns the server's structured error (for example bad credentials).
pub async fn login(
    auth: RwSignal<AuthState>,
    errors: RwSignal<ErrorsState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let body = json!({"email": email, "password": password});
    let pair: TokenPair = http::post_json("/users/auth/token/", &body)
        .await
        .inspect_err(|e| errors::report(errors, "login failed", e))?;
    session::store_tokens(&pair.access, &pair.refresh);
    auth.update(|a| a.set_tokens(&pair));
    fetch_current_user(auth).await;
    Ok(())
}

/// Create an account; the API signs the new user in directly.
///
/// # Errors
///
/// Returns the server's validation errors (duplicate email, weak password).
pub async fn register(
    auth: RwSignal<AuthState>,
    errors: RwSignal<ErrorsState>,
    payload: &serde_json::Value,
) -> Result<User, ApiError> {
    let resp: RegisterResponse = http::post_json("/users/auth/register/", payload)
        .await
        .inspect_err(|e| errors::report(errors, "registration failed", e))?;
    session::store_tokens(&resp.tokens.access, &resp.tokens.refresh);
    auth.update(|a| {
        a.set_tokens(&resp.tokens);
        a.user = Some(resp.user.clone());
    });
    Ok(resp.user)
}

/// Best-effort server logout, then clear the local session unconditionally.
pub async fn logout(auth: RwSignal<AuthState>) {
    let body = json!({"refresh": auth.get_untracked().refresh});
    if let Err(err) = http::post_unit("/users/auth/logout/", &body).await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    session::clear_tokens();
    auth.update(|a| {
        a.teardown();
    });
}

/// Refresh the signed-in user record. No-op without a token; silent on
/// failure, matching session-probe semantics.
pub async fn fetch_current_user(auth: RwSignal<AuthState>) {
    if auth.get_untracked().access.is_none() {
        return;
    }
    auth.update(|a| a.loading = true);
    match http::get_json::<User>("/users/current/").await {
        Ok(user) => auth.update(|a| {
            a.user = Some(user);
            a.loading = false;
        }),
        Err(err) => {
            leptos::logging::warn!("failed to fetch current user: {err}");
            auth.update(|a| a.loading = false);
        }
    }
}

/// Fetch the user + profile pair and cache it.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn fetch_profile(
    auth: RwSignal<AuthState>,
    errors: RwSignal<ErrorsState>,
) -> Result<ProfileResponse, ApiError> {
    let resp: ProfileResponse = http::get_json("/users/profile/")
        .await
        .inspect_err(|e| errors::report(errors, "failed to fetch profile", e))?;
    auth.update(|a| a.set_profile(&resp));
    Ok(resp)
}

/// Patch profile fields and cache the server's returned representation.
///
/// # Errors
///
/// Propagates the server error after reporting it to the banner.
pub async fn update_profile(
    auth: RwSignal<AuthState>,
    errors: RwSignal<ErrorsState>,
    patch: &serde_json::Value,
) -> Result<ProfileResponse, ApiError> {
    let resp: ProfileResponse = http::patch_json("/users/profile/", patch)
        .await
        .inspect_err(|e| errors::report(errors, "failed to update profile", e))?;
    auth.update(|a| a.set_profile(&resp));
    Ok(resp)
}

/// Change the account password. No local state changes on success.
///
/// # Errors
///
/// Propagates the server's validation errors.
pub async fn change_password(
    errors: RwSignal<ErrorsState>,
    old_password: &str,
    new_password1: &str,
    new_password2: &str,
) -> Result<(), ApiError> {
    let body = json!({
        "old_password": old_password,
        "new_password1": new_password1,
        "new_password2": new_password2,
    });
    http::post_unit("/users/change-password/", &body)
        .await
        .inspect_err(|e| errors::report(errors, "failed to change password", e))
}
