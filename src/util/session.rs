//! Token persistence in `localStorage`.
//!
//! Access and refresh tokens survive page reloads and are read eagerly when
//! the auth state initializes. Requires a browser environment; native builds
//! report no session.

#[cfg(feature = "hydrate")]
const ACCESS_KEY: &str = "taskboard_access";
#[cfg(feature = "hydrate")]
const REFRESH_KEY: &str = "taskboard_refresh";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted access token, if any.
pub fn read_access() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(ACCESS_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted refresh token, if any.
pub fn read_refresh() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(REFRESH_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both tokens after a successful login or registration.
pub fn store_tokens(access: &str, refresh: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(ACCESS_KEY, access);
            let _ = storage.set_item(REFRESH_KEY, refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, refresh);
    }
}

/// Remove both tokens from storage.
///
/// Returns `true` if a token was actually present. The 401 teardown in the
/// HTTP layer uses this as a latch so that concurrent unauthorized responses
/// trigger at most one navigation to the login page.
pub fn clear_tokens() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return false;
        };
        let had_session = matches!(storage.get_item(ACCESS_KEY), Ok(Some(_)))
            || matches!(storage.get_item(REFRESH_KEY), Ok(Some(_)));
        let _ = storage.remove_item(ACCESS_KEY);
        let _ = storage.remove_item(REFRESH_KEY);
        had_session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Whether a persisted access token exists.
pub fn is_authenticated() -> bool {
    read_access().is_some()
}
