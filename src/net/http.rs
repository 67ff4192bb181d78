//! Bearer-token HTTP client for the task board REST API.
//!
//! Every request goes to `api_base()` + path with the persisted access token
//! attached. A 401 response tears the session down: tokens are cleared and
//! the browser navigates to `/login`, at most once across concurrent
//! in-flight requests (the token clear acts as a latch).
//!
//! Real HTTP calls run via `gloo-net` and therefore only exist under the
//! `hydrate` feature; native builds get an `ApiError::unavailable()` stub so
//! stores and pages compile and unit-test without a browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base URL prefix for all API paths.
///
/// Overridable at compile time via `TASKBOARD_API_BASE`; defaults to the
/// same-origin `/api/v1` prefix.
pub fn api_base() -> &'static str {
    option_env!("TASKBOARD_API_BASE").unwrap_or("/api/v1")
}

/// A failed API request.
///
/// `status` is the HTTP status code, or 0 for network and decode failures
/// (and for the native stub). `message` is a best-effort human-readable
/// summary extracted from the server's error body; `payload` carries the
/// structured body for callers that inspect field errors.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub payload: Option<serde_json::Value>,
}

impl ApiError {
    /// The native (non-browser) stub error.
    pub fn unavailable() -> Self {
        Self {
            status: 0,
            message: "not available outside the browser".to_owned(),
            payload: None,
        }
    }

    fn network(message: String) -> Self {
        Self {
            status: 0,
            message,
            payload: None,
        }
    }

    /// Build an error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = payload
            .as_ref()
            .and_then(error_message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self {
            status,
            message,
            payload,
        }
    }
}

/// Extract a human-readable message from a structured error payload.
///
/// Tries the flat keys the API uses (`detail`, `message`, `error`) before
/// falling back to the first field-error entry of a validation response
/// such as `{"title": ["This field is required."]}`.
pub fn error_message(payload: &serde_json::Value) -> Option<String> {
    for key in ["detail", "message", "error"] {
        if let Some(msg) = payload.get(key).and_then(serde_json::Value::as_str) {
            return Some(msg.to_owned());
        }
    }
    let object = payload.as_object()?;
    for (field, value) in object {
        let msg = match value {
            serde_json::Value::Array(items) => items.first().and_then(serde_json::Value::as_str),
            serde_json::Value::String(s) => Some(s.as_str()),
            _ => None,
        };
        if let Some(msg) = msg {
            return Some(format!("{field}: {msg}"));
        }
    }
    None
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[cfg(feature = "hydrate")]
fn builder(method: Method, path: &str) -> gloo_net::http::RequestBuilder {
    let url = format!("{}{path}", api_base());
    let builder = match method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Patch => gloo_net::http::Request::patch(&url),
        Method::Delete => gloo_net::http::Request::delete(&url),
    };
    match crate::util::session::read_access() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Clear the session and navigate to the login page.
///
/// Navigation only fires when tokens were still present, so a burst of 401
/// responses from concurrent requests redirects exactly once.
#[cfg(feature = "hydrate")]
fn handle_unauthorized() {
    if crate::util::session::clear_tokens() {
        leptos::logging::warn!("session expired, redirecting to login");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    let status = resp.status();
    if status == 401 {
        handle_unauthorized();
    }
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn send_empty(method: Method, path: &str) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder(method, path)
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    check(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = builder(method, path)
        .json(body)
        .map_err(|e| ApiError::network(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
    check(resp).await
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::network(e.to_string()))
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Fails on network errors, non-2xx responses, or an undecodable body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        decode(send_empty(Method::Get, path).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}

/// `POST` a JSON body and decode the JSON response.
///
/// # Errors
///
/// Fails on network errors, non-2xx responses, or an undecodable body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        decode(send_json(Method::Post, path, body).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `POST` a JSON body, ignoring the response body.
///
/// # Errors
///
/// Fails on network errors or non-2xx responses.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Post, path, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `PATCH` a JSON body and decode the JSON response.
///
/// # Errors
///
/// Fails on network errors, non-2xx responses, or an undecodable body.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        decode(send_json(Method::Patch, path, body).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::unavailable())
    }
}

/// `DELETE` a resource, ignoring the response body.
///
/// # Errors
///
/// Fails on network errors or non-2xx responses.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_empty(Method::Delete, path).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::unavailable())
    }
}
