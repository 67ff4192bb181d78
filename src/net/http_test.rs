use super::*;

// =============================================================
// error_message extraction precedence
// =============================================================

#[test]
fn error_message_prefers_detail_then_message_then_error() {
    let payload = serde_json::json!({"detail": "d", "message": "m", "error": "e"});
    assert_eq!(error_message(&payload).as_deref(), Some("d"));

    let payload = serde_json::json!({"message": "m", "error": "e"});
    assert_eq!(error_message(&payload).as_deref(), Some("m"));

    let payload = serde_json::json!({"error": "e"});
    assert_eq!(error_message(&payload).as_deref(), Some("e"));
}

#[test]
fn error_message_falls_back_to_field_errors() {
    let payload = serde_json::json!({"title": ["This field is required."]});
    assert_eq!(
        error_message(&payload).as_deref(),
        Some("title: This field is required.")
    );
}

#[test]
fn error_message_handles_string_field_errors() {
    let payload = serde_json::json!({"email": "Enter a valid email address."});
    assert_eq!(
        error_message(&payload).as_deref(),
        Some("email: Enter a valid email address.")
    );
}

#[test]
fn error_message_none_for_unusable_payloads() {
    assert!(error_message(&serde_json::json!(42)).is_none());
    assert!(error_message(&serde_json::json!({"count": 3})).is_none());
    assert!(error_message(&serde_json::json!([])).is_none());
}

// =============================================================
// ApiError construction
// =============================================================

#[test]
fn from_response_extracts_message_and_keeps_payload() {
    let err = ApiError::from_response(403, r#"{"detail": "You don't have access."}"#);
    assert_eq!(err.status, 403);
    assert_eq!(err.message, "You don't have access.");
    assert!(err.payload.is_some());
}

#[test]
fn from_response_falls_back_to_status_line() {
    let err = ApiError::from_response(502, "<html>bad gateway</html>");
    assert_eq!(err.status, 502);
    assert_eq!(err.message, "request failed with status 502");
    assert!(err.payload.is_none());
}

#[test]
fn api_error_displays_its_message() {
    let err = ApiError::from_response(400, r#"{"title": ["Too long."]}"#);
    assert_eq!(err.to_string(), "title: Too long.");
}
