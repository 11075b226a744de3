use super::*;

// ===========================================================================
// Backend contract constants
// ===========================================================================

#[test]
fn endpoint_and_csrf_names_match_the_backend() {
    assert_eq!(CHAT_ENDPOINT, "/core/api/chat/");
    assert_eq!(CSRF_COOKIE, "csrftoken");
    assert_eq!(CSRF_HEADER, "X-CSRFToken");
}

// ===========================================================================
// Cookie parsing
// ===========================================================================

#[test]
fn csrf_token_from_finds_a_lone_token() {
    assert_eq!(csrf_token_from("csrftoken=abc123"), Some("abc123".to_owned()));
}

#[test]
fn csrf_token_from_searches_between_other_cookies() {
    let cookie = "sessionid=9f2c; csrftoken=tok-1; theme=dark";
    assert_eq!(csrf_token_from(cookie), Some("tok-1".to_owned()));
}

#[test]
fn csrf_token_from_keeps_values_containing_equals() {
    assert_eq!(csrf_token_from("csrftoken=a=b=c"), Some("a=b=c".to_owned()));
}

#[test]
fn csrf_token_from_requires_the_exact_cookie_name() {
    assert_eq!(csrf_token_from("xcsrftoken=no; csrftokenx=no"), None);
}

#[test]
fn csrf_token_from_returns_none_when_missing() {
    assert_eq!(csrf_token_from(""), None);
    assert_eq!(csrf_token_from("sessionid=9f2c"), None);
}

#[test]
fn csrf_token_is_empty_without_a_browser() {
    assert_eq!(csrf_token(), "");
}

// ===========================================================================
// Error taxonomy
// ===========================================================================

#[test]
fn service_reason_prefers_the_body_error() {
    assert_eq!(
        service_reason(Some("Message is required".to_owned())),
        "Message is required"
    );
    assert_eq!(service_reason(None), "Failed to get response");
}

#[test]
fn chat_api_error_display_is_log_friendly() {
    let service = ChatApiError::Service {
        status: 500,
        reason: "An error occurred: model offline".to_owned(),
    };
    assert_eq!(
        service.to_string(),
        "chat service returned 500: An error occurred: model offline"
    );
    let transport = ChatApiError::Transport("connection refused".to_owned());
    assert_eq!(transport.to_string(), "chat transport failed: connection refused");
    assert_eq!(
        ChatApiError::Unavailable.to_string(),
        "chat is only available in the browser"
    );
}
