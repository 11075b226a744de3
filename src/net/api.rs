//! HTTP client for the marketplace chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ChatApiError::Unavailable`] since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`ChatApiError`] keeps the transport / service / decode distinction for
//! logs. The widget collapses every variant into one fallback notice for the
//! shopper, so the taxonomy never leaks into the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ChatFailure;
use super::types::{ChatReply, ChatRequest};

/// Path the chat widget posts to.
pub const CHAT_ENDPOINT: &str = "/core/api/chat/";

/// Cookie holding the anti-forgery token issued by the backend.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the backend checks the token against.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Why a chat exchange failed. Diagnostic only; shoppers always see the same
/// fallback notice.
#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    /// The request never completed (connection lost, blocked, aborted).
    #[error("chat transport failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    #[error("chat service returned {status}: {reason}")]
    Service { status: u16, reason: String },
    /// A 2xx response carried a body that did not parse as a reply.
    #[error("chat reply did not parse: {0}")]
    Decode(String),
    /// Not running in a browser.
    #[error("chat is only available in the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn service_reason(body_error: Option<String>) -> String {
    body_error.unwrap_or_else(|| "Failed to get response".to_owned())
}

/// Post one chat message plus its trailing context window.
///
/// # Errors
///
/// Returns [`ChatApiError`] when the request cannot be sent, the endpoint
/// answers non-2xx, or the reply body does not parse.
pub async fn send_chat_message(request: &ChatRequest) -> Result<ChatReply, ChatApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .header(CSRF_HEADER, &csrf_token())
            .json(request)
            .map_err(|e| ChatApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body_error = resp.json::<ChatFailure>().await.ok().map(|f| f.error);
            return Err(ChatApiError::Service {
                status: resp.status(),
                reason: service_reason(body_error),
            });
        }
        resp.json::<ChatReply>()
            .await
            .map_err(|e| ChatApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ChatApiError::Unavailable)
    }
}

/// Anti-forgery token from the document cookie, or empty when absent.
#[must_use]
pub fn csrf_token() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let cookie = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default();
        csrf_token_from(&cookie).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Pull the [`CSRF_COOKIE`] value out of a cookie string. Pairs are `;`
/// separated; everything after the first `=` is the value, so tokens
/// containing `=` survive intact.
#[cfg(any(test, feature = "hydrate"))]
fn csrf_token_from(cookie: &str) -> Option<String> {
    cookie.split(';').find_map(|pair| {
        let (name, value) = pair.trim_start().split_once('=')?;
        (name == CSRF_COOKIE).then(|| value.to_owned())
    })
}
