//! Wire types for the marketplace chat endpoint.
//!
//! Shapes mirror the JSON spoken at `/core/api/chat/`; field names are part
//! of the backend contract and must not drift.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::chat::ChatTurn;

/// Body of a chat POST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// The shopper's message, already trimmed.
    pub message: String,
    /// Product the conversation is about.
    pub product_id: i64,
    /// Specific variation in scope, when the shopper is looking at one.
    /// The endpoint prefers this over `product_id` when both are given.
    pub variation_id: Option<i64>,
    /// Trailing conversation context, oldest first, at most five turns.
    pub chat_history: Vec<ChatTurn>,
}

/// Successful chat response.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    /// Assistant-authored reply text.
    pub response: String,
    /// Product context the backend answered from; informational only.
    #[serde(default)]
    pub context: Option<String>,
}

/// Error body the endpoint may attach to a non-2xx response.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatFailure {
    /// Human-readable reason.
    pub error: String,
}
