//! Product chat state model and send lifecycle.
//!
//! DESIGN
//! ======
//! Everything the chat widget renders derives from this model, which keeps
//! the send lifecycle natively testable with no DOM in sight. Two transcript
//! views are kept on purpose: `feed` is what the message panel shows
//! (greeting, user turns, replies, failure notices) while `history` is the
//! context sent to the server (user turns and successful replies only). The
//! greeting and the failure notice are presentation, not conversation, so
//! they never reach the wire.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// Number of trailing turns sent to the server as conversation context.
pub const CONTEXT_WINDOW: usize = 5;

/// Assistant message seeded into a fresh widget.
pub const GREETING: &str = "Hello! How can I help you with this product today?";

/// Assistant message rendered when a send fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// One chat turn. Field names match the `chat_history` entries the chat
/// endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// `true` for shopper-authored turns, `false` for assistant turns.
    pub is_user: bool,
    /// Plain message text. Markdown rendering happens at display time.
    pub text: String,
}

impl ChatTurn {
    /// A shopper-authored turn.
    #[must_use]
    pub fn user(text: &str) -> Self {
        Self { is_user: true, text: text.to_owned() }
    }

    /// An assistant turn.
    #[must_use]
    pub fn assistant(text: &str) -> Self {
        Self { is_user: false, text: text.to_owned() }
    }
}

/// Chat widget state: panel visibility, unread flag, in-flight marker, and
/// the two transcript views.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Whether the chat panel is open. Starts closed.
    pub open: bool,
    /// Set when a reply lands while the panel is closed; cleared on open.
    pub unread: bool,
    /// A send is in flight. Drives the typing indicator and blocks
    /// overlapping sends.
    pub pending: bool,
    /// Everything the message panel renders, in arrival order.
    pub feed: Vec<ChatTurn>,
    /// Turns that count as conversation context on the wire.
    pub history: Vec<ChatTurn>,
}

impl ChatState {
    /// Fresh state with the greeting already in the feed.
    #[must_use]
    pub fn with_greeting() -> Self {
        Self {
            feed: vec![ChatTurn::assistant(GREETING)],
            ..Self::default()
        }
    }

    /// Flip the panel open or closed. Opening clears the unread flag.
    /// Returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        if self.open {
            self.unread = false;
        }
        self.open
    }

    /// Force the panel closed. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Start a send: trim the draft, record the user turn, and mark the
    /// exchange in flight. Returns the message to put on the wire, or `None`
    /// when the draft is blank or a send is already pending (nothing is
    /// mutated in that case).
    pub fn begin_send(&mut self, draft: &str) -> Option<String> {
        let message = draft.trim();
        if message.is_empty() || self.pending {
            return None;
        }
        let turn = ChatTurn::user(message);
        self.feed.push(turn.clone());
        self.history.push(turn);
        self.pending = true;
        Some(message.to_owned())
    }

    /// Record a successful reply: it joins both the feed and the wire
    /// history, the exchange settles, and the unread flag is raised if the
    /// panel is closed.
    pub fn apply_reply(&mut self, text: &str) {
        let turn = ChatTurn::assistant(text);
        self.feed.push(turn.clone());
        self.history.push(turn);
        self.settle();
    }

    /// Record a failed send: the fallback notice is rendered but does not
    /// become conversation context.
    pub fn apply_failure(&mut self) {
        self.feed.push(ChatTurn::assistant(FALLBACK_REPLY));
        self.settle();
    }

    /// The trailing turns sent as context, oldest first, at most
    /// [`CONTEXT_WINDOW`] of them.
    #[must_use]
    pub fn context_window(&self) -> &[ChatTurn] {
        let start = self.history.len().saturating_sub(CONTEXT_WINDOW);
        &self.history[start..]
    }

    fn settle(&mut self) {
        self.pending = false;
        if !self.open {
            self.unread = true;
        }
    }
}
