use super::*;

// ===========================================================================
// Construction and visibility
// ===========================================================================

#[test]
fn with_greeting_seeds_exactly_one_assistant_message() {
    let state = ChatState::with_greeting();
    assert_eq!(state.feed.len(), 1);
    assert!(!state.feed[0].is_user);
    assert_eq!(state.feed[0].text, GREETING);
    assert!(state.history.is_empty());
    assert!(!state.open);
    assert!(!state.unread);
    assert!(!state.pending);
}

#[test]
fn toggle_flips_visibility() {
    let mut state = ChatState::with_greeting();
    assert!(state.toggle());
    assert!(state.open);
    assert!(!state.toggle());
    assert!(!state.open);
}

#[test]
fn opening_clears_unread() {
    let mut state = ChatState::with_greeting();
    state.unread = true;
    state.toggle();
    assert!(state.open);
    assert!(!state.unread);
}

#[test]
fn close_is_idempotent() {
    let mut state = ChatState::with_greeting();
    state.toggle();
    assert!(state.open);
    state.close();
    assert!(!state.open);
    state.close();
    assert!(!state.open);
}

// ===========================================================================
// Sending
// ===========================================================================

#[test]
fn begin_send_trims_and_records_the_user_turn() {
    let mut state = ChatState::with_greeting();
    let sent = state.begin_send("  Is this in stock?  ");
    assert_eq!(sent.as_deref(), Some("Is this in stock?"));
    assert!(state.pending);
    assert_eq!(state.feed.len(), 2);
    assert_eq!(state.feed[1], ChatTurn::user("Is this in stock?"));
    assert_eq!(state.history, vec![ChatTurn::user("Is this in stock?")]);
}

#[test]
fn begin_send_ignores_blank_drafts() {
    let mut state = ChatState::with_greeting();
    assert_eq!(state.begin_send(""), None);
    assert_eq!(state.begin_send("   \t  "), None);
    assert_eq!(state.feed.len(), 1);
    assert!(state.history.is_empty());
    assert!(!state.pending);
}

#[test]
fn begin_send_blocks_while_a_send_is_pending() {
    let mut state = ChatState::with_greeting();
    assert!(state.begin_send("first").is_some());
    assert_eq!(state.begin_send("second"), None);
    assert_eq!(state.feed.len(), 2);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn apply_reply_extends_feed_and_history_in_order() {
    let mut state = ChatState::with_greeting();
    state.begin_send("Is this in stock?");
    state.apply_reply("Yes, 10 units available");
    assert!(!state.pending);
    assert_eq!(
        state.feed[1..],
        [
            ChatTurn::user("Is this in stock?"),
            ChatTurn::assistant("Yes, 10 units available"),
        ]
    );
    assert_eq!(
        state.history,
        vec![
            ChatTurn::user("Is this in stock?"),
            ChatTurn::assistant("Yes, 10 units available"),
        ]
    );
}

#[test]
fn apply_failure_renders_fallback_without_touching_history() {
    let mut state = ChatState::with_greeting();
    state.begin_send("hello");
    state.apply_failure();
    assert!(!state.pending);
    assert_eq!(state.feed.last(), Some(&ChatTurn::assistant(FALLBACK_REPLY)));
    assert_eq!(state.history, vec![ChatTurn::user("hello")]);
}

#[test]
fn send_can_resume_after_a_failure() {
    let mut state = ChatState::with_greeting();
    state.begin_send("hello");
    state.apply_failure();
    assert!(state.begin_send("are you there?").is_some());
    assert!(state.pending);
}

// ===========================================================================
// Unread indicator
// ===========================================================================

#[test]
fn reply_while_closed_sets_unread() {
    let mut state = ChatState::with_greeting();
    state.begin_send("ping");
    state.apply_reply("pong");
    assert!(state.unread);
}

#[test]
fn reply_while_open_does_not_set_unread() {
    let mut state = ChatState::with_greeting();
    state.toggle();
    state.begin_send("ping");
    state.apply_reply("pong");
    assert!(!state.unread);
}

#[test]
fn failure_while_closed_sets_unread() {
    let mut state = ChatState::with_greeting();
    state.begin_send("ping");
    state.apply_failure();
    assert!(state.unread);
}

#[test]
fn unread_clears_when_the_panel_is_opened_again() {
    let mut state = ChatState::with_greeting();
    state.begin_send("ping");
    state.apply_reply("pong");
    assert!(state.unread);
    state.toggle();
    assert!(!state.unread);
}

// ===========================================================================
// Context window
// ===========================================================================

#[test]
fn context_window_returns_short_histories_whole() {
    let mut state = ChatState::with_greeting();
    state.begin_send("one");
    state.apply_reply("two");
    assert_eq!(state.context_window().len(), 2);
}

#[test]
fn context_window_caps_at_five_and_keeps_chronological_order() {
    let mut state = ChatState::with_greeting();
    for i in 0..4 {
        state.begin_send(&format!("q{i}"));
        state.apply_reply(&format!("a{i}"));
    }
    assert_eq!(state.history.len(), 8);
    let texts: Vec<&str> = state
        .context_window()
        .iter()
        .map(|turn| turn.text.as_str())
        .collect();
    assert_eq!(texts, ["a1", "q2", "a2", "q3", "a3"]);
}

#[test]
fn context_window_includes_the_turn_just_sent() {
    let mut state = ChatState::with_greeting();
    for i in 0..3 {
        state.begin_send(&format!("q{i}"));
        state.apply_reply(&format!("a{i}"));
    }
    state.begin_send("fresh");
    assert_eq!(state.context_window().last(), Some(&ChatTurn::user("fresh")));
    assert_eq!(state.context_window().len(), CONTEXT_WINDOW);
}

#[test]
fn greeting_and_fallback_never_reach_the_wire_history() {
    let mut state = ChatState::with_greeting();
    state.begin_send("x");
    state.apply_failure();
    state.begin_send("y");
    state.apply_reply("z");
    let texts: Vec<&str> = state.history.iter().map(|turn| turn.text.as_str()).collect();
    assert_eq!(texts, ["x", "y", "z"]);
    assert!(!state.history.iter().any(|turn| turn.text == GREETING));
    assert!(!state.history.iter().any(|turn| turn.text == FALLBACK_REPLY));
}
