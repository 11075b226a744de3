//! Floating product chat widget and its send loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each product page owns one widget instance and passes its configuration
//! explicitly; there is no ambient global. All conversation state lives in
//! [`ChatState`] and the markup re-renders from it, so visibility, the
//! typing indicator, and the unread badge are plain derived views.
//!
//! The configured element ids are stamped onto the regions the widget
//! renders. Imperative operations (focus, scroll) go through
//! [`Region`] lookups on those ids and degrade to no-ops when a region is
//! missing, so a host page that restyles or omits chrome cannot crash the
//! widget.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::util::region::Region;

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

/// Element-role → element-id mapping for the widget's UI regions. Hosts
/// override individual keys when their markup deviates from the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatElementIds {
    pub toggle: String,
    pub panel: String,
    pub close: String,
    pub messages: String,
    pub input: String,
    pub send: String,
    pub typing: String,
    pub unread: String,
}

impl Default for ChatElementIds {
    fn default() -> Self {
        Self {
            toggle: "aiChatButton".to_owned(),
            panel: "aiChatContainer".to_owned(),
            close: "aiCloseButton".to_owned(),
            messages: "aiChatMessages".to_owned(),
            input: "aiChatInput".to_owned(),
            send: "aiSendButton".to_owned(),
            typing: "aiTypingIndicator".to_owned(),
            unread: "aiUnreadBadge".to_owned(),
        }
    }
}

/// Everything a page supplies to mount a chat widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatWidgetConfig {
    /// Product the conversation is scoped to.
    pub product_id: i64,
    /// Variation in scope, when the page shows one.
    pub variation_id: Option<i64>,
    /// UI region ids; defaults cover the stock markup.
    pub elements: ChatElementIds,
}

impl ChatWidgetConfig {
    /// Config for a product with the stock element ids.
    #[must_use]
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            variation_id: None,
            elements: ChatElementIds::default(),
        }
    }

    /// Scope the conversation to a specific variation.
    #[must_use]
    pub fn with_variation(mut self, variation_id: i64) -> Self {
        self.variation_id = Some(variation_id);
        self
    }
}

/// Floating product-chat widget: collapsed launcher with an unread badge,
/// expanding to a message panel with input row.
#[component]
pub fn ChatWidget(config: ChatWidgetConfig) -> impl IntoView {
    let chat = RwSignal::new(ChatState::with_greeting());
    let input = RwSignal::new(String::new());

    let product_id = config.product_id;
    let variation_id = config.variation_id;
    let ids = config.elements;

    // Opening focuses the input and snaps the feed to its newest entry.
    {
        let input_id = ids.input.clone();
        let messages_id = ids.messages.clone();
        Effect::new(move || {
            if chat.get().open {
                Region::by_id(&input_id).focus();
                Region::by_id(&messages_id).scroll_to_bottom();
            }
        });
    }

    // Keep the newest message in view as the feed grows or typing toggles.
    {
        let messages_id = ids.messages.clone();
        Effect::new(move || {
            let state = chat.get();
            let _ = state.feed.len();
            let _ = state.pending;
            Region::by_id(&messages_id).scroll_to_bottom();
        });
    }

    let do_send = move || {
        let draft = input.get();
        let Some(message) = chat.try_update(|c| c.begin_send(&draft)).flatten() else {
            return;
        };
        input.set(String::new());

        let request = ChatRequest {
            message,
            product_id,
            variation_id,
            chat_history: chat.with_untracked(|c| c.context_window().to_vec()),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat_message(&request).await {
                Ok(reply) => chat.update(|c| c.apply_reply(&reply.response)),
                Err(err) => {
                    log::error!("chat send failed: {err}");
                    chat.update(ChatState::apply_failure);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_toggle = move |_| {
        chat.update(|c| {
            c.toggle();
        });
    };
    let on_close = move |_| chat.update(ChatState::close);
    let on_send_click = move |_| do_send();
    let on_input_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;

    let toggle_id = ids.toggle.clone();
    let panel_id = ids.panel.clone();
    let close_id = ids.close.clone();
    let messages_id = ids.messages.clone();
    let input_id = ids.input.clone();
    let send_id = ids.send.clone();
    let typing_id = ids.typing.clone();
    let unread_id = ids.unread.clone();

    view! {
        <div class="chat-widget">
            <button
                id=toggle_id
                class="chat-widget__launcher"
                aria-label="Product chat"
                on:click=on_toggle
            >
                "Chat"
                <span
                    id=unread_id
                    class="chat-widget__badge"
                    class:chat-widget__badge--visible=move || chat.get().unread
                ></span>
            </button>

            <div
                id=panel_id
                class="chat-widget__panel"
                class:chat-widget__panel--open=move || chat.get().open
            >
                <div class="chat-widget__header">
                    <span class="chat-widget__title">"Product assistant"</span>
                    <button
                        id=close_id
                        class="chat-widget__close"
                        aria-label="Close chat"
                        on:click=on_close
                    >
                        "×"
                    </button>
                </div>

                <div id=messages_id class="chat-widget__messages">
                    {move || {
                        chat.get()
                            .feed
                            .iter()
                            .map(|turn| {
                                let text = turn.text.clone();
                                let is_user = turn.is_user;
                                view! {
                                    <div
                                        class="chat-widget__message"
                                        class:chat-widget__message--user=is_user
                                    >
                                        {if is_user {
                                            view! { <span>{text}</span> }.into_any()
                                        } else {
                                            let rendered = render_markdown_html(&text);
                                            view! {
                                                <div class="chat-widget__markdown" inner_html=rendered></div>
                                            }
                                                .into_any()
                                        }}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}

                    {move || {
                        let typing_id = typing_id.clone();
                        chat.get().pending.then(|| {
                            view! {
                                <div id=typing_id class="chat-widget__typing">
                                    "Assistant is typing..."
                                </div>
                            }
                        })
                    }}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        id=input_id
                        class="chat-widget__input"
                        type="text"
                        placeholder="Ask about this product..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_input_keydown
                    />
                    <button
                        id=send_id
                        class="chat-widget__send"
                        on:click=on_send_click
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Assistant text is untrusted; drop raw HTML events before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
