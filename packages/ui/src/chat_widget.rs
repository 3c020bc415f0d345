//! Floating AI assistant.

use api::ChatReply;
use dioxus::prelude::*;

use crate::client::use_api;
use crate::toast::{toast_error, use_toasts};
use crate::Icon;
use crate::icons::{FaPaperPlane, FaRobot, FaXmark};

const GREETING: &str = "Hello! I'm your AI campaign assistant. Ask me anything about crowdfunding, campaign strategies, or our platform features!";
const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Conversation shown in the widget, plus the backend session it continues.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
    pub session_id: Option<String>,
}

impl ChatLog {
    /// Seed the greeting the first time the widget opens.
    pub fn greet(&mut self) {
        if self.messages.is_empty() {
            self.push(ChatRole::Assistant, GREETING);
        }
    }

    /// Record the user's message. Blank input is ignored and returns `None`;
    /// otherwise returns the trimmed text to send.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.push(ChatRole::User, text);
        Some(text.to_string())
    }

    pub fn apply_reply(&mut self, reply: ChatReply) {
        self.session_id = Some(reply.session_id);
        self.push(ChatRole::Assistant, &reply.response);
    }

    pub fn apply_failure(&mut self) {
        self.push(ChatRole::Assistant, APOLOGY);
    }

    fn push(&mut self, role: ChatRole, content: &str) {
        self.messages.push(ChatMessage {
            role,
            content: content.to_string(),
        });
    }
}

#[component]
pub fn ChatWidget() -> Element {
    let client = use_api();
    let mut toasts = use_toasts();
    let mut open = use_signal(|| false);
    let mut log = use_signal(ChatLog::default);
    let mut input = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let send = move || {
        if sending() {
            return;
        }
        let Some(text) = log.write().push_user(&input()) else {
            return;
        };
        input.set(String::new());
        let client = client.clone();
        spawn(async move {
            sending.set(true);
            let session_id = log().session_id;
            match client.chat(&text, session_id.as_deref()).await {
                Ok(reply) => log.write().apply_reply(reply),
                Err(e) => {
                    tracing::warn!("chat request failed: {}", e);
                    toast_error(&mut toasts, "Failed to get AI response");
                    log.write().apply_failure();
                }
            }
            sending.set(false);
        });
    };
    let mut send_on_click = send.clone();
    let mut send_on_enter = send;

    if !open() {
        return rsx! {
            button {
                class: "chat-launcher",
                title: "AI assistant",
                onclick: move |_| {
                    log.write().greet();
                    open.set(true);
                },
                Icon { icon: FaRobot, width: 22, height: 22 }
            }
        };
    }

    let messages = log().messages;

    rsx! {
        div {
            class: "chat-widget",
            div {
                class: "chat-header",
                span { "AI Campaign Assistant" }
                button {
                    class: "chat-close",
                    onclick: move |_| open.set(false),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            div {
                class: "chat-messages",
                for (i, message) in messages.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: match message.role {
                            ChatRole::User => "chat-message user",
                            ChatRole::Assistant => "chat-message assistant",
                        },
                        "{message.content}"
                    }
                }
                if sending() {
                    div { class: "chat-message assistant typing", "..." }
                }
            }
            div {
                class: "chat-input",
                input {
                    r#type: "text",
                    placeholder: "Ask me anything...",
                    value: input(),
                    disabled: sending(),
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            send_on_enter();
                        }
                    },
                }
                button {
                    disabled: sending() || input().trim().is_empty(),
                    onclick: move |_| send_on_click(),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_only_once() {
        let mut log = ChatLog::default();
        log.greet();
        log.greet();
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].role, ChatRole::Assistant);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.push_user("   "), None);
        assert!(log.messages.is_empty());
        assert_eq!(log.push_user(" hi ").as_deref(), Some("hi"));
    }

    #[test]
    fn test_reply_keeps_session() {
        let mut log = ChatLog::default();
        log.push_user("How do I pick a goal?");
        log.apply_reply(ChatReply {
            response: "Start small.".into(),
            session_id: "chat-7".into(),
        });
        assert_eq!(log.session_id.as_deref(), Some("chat-7"));

        log.push_user("And rewards?");
        log.apply_failure();
        assert_eq!(log.session_id.as_deref(), Some("chat-7"));
        assert_eq!(log.messages.last().unwrap().content, APOLOGY);
        assert_eq!(log.messages.len(), 4);
    }
}
