use serde::{Deserialize, Serialize};

/// Text of the transient bubble shown while a reply is pending
pub const TYPING_PLACEHOLDER: &str = "Typing...";

/// Shown when the assistant answered without a usable `response`
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error.";

/// Shown when the assistant endpoint could not be reached
pub const CONNECTION_ERROR_REPLY: &str = "Connection error. Try again.";

/// Chat message author
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Label rendered in front of the message text
    pub fn sender_label(&self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        }
    }
}
