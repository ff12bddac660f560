//! Assistant Chat - message log
//!
//! Holds the bubbles shown in the widget. At most one "Typing..." placeholder
//! exists at a time: starting a new round trip drops the previous one.

use chrono::{DateTime, Local};
use contracts::domain::a002_assistant_chat::{ChatRole, TYPING_PLACEHOLDER};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub is_placeholder: bool,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>, is_placeholder: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            is_placeholder,
            sent_at: Local::now(),
        }
    }

    pub fn sender(&self) -> &'static str {
        self.role.sender_label()
    }
}

/// A message accepted for sending: the trimmed text and the id of the
/// placeholder that stands in for its reply
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    pub message: String,
    pub placeholder_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_placeholder).count()
    }

    /// Accepts user input. Whitespace-only input is ignored and leaves the
    /// log untouched; otherwise the user bubble and a fresh placeholder are
    /// appended.
    pub fn submit(&mut self, raw: &str) -> Option<PendingReply> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }

        self.messages
            .push(ChatMessage::new(ChatRole::User, message, false));
        let placeholder_id = self.begin_reply();

        Some(PendingReply {
            message: message.to_string(),
            placeholder_id,
        })
    }

    /// Replaces the placeholder of one round trip with the assistant's text.
    /// If that placeholder was already superseded the reply is still appended.
    pub fn finish_reply(&mut self, placeholder_id: Uuid, text: impl Into<String>) {
        self.messages.retain(|m| m.id != placeholder_id);
        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, text, false));
    }

    fn begin_reply(&mut self) -> Uuid {
        self.messages.retain(|m| !m.is_placeholder);
        let placeholder = ChatMessage::new(ChatRole::Assistant, TYPING_PLACEHOLDER, true);
        let id = placeholder.id;
        self.messages.push(placeholder);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_assistant_chat::CONNECTION_ERROR_REPLY;

    fn texts(log: &ChatLog) -> Vec<(ChatRole, &str, bool)> {
        log.messages()
            .iter()
            .map(|m| (m.role, m.text.as_str(), m.is_placeholder))
            .collect()
    }

    #[test]
    fn test_submit_appends_user_bubble_and_one_placeholder() {
        let mut log = ChatLog::default();
        let pending = log.submit("Hi").unwrap();

        assert_eq!(pending.message, "Hi");
        assert_eq!(
            texts(&log),
            vec![
                (ChatRole::User, "Hi", false),
                (ChatRole::Assistant, "Typing...", true),
            ]
        );
        assert_eq!(log.placeholder_count(), 1);
        assert_eq!(log.messages()[1].id, pending.placeholder_id);
        assert_eq!(log.messages()[0].sender(), "You");
        assert_eq!(log.messages()[1].sender(), "Assistant");
    }

    #[test]
    fn test_reply_replaces_placeholder() {
        let mut log = ChatLog::default();
        let pending = log.submit("Hi").unwrap();
        log.finish_reply(pending.placeholder_id, "Hello");

        assert_eq!(
            texts(&log),
            vec![
                (ChatRole::User, "Hi", false),
                (ChatRole::Assistant, "Hello", false),
            ]
        );
        assert_eq!(log.placeholder_count(), 0);
    }

    #[test]
    fn test_transport_failure_replaces_placeholder_with_connection_error() {
        let mut log = ChatLog::default();
        let pending = log.submit("Hi").unwrap();
        log.finish_reply(pending.placeholder_id, CONNECTION_ERROR_REPLY);

        assert_eq!(
            texts(&log).last().copied(),
            Some((ChatRole::Assistant, "Connection error. Try again.", false))
        );
        assert_eq!(log.placeholder_count(), 0);
    }

    #[test]
    fn test_empty_or_whitespace_input_is_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.submit(""), None);
        assert_eq!(log.submit("   \t\n"), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut log = ChatLog::default();
        let pending = log.submit("  How do I verify?  ").unwrap();
        assert_eq!(pending.message, "How do I verify?");
        assert_eq!(log.messages()[0].text, "How do I verify?");
    }

    #[test]
    fn test_overlapping_round_trips_keep_a_single_placeholder() {
        let mut log = ChatLog::default();
        let first = log.submit("one").unwrap();
        let second = log.submit("two").unwrap();
        assert_eq!(log.placeholder_count(), 1);

        // first reply lands while the second is still pending
        log.finish_reply(first.placeholder_id, "reply one");
        assert_eq!(log.placeholder_count(), 1);

        log.finish_reply(second.placeholder_id, "reply two");
        assert_eq!(log.placeholder_count(), 0);
        assert_eq!(
            texts(&log),
            vec![
                (ChatRole::User, "one", false),
                (ChatRole::User, "two", false),
                (ChatRole::Assistant, "reply one", false),
                (ChatRole::Assistant, "reply two", false),
            ]
        );
    }
}
