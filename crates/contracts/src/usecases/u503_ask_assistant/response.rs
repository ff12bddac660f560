use crate::domain::a002_assistant_chat::FALLBACK_REPLY;
use serde::{Deserialize, Serialize};

/// Assistant reply. The service answers `{"error": ...}` on bad input, which
/// decodes here as a reply without `response`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatResponse {
    /// Text for the assistant bubble; empty or missing replies fall back to
    /// [`FALLBACK_REPLY`].
    pub fn reply_text(self) -> String {
        match self.response {
            Some(text) if !text.is_empty() => text,
            _ => FALLBACK_REPLY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: &str) -> String {
        serde_json::from_str::<ChatResponse>(body).unwrap().reply_text()
    }

    #[test]
    fn test_reply_text() {
        assert_eq!(reply(r#"{"response":"Hello"}"#), "Hello");
    }

    #[test]
    fn test_missing_or_empty_response_falls_back() {
        assert_eq!(reply(r#"{}"#), FALLBACK_REPLY);
        assert_eq!(reply(r#"{"response":""}"#), FALLBACK_REPLY);
        assert_eq!(reply(r#"{"response":null}"#), FALLBACK_REPLY);
        assert_eq!(reply(r#"{"error":"No message provided"}"#), FALLBACK_REPLY);
    }
}
