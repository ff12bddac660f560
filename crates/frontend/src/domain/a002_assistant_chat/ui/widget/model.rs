//! Assistant Chat - Model (API functions)

use crate::shared::api_client::{post_json, read_json, ApiError};
use contracts::domain::a002_assistant_chat::CONNECTION_ERROR_REPLY;
use contracts::usecases::u503_ask_assistant::{ChatRequest, ChatResponse};

/// Send one message and decode the reply whatever the HTTP status is
pub async fn ask_assistant(url: &str, message: String) -> Result<ChatResponse, ApiError> {
    let response = post_json(url, &ChatRequest { message }).await?;
    read_json(response).await
}

/// Text of the assistant bubble that replaces the placeholder
pub fn reply_for(result: Result<ChatResponse, ApiError>) -> String {
    match result {
        Ok(response) => response.reply_text(),
        Err(err) => {
            log::error!("Assistant request failed: {}", err);
            CONNECTION_ERROR_REPLY.to_string()
        }
    }
}

/// Enter sends, unless an input method is still composing
pub fn is_send_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_assistant_chat::FALLBACK_REPLY;

    #[test]
    fn test_reply_text_is_used() {
        let response = ChatResponse {
            response: Some("Use the verify page.".into()),
        };
        assert_eq!(reply_for(Ok(response)), "Use the verify page.");
    }

    #[test]
    fn test_missing_reply_falls_back() {
        assert_eq!(reply_for(Ok(ChatResponse { response: None })), FALLBACK_REPLY);
    }

    #[test]
    fn test_failures_become_connection_error() {
        assert_eq!(
            reply_for(Err(ApiError::Transport("TypeError: Failed to fetch".into()))),
            CONNECTION_ERROR_REPLY
        );
        assert_eq!(
            reply_for(Err(ApiError::Decode("expected value at line 1".into()))),
            CONNECTION_ERROR_REPLY
        );
    }

    #[test]
    fn test_enter_sends_unless_composing() {
        assert!(is_send_key("Enter", false));
        assert!(!is_send_key("Enter", true));
        assert!(!is_send_key("a", false));
    }
}
