//! Single-shot HTTP helpers
//!
//! Every call issues exactly one request; nothing is retried. Failures come
//! back as [`ApiError`] so callers can tell a server that answered with an
//! error apart from a server that never answered.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

/// Shown whenever the backend cannot be reached
pub const SERVER_UNREACHABLE: &str = "Server error. Make sure backend is running.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built (serialization, FormData)
    #[error("failed to build request: {0}")]
    Request(String),
    /// The request never completed
    #[error("failed to send request: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The server answered with a body we could not read
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user. Server-reported errors are shown verbatim;
    /// everything else collapses to [`SERVER_UNREACHABLE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { body, .. } => body.clone(),
            _ => SERVER_UNREACHABLE.to_string(),
        }
    }
}

/// POST a JSON body
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    log::debug!("POST {} (json)", url);
    Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// POST a multipart body
pub async fn post_form(url: &str, form: FormData) -> Result<Response, ApiError> {
    log::debug!("POST {} (multipart)", url);
    Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Decode a JSON body whatever the HTTP status is
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Read a binary body from a 2xx response; otherwise the body text becomes
/// [`ApiError::Http`]
pub async fn read_bytes(response: Response) -> Result<Vec<u8>, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        return Err(ApiError::Http { status, body });
    }

    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let http = ApiError::Http {
            status: 500,
            body: "Error: Template missing".into(),
        };
        assert_eq!(http.user_message(), "Error: Template missing");

        assert_eq!(
            ApiError::Transport("TypeError: Failed to fetch".into()).user_message(),
            SERVER_UNREACHABLE
        );
        assert_eq!(
            ApiError::Decode("expected value".into()).user_message(),
            SERVER_UNREACHABLE
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Http {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }
}
