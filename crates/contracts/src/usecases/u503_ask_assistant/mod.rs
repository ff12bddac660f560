pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::ChatResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct AskAssistant;

impl UseCaseMetadata for AskAssistant {
    fn display_name() -> &'static str {
        "Certificate Assistant"
    }

    fn endpoint() -> &'static str {
        "/chatbot"
    }
}
