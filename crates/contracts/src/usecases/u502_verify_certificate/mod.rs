pub mod request;
pub mod response;

pub use request::VerifyCertificateRequest;
pub use response::{VerificationOutcome, VerifyCertificateResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct VerifyCertificate;

impl UseCaseMetadata for VerifyCertificate {
    fn display_name() -> &'static str {
        "Verify Certificate"
    }

    fn endpoint() -> &'static str {
        "/verify-certificate"
    }
}
