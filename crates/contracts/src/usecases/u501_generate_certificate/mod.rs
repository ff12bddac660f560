pub mod request;

pub use request::{
    GenerateCertificateRequest, DOWNLOAD_FILENAME, LOGO_FIELD, SIGNATURE_FIELD,
};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateCertificate;

impl UseCaseMetadata for GenerateCertificate {
    fn display_name() -> &'static str {
        "Generate Certificate"
    }

    fn endpoint() -> &'static str {
        "/generate-certificate"
    }
}
