//! Certificate Verification - Model (API functions)

use crate::shared::api_client::{post_json, read_json, ApiError};
use contracts::usecases::u502_verify_certificate::{
    VerificationOutcome, VerifyCertificateRequest, VerifyCertificateResponse,
};

/// Look up a certificate id. The body is decoded for every HTTP status since
/// the service reports lookup errors as `{status, message}` with 4xx/5xx.
pub async fn verify_certificate(url: &str, cert_id: String) -> Result<VerificationOutcome, ApiError> {
    let request = VerifyCertificateRequest { cert_id };
    let response = post_json(url, &request).await?;
    let status = response.status();
    let body: VerifyCertificateResponse = read_json(response).await?;
    log::debug!("verify-certificate answered HTTP {} with status '{}'", status, body.status);
    body.into_outcome().map_err(ApiError::Decode)
}
