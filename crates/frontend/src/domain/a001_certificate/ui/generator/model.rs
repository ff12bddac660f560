//! Certificate Generator - Model (API functions)

use crate::shared::api_client::{post_form, read_bytes, ApiError};
use contracts::usecases::u501_generate_certificate::{
    GenerateCertificateRequest, DOWNLOAD_FILENAME, LOGO_FIELD, SIGNATURE_FIELD,
};
use web_sys::{File, FormData};

/// Multipart body: every text field, plus the image parts only when a file
/// was chosen
fn build_form_data(
    request: &GenerateCertificateRequest,
    logo: Option<&File>,
    signature: Option<&File>,
) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;

    for (name, value) in request.form_fields() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    }

    for (name, file) in [(LOGO_FIELD, logo), (SIGNATURE_FIELD, signature)] {
        if let Some(file) = file {
            form_data
                .append_with_blob_and_filename(name, file, &file.name())
                .map_err(|e| ApiError::Request(format!("{e:?}")))?;
        }
    }

    Ok(form_data)
}

/// Ask the service to render the certificate; returns the PDF bytes
pub async fn generate_certificate(
    url: &str,
    request: &GenerateCertificateRequest,
    logo: Option<File>,
    signature: Option<File>,
) -> Result<Vec<u8>, ApiError> {
    let form_data = build_form_data(request, logo.as_ref(), signature.as_ref())?;
    let response = post_form(url, form_data).await?;
    read_bytes(response).await
}

/// What the page does with the service's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFeedback {
    /// Save the PDF under `filename`
    Download { bytes: Vec<u8>, filename: &'static str },
    /// Show a banner; nothing is downloaded
    Error(String),
}

pub fn submit_feedback(result: Result<Vec<u8>, ApiError>) -> SubmitFeedback {
    match result {
        Ok(bytes) => SubmitFeedback::Download {
            bytes,
            filename: DOWNLOAD_FILENAME,
        },
        Err(err @ ApiError::Http { .. }) => {
            log::warn!("Certificate generation rejected: {}", err);
            SubmitFeedback::Error(format!(
                "Error generating certificate: {}",
                err.user_message()
            ))
        }
        Err(err) => {
            log::error!("Certificate generation failed: {}", err);
            SubmitFeedback::Error(err.user_message())
        }
    }
}
