use crate::domain::a001_certificate::CertificateSummary;
use serde::{Deserialize, Serialize};

/// Raw body of `/verify-certificate`. The service uses the same shape for
/// every HTTP status, so it is decoded before the status code is looked at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyCertificateResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the verify page renders
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    Valid(CertificateSummary),
    Invalid,
    Error(String),
}

impl VerifyCertificateResponse {
    /// Fails only when the service claims `valid` without certificate fields.
    pub fn into_outcome(self) -> Result<VerificationOutcome, String> {
        match self.status.as_str() {
            "valid" => self
                .certificate
                .map(VerificationOutcome::Valid)
                .ok_or_else(|| "valid response without certificate".to_string()),
            "invalid" => Ok(VerificationOutcome::Invalid),
            _ => Ok(VerificationOutcome::Error(self.message.unwrap_or_default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(body: &str) -> Result<VerificationOutcome, String> {
        serde_json::from_str::<VerifyCertificateResponse>(body)
            .map_err(|e| e.to_string())?
            .into_outcome()
    }

    #[test]
    fn test_valid() {
        let result =
            outcome(r#"{"status":"valid","certificate":{"name":"A","course":"B","date":"C"}}"#)
                .unwrap();
        assert_eq!(
            result,
            VerificationOutcome::Valid(CertificateSummary {
                name: "A".into(),
                course: "B".into(),
                date: "C".into(),
                cert_type: None,
            })
        );
    }

    #[test]
    fn test_invalid_ignores_extra_fields() {
        assert_eq!(
            outcome(r#"{"status":"invalid","message":"unused"}"#).unwrap(),
            VerificationOutcome::Invalid
        );
    }

    #[test]
    fn test_other_status_carries_message() {
        assert_eq!(
            outcome(r#"{"status":"error","message":"X"}"#).unwrap(),
            VerificationOutcome::Error("X".into())
        );
        assert_eq!(
            outcome(r#"{"status":"error"}"#).unwrap(),
            VerificationOutcome::Error(String::new())
        );
        assert_eq!(
            outcome(r#"{"message":"Certificate ID missing"}"#).unwrap(),
            VerificationOutcome::Error("Certificate ID missing".into())
        );
    }

    #[test]
    fn test_valid_without_certificate_is_rejected() {
        assert!(outcome(r#"{"status":"valid"}"#).is_err());
    }
}
