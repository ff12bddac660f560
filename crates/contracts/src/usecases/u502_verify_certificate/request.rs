use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyCertificateRequest {
    #[serde(rename = "certId")]
    pub cert_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_cert_id_in_camel_case() {
        let request = VerifyCertificateRequest {
            cert_id: "CERT-1A2B3C4D".into(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"certId":"CERT-1A2B3C4D"}"#
        );
    }
}
