use serde::{Deserialize, Serialize};

/// Multipart part name of the optional logo image
pub const LOGO_FIELD: &str = "logo";

/// Multipart part name of the optional signature image
pub const SIGNATURE_FIELD: &str = "signature";

/// Name under which the generated document is saved
pub const DOWNLOAD_FILENAME: &str = "certificate.pdf";

/// Text part of the generation request. Image files travel as separate
/// multipart parts (`logo`, `signature`) and are omitted when not chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCertificateRequest {
    pub name: String,
    pub course: String,
    pub date: String,
    pub cert_type: String,
    pub custom_title: String,
    pub position_type: String,
    pub position_value: String,
}

impl GenerateCertificateRequest {
    /// Text fields as `(part name, value)` in the order the form sends them.
    /// Every field is present, empty values included.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("course", self.course.as_str()),
            ("date", self.date.as_str()),
            ("certType", self.cert_type.as_str()),
            ("customTitle", self.custom_title.as_str()),
            ("positionType", self.position_type.as_str()),
            ("positionValue", self.position_value.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_names_and_order() {
        let request = GenerateCertificateRequest {
            name: "Ada".into(),
            course: "Rust 101".into(),
            date: "2024-03-15".into(),
            cert_type: "Achievement".into(),
            custom_title: String::new(),
            position_type: "Rank".into(),
            position_value: "1".into(),
        };

        let names: Vec<&str> = request.form_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "course",
                "date",
                "certType",
                "customTitle",
                "positionType",
                "positionValue"
            ]
        );
        assert!(request.form_fields().contains(&("certType", "Achievement")));
        assert!(!names.contains(&LOGO_FIELD));
        assert!(!names.contains(&SIGNATURE_FIELD));
    }

    #[test]
    fn test_empty_fields_are_still_sent() {
        let request = GenerateCertificateRequest::default();
        let fields = request.form_fields();
        assert_eq!(fields.len(), 7);
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
    }
}
