use serde::{Deserialize, Serialize};

/// Certificate template chosen on the generator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CertType {
    #[default]
    #[serde(rename = "Course Completion")]
    CourseCompletion,
    #[serde(rename = "Participation")]
    Participation,
    #[serde(rename = "Achievement")]
    Achievement,
    #[serde(rename = "Custom")]
    Custom,
}

impl CertType {
    pub fn all() -> [CertType; 4] {
        [
            CertType::CourseCompletion,
            CertType::Participation,
            CertType::Achievement,
            CertType::Custom,
        ]
    }

    /// Value sent as `certType` and used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            CertType::CourseCompletion => "Course Completion",
            CertType::Participation => "Participation",
            CertType::Achievement => "Achievement",
            CertType::Custom => "Custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Course Completion" => Some(CertType::CourseCompletion),
            "Participation" => Some(CertType::Participation),
            "Achievement" => Some(CertType::Achievement),
            "Custom" => Some(CertType::Custom),
            _ => None,
        }
    }

    /// Heading shown in the preview when this type is selected.
    /// `Custom` yields the placeholder until a custom title is typed.
    pub fn title_label(&self) -> &'static str {
        match self {
            CertType::CourseCompletion => "Certificate of Completion",
            CertType::Participation => "Certificate of Participation",
            CertType::Achievement => "Certificate of Achievement",
            CertType::Custom => CUSTOM_TITLE_PLACEHOLDER,
        }
    }

    pub fn has_achievement_fields(&self) -> bool {
        matches!(self, CertType::Achievement)
    }

    pub fn has_custom_title(&self) -> bool {
        matches!(self, CertType::Custom)
    }
}

pub const CUSTOM_TITLE_PLACEHOLDER: &str = "[Custom Title]";

/// Options offered by the position-type selector of achievement certificates
pub const POSITION_TYPES: [&str; 3] = ["Position", "Rank", "Score"];

/// Certificate fields returned by the verification service for a valid id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateSummary {
    pub name: String,
    pub course: String,
    pub date: String,
    #[serde(rename = "certType", default, skip_serializing_if = "Option::is_none")]
    pub cert_type: Option<String>,
}
