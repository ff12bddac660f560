//! Certificate Generator - Preview state
//!
//! One-way projection of the generator form onto the preview pane. Each
//! method handles one form event and leaves the state showing the most
//! recent input.

use contracts::domain::a001_certificate::aggregate::CUSTOM_TITLE_PLACEHOLDER;
use contracts::domain::a001_certificate::CertType;

pub const NAME_PLACEHOLDER: &str = "[Student Name]";
pub const COURSE_PLACEHOLDER: &str = "[Course/Event]";
pub const DATE_PLACEHOLDER: &str = "[Date]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub title: String,
    pub name: String,
    pub details: String,
    pub date: String,
    /// `"{type}: {value}"` or empty
    pub achievement: String,
    pub logo_url: Option<String>,
    pub signature_url: Option<String>,
    pub show_achievement_fields: bool,
    pub show_custom_title: bool,
    position_type: String,
    position_value: String,
}

impl Default for PreviewState {
    fn default() -> Self {
        let cert_type = CertType::default();
        Self {
            title: cert_type.title_label().to_string(),
            name: NAME_PLACEHOLDER.to_string(),
            details: COURSE_PLACEHOLDER.to_string(),
            date: DATE_PLACEHOLDER.to_string(),
            achievement: String::new(),
            logo_url: None,
            signature_url: None,
            show_achievement_fields: cert_type.has_achievement_fields(),
            show_custom_title: cert_type.has_custom_title(),
            position_type: String::new(),
            position_value: String::new(),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl PreviewState {
    /// Unknown values hide both conditional groups and keep the title.
    pub fn select_cert_type(&mut self, value: &str) {
        let cert_type = CertType::from_str(value);
        self.show_achievement_fields = cert_type.is_some_and(|t| t.has_achievement_fields());
        self.show_custom_title = cert_type.is_some_and(|t| t.has_custom_title());
        if let Some(cert_type) = cert_type {
            self.title = cert_type.title_label().to_string();
        }
    }

    pub fn input_name(&mut self, value: &str) {
        self.name = or_placeholder(value, NAME_PLACEHOLDER);
    }

    pub fn input_course(&mut self, value: &str) {
        self.details = or_placeholder(value, COURSE_PLACEHOLDER);
    }

    pub fn input_date(&mut self, value: &str) {
        self.date = or_placeholder(value, DATE_PLACEHOLDER);
    }

    pub fn input_custom_title(&mut self, value: &str) {
        self.title = or_placeholder(value, CUSTOM_TITLE_PLACEHOLDER);
    }

    pub fn select_position_type(&mut self, value: &str) {
        self.position_type = value.to_string();
        self.refresh_achievement();
    }

    pub fn input_position_value(&mut self, value: &str) {
        self.position_value = value.to_string();
        self.refresh_achievement();
    }

    /// Shows the new logo; returns the URL it replaces so the caller can
    /// revoke it.
    pub fn set_logo(&mut self, url: String) -> Option<String> {
        self.logo_url.replace(url)
    }

    /// Shows the new signature; returns the URL it replaces.
    pub fn set_signature(&mut self, url: String) -> Option<String> {
        self.signature_url.replace(url)
    }

    fn refresh_achievement(&mut self) {
        self.achievement = if !self.position_type.is_empty() && !self.position_value.is_empty() {
            format!("{}: {}", self.position_type, self.position_value)
        } else {
            String::new()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PreviewState::default();
        assert_eq!(state.title, "Certificate of Completion");
        assert_eq!(state.name, NAME_PLACEHOLDER);
        assert_eq!(state.details, COURSE_PLACEHOLDER);
        assert_eq!(state.date, DATE_PLACEHOLDER);
        assert_eq!(state.achievement, "");
        assert!(!state.show_achievement_fields);
        assert!(!state.show_custom_title);
        assert!(state.logo_url.is_none());
    }

    #[test]
    fn test_select_cert_type_sets_title_and_groups() {
        let cases = [
            ("Course Completion", "Certificate of Completion", false, false),
            ("Participation", "Certificate of Participation", false, false),
            ("Achievement", "Certificate of Achievement", true, false),
            ("Custom", "[Custom Title]", false, true),
        ];
        for (value, title, achievement, custom) in cases {
            let mut state = PreviewState::default();
            state.select_cert_type(value);
            assert_eq!(state.title, title, "title for {}", value);
            assert_eq!(state.show_achievement_fields, achievement, "{}", value);
            assert_eq!(state.show_custom_title, custom, "{}", value);
        }
    }

    #[test]
    fn test_switching_to_custom_resets_title_placeholder() {
        let mut state = PreviewState::default();
        state.select_cert_type("Custom");
        state.input_custom_title("Hackathon Winner");
        assert_eq!(state.title, "Hackathon Winner");

        state.select_cert_type("Participation");
        state.select_cert_type("Custom");
        assert_eq!(state.title, "[Custom Title]");
    }

    #[test]
    fn test_unknown_cert_type_hides_groups_and_keeps_title() {
        let mut state = PreviewState::default();
        state.select_cert_type("Achievement");
        state.select_cert_type("Diploma");
        assert_eq!(state.title, "Certificate of Achievement");
        assert!(!state.show_achievement_fields);
        assert!(!state.show_custom_title);
    }

    #[test]
    fn test_text_inputs_fall_back_to_placeholders() {
        let mut state = PreviewState::default();
        state.input_name("Ada Lovelace");
        state.input_course("Analytical Engines");
        state.input_date("2024-03-15");
        assert_eq!(state.name, "Ada Lovelace");
        assert_eq!(state.details, "Analytical Engines");
        assert_eq!(state.date, "2024-03-15");

        state.input_name("");
        state.input_course("");
        state.input_date("");
        state.input_custom_title("");
        assert_eq!(state.name, NAME_PLACEHOLDER);
        assert_eq!(state.details, COURSE_PLACEHOLDER);
        assert_eq!(state.date, DATE_PLACEHOLDER);
        assert_eq!(state.title, "[Custom Title]");
    }

    #[test]
    fn test_text_inputs_are_copied_raw() {
        let mut state = PreviewState::default();
        state.input_name("  Ada  ");
        assert_eq!(state.name, "  Ada  ");
    }

    #[test]
    fn test_achievement_line_needs_both_fields() {
        let mut state = PreviewState::default();
        state.select_position_type("Rank");
        assert_eq!(state.achievement, "");

        state.input_position_value("1st");
        assert_eq!(state.achievement, "Rank: 1st");

        state.input_position_value("");
        assert_eq!(state.achievement, "");

        state.input_position_value("2nd");
        assert_eq!(state.achievement, "Rank: 2nd");

        state.select_position_type("");
        assert_eq!(state.achievement, "");
    }

    #[test]
    fn test_image_replacement_returns_previous_url() {
        let mut state = PreviewState::default();
        assert_eq!(state.set_logo("blob:logo-1".into()), None);
        assert_eq!(
            state.set_logo("blob:logo-2".into()),
            Some("blob:logo-1".into())
        );
        assert_eq!(state.logo_url.as_deref(), Some("blob:logo-2"));

        assert_eq!(state.set_signature("blob:sig-1".into()), None);
        assert_eq!(state.signature_url.as_deref(), Some("blob:sig-1"));
    }
}
