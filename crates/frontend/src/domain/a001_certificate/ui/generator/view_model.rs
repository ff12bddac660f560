//! Certificate Generator - ViewModel
//!
//! Reactive state of the generator form and its preview pane

use super::preview::PreviewState;
use crate::shared::download::revoke_object_url;
use contracts::domain::a001_certificate::CertType;
use contracts::usecases::u501_generate_certificate::GenerateCertificateRequest;
use leptos::prelude::*;

/// Success banner. Every `show` hands out a ticket and `expire` only clears
/// the banner while that ticket is still the latest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notice {
    text: Option<String>,
    ticket: u64,
}

impl Notice {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.ticket += 1;
        self.text = Some(text.into());
        self.ticket
    }

    pub fn expire(&mut self, ticket: u64) {
        if self.ticket == ticket {
            self.text = None;
        }
    }

    pub fn clear(&mut self) {
        self.text = None;
    }
}

#[derive(Clone, Copy)]
pub struct CertificateGeneratorVm {
    // Form fields
    pub name: RwSignal<String>,
    pub course: RwSignal<String>,
    pub date: RwSignal<String>,
    pub cert_type: RwSignal<String>,
    pub custom_title: RwSignal<String>,
    pub position_type: RwSignal<String>,
    pub position_value: RwSignal<String>,

    pub preview: RwSignal<PreviewState>,

    // Submission state
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Notice>,
    /// Requests still waiting for an answer; informational only
    pub in_flight: RwSignal<u32>,
}

impl CertificateGeneratorVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            course: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            cert_type: RwSignal::new(CertType::default().as_str().to_string()),
            custom_title: RwSignal::new(String::new()),
            position_type: RwSignal::new(String::new()),
            position_value: RwSignal::new(String::new()),
            preview: RwSignal::new(PreviewState::default()),
            error: RwSignal::new(None),
            notice: RwSignal::new(Notice::default()),
            in_flight: RwSignal::new(0),
        }
    }

    pub fn on_cert_type(&self, value: String) {
        self.preview.update(|p| p.select_cert_type(&value));
        self.cert_type.set(value);
    }

    pub fn on_name(&self, value: String) {
        self.preview.update(|p| p.input_name(&value));
        self.name.set(value);
    }

    pub fn on_course(&self, value: String) {
        self.preview.update(|p| p.input_course(&value));
        self.course.set(value);
    }

    pub fn on_date(&self, value: String) {
        self.preview.update(|p| p.input_date(&value));
        self.date.set(value);
    }

    pub fn on_custom_title(&self, value: String) {
        self.preview.update(|p| p.input_custom_title(&value));
        self.custom_title.set(value);
    }

    pub fn on_position_type(&self, value: String) {
        self.preview.update(|p| p.select_position_type(&value));
        self.position_type.set(value);
    }

    pub fn on_position_value(&self, value: String) {
        self.preview.update(|p| p.input_position_value(&value));
        self.position_value.set(value);
    }

    pub fn on_logo(&self, url: String) {
        let previous = self.preview.try_update(|p| p.set_logo(url)).flatten();
        if let Some(previous) = previous {
            revoke_object_url(&previous);
        }
    }

    pub fn on_signature(&self, url: String) {
        let previous = self.preview.try_update(|p| p.set_signature(url)).flatten();
        if let Some(previous) = previous {
            revoke_object_url(&previous);
        }
    }

    /// Text fields of the form as they are right now
    pub fn snapshot(&self) -> GenerateCertificateRequest {
        GenerateCertificateRequest {
            name: self.name.get_untracked(),
            course: self.course.get_untracked(),
            date: self.date.get_untracked(),
            cert_type: self.cert_type.get_untracked(),
            custom_title: self.custom_title.get_untracked(),
            position_type: self.position_type.get_untracked(),
            position_value: self.position_value.get_untracked(),
        }
    }
}

impl Default for CertificateGeneratorVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let mut notice = Notice::default();
        let ticket = notice.show("done");
        assert_eq!(notice.text(), Some("done"));

        notice.expire(ticket);
        assert_eq!(notice.text(), None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let mut notice = Notice::default();
        let first = notice.show("first");
        let second = notice.show("second");

        notice.expire(first);
        assert_eq!(notice.text(), Some("second"));

        notice.expire(second);
        assert_eq!(notice.text(), None);
    }

    #[test]
    fn test_clear_before_timer_fires() {
        let mut notice = Notice::default();
        let ticket = notice.show("done");
        notice.clear();
        assert_eq!(notice.text(), None);

        notice.expire(ticket);
        assert_eq!(notice.text(), None);
    }
}
