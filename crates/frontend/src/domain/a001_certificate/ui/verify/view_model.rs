//! Certificate Verification - View Model

use contracts::usecases::u502_verify_certificate::VerificationOutcome;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CertificateVerifyVm {
    pub cert_id: RwSignal<String>,
    /// Last rendered answer; replaced on every successful round trip
    pub outcome: RwSignal<Option<VerificationOutcome>>,
    pub error: RwSignal<Option<String>>,
}

impl CertificateVerifyVm {
    pub fn new() -> Self {
        Self {
            cert_id: RwSignal::new(String::new()),
            outcome: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }
}

impl Default for CertificateVerifyVm {
    fn default() -> Self {
        Self::new()
    }
}
