//! Certificate Verification UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API call
//! - view_model.rs: CertificateVerifyVm with RwSignals
//! - view.rs: Main component CertificateVerify

mod model;
mod view;
mod view_model;

pub use view::CertificateVerify;
