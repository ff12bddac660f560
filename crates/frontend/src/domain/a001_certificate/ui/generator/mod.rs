//! Certificate Generator UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: multipart request and API call
//! - preview.rs: PreviewState, the form-to-preview projection
//! - view_model.rs: CertificateGeneratorVm with RwSignals
//! - view.rs: Main component CertificateGenerator

mod model;
pub mod preview;
mod view;
mod view_model;

pub use view::CertificateGenerator;
