pub mod aggregate;

pub use aggregate::{CertType, CertificateSummary, POSITION_TYPES};
