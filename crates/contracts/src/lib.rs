//! Wire contracts shared between the certificate frontend and the remote
//! certificate, verification and assistant services.

pub mod domain;
pub mod usecases;
