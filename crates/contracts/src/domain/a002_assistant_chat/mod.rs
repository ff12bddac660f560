pub mod aggregate;

pub use aggregate::{
    ChatRole, CONNECTION_ERROR_REPLY, FALLBACK_REPLY, TYPING_PLACEHOLDER,
};
