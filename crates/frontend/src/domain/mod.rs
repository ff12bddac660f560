pub mod a001_certificate;
pub mod a002_assistant_chat;
