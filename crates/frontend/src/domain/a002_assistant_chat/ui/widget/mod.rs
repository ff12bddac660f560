//! Assistant Chat Widget UI Module (MVVM Standard)
//!
//! Structure:
//! - chat_log.rs: ChatLog, the bubble list and its placeholder rule
//! - model.rs: API call
//! - view_model.rs: ChatWidgetVm with RwSignals
//! - view.rs: Main component ChatWidget

pub mod chat_log;
mod model;
mod view;
mod view_model;

pub use view::ChatWidget;
