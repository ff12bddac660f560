//! Assistant Chat - View Model

use super::chat_log::ChatLog;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatWidgetVm {
    /// Panel visibility; starts hidden
    pub is_open: RwSignal<bool>,
    pub input: RwSignal<String>,
    pub log: RwSignal<ChatLog>,
}

impl ChatWidgetVm {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            input: RwSignal::new(String::new()),
            log: RwSignal::new(ChatLog::default()),
        }
    }

    pub fn toggle(&self) {
        self.is_open.update(|open| *open = !*open);
    }
}

impl Default for ChatWidgetVm {
    fn default() -> Self {
        Self::new()
    }
}
