//! The UI surface the controller drives.
//!
//! In a browser this is the DOM (notes region, two inputs, save button,
//! `alert`/`confirm`, location reload). The terminal driver and the tests
//! provide their own implementations.

use chrono::{DateTime, Utc};

/// Non-blocking status line for failures that get no alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Status {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            at: Utc::now(),
        }
    }
}

pub trait Page {
    /// Replace the whole notes region.
    fn set_notes_html(&mut self, html: String);

    fn title_value(&self) -> String;
    fn content_value(&self) -> String;
    fn set_title_value(&mut self, value: &str);
    fn set_content_value(&mut self, value: &str);

    fn set_save_label(&mut self, label: &str);
    fn focus_title(&mut self);

    /// Blocking user message.
    fn alert(&mut self, message: &str);
    /// Yes/no prompt; `true` means confirmed.
    fn confirm(&mut self, message: &str) -> bool;

    /// Full page reload; the session flow outside the widget takes over.
    fn reload(&mut self);

    /// Show or clear the status indicator.
    fn set_status(&mut self, status: Option<Status>);
}

/// Page kept entirely in memory. Records every alert, prompt and reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    pub notes_html: String,
    pub title: String,
    pub content: String,
    pub save_label: String,
    pub title_focused: bool,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    /// Answer given to every `confirm`.
    pub confirm_answer: bool,
    pub reloads: usize,
    pub status: Option<Status>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate typing into both inputs.
    pub fn type_note(&mut self, title: &str, content: &str) {
        self.title = title.to_string();
        self.content = content.to_string();
    }
}

impl Page for MemoryPage {
    fn set_notes_html(&mut self, html: String) {
        self.notes_html = html;
    }

    fn title_value(&self) -> String {
        self.title.clone()
    }

    fn content_value(&self) -> String {
        self.content.clone()
    }

    fn set_title_value(&mut self, value: &str) {
        self.title = value.to_string();
    }

    fn set_content_value(&mut self, value: &str) {
        self.content = value.to_string();
    }

    fn set_save_label(&mut self, label: &str) {
        self.save_label = label.to_string();
    }

    fn focus_title(&mut self) {
        self.title_focused = true;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answer
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn set_status(&mut self, status: Option<Status>) {
        self.status = status;
    }
}
