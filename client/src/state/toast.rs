//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by `App` and rendered by `ToastHost`. Pages push a
//! toast after copy/share/export; the host schedules the auto-dismiss.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// Maximum number of toasts on screen at once.
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Visible toasts, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Show a toast and return its id. The oldest toast is dropped once the
    /// queue is full.
    pub fn push(&mut self, title: &str, description: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.insert(
            0,
            Toast { id: id.clone(), title: title.to_owned(), description: description.to_owned() },
        );
        self.items.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

/// Fixed notification texts.
pub mod messages {
    pub const COPIED: (&str, &str) = ("Brief copied!", "The brief has been copied to your clipboard.");
    pub const SHARED: (&str, &str) = ("Share link created!", "Anyone with the link can view this brief.");
    pub const EXPORTED_TITLE: &str = "Brief exported!";

    pub fn exported_description(filename: &str) -> String {
        format!("Saved as {filename}.")
    }
}
