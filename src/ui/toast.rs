//! Transient notification toasts.
//!
//! Share actions answer with a corner toast that dismisses itself after a
//! few seconds. The stack holds every toast with its creation time; a
//! renderer prunes expired ones on its tick.

use std::time::{Duration, Instant};

use chrono::Utc;

/// How long a toast stays on screen.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Severity of a toast, mapped onto the page's alert classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    /// Returns the alert CSS class for this level.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "alert-success",
            ToastLevel::Error => "alert-danger",
            ToastLevel::Warning => "alert-warning",
            ToastLevel::Info => "alert-info",
        }
    }
}

/// A single on-screen toast.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique id, used to find the element when dismissing early.
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        let id = format!("toast-{}", Utc::now().timestamp_millis());
        Self {
            id,
            level,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Returns whether the toast has outlived its dismiss window at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= AUTO_DISMISS
    }
}

/// Ordered collection of live toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toasts.push(Toast::new(level, message));
    }

    /// Drops every toast whose dismiss window has passed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    /// Dismisses one toast early, by id.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Returns the toasts currently on screen.
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn level_to_alert_class() {
        assert_eq!(ToastLevel::Success.css_class(), "alert-success");
        assert_eq!(ToastLevel::Error.css_class(), "alert-danger");
        assert_eq!(ToastLevel::Warning.css_class(), "alert-warning");
        assert_eq!(ToastLevel::Info.css_class(), "alert-info");
    }

    #[test]
    fn toasts_expire_after_the_dismiss_window() {
        let mut stack = ToastStack::new();
        stack.push(ToastLevel::Success, "Post shared successfully!");

        let now = Instant::now();
        stack.prune(now);
        assert_eq!(stack.visible().len(), 1);

        stack.prune(now + AUTO_DISMISS + Duration::from_millis(1));
        assert!(stack.visible().is_empty());
    }

    #[test]
    fn prune_keeps_younger_toasts() {
        let mut stack = ToastStack::new();
        stack.push(ToastLevel::Info, "first");
        let cutoff = Instant::now() + AUTO_DISMISS;
        std::thread::sleep(Duration::from_millis(5));
        stack.push(ToastLevel::Info, "second");

        stack.prune(cutoff);
        assert_eq!(stack.visible().len(), 1);
        assert_eq!(stack.visible()[0].message, "second");
    }
}
