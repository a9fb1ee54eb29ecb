//! User-facing notification channel.
//!
//! Notifications are plain values rendered into the page, so the channel can
//! be swapped for a toast, a log line, or a test assertion without touching
//! the handlers that produce them.

/// Outcome category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message shown to the visitor after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// CSS class used by the templates to style the notification box.
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "flash flash-success",
            NotificationKind::Error => "flash flash-error",
        }
    }
}
