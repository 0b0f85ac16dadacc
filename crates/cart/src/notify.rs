//! User-facing notifications.
//!
//! The store never shows anything itself; when it rejects an operation it
//! hands a message to a [`Notifier`] supplied by the host.

#![warn(missing_docs)]

use std::cell::RefCell;

/// Severity of a notification, used by views to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Neutral information.
    Info,
    /// An operation completed.
    Success,
    /// An operation was refused, e.g. a guest adding to the cart.
    Warning,
    /// Something went wrong.
    Error,
}

impl NotificationKind {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the shopper.
    pub message: String,
    /// Severity.
    pub kind: NotificationKind,
}

/// Sink for user-facing messages.
pub trait Notifier {
    /// Surface `message` to the shopper.
    fn notify(&self, message: &str, kind: NotificationKind);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}

/// Emits notifications as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Info | NotificationKind::Success => {
                tracing::info!(kind = kind.as_str(), "{message}");
            }
            NotificationKind::Warning => tracing::warn!(kind = kind.as_str(), "{message}"),
            NotificationKind::Error => tracing::error!(kind = kind.as_str(), "{message}"),
        }
    }
}

/// Collects notifications so the host can display them later.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        self.seen.take()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.seen.borrow_mut().push(Notification {
            message: message.to_owned(),
            kind,
        });
    }
}
