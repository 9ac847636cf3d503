//! Transient notifications.
//!
//! A `Notification` describes what to show; `Toasts` keeps the live ones
//! until their duration has elapsed.

use log::*;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Specifying the notification variants.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Specifying which side of the message the icon is drawn on.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPosition {
    Left,
    Right,
}

/// Icon shown next to a notification message.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub position: IconPosition,
}

impl Icon {
    pub fn new(name: impl Into<String>, position: IconPosition) -> Self {
        Icon {
            name: name.into(),
            position,
        }
    }

    /// Return the glyph drawn for the icon name.
    ///
    pub fn glyph(&self) -> &'static str {
        match self.name.as_str() {
            "success" => "\u{2714}", // ✔
            "info" => "\u{2139}",    // ℹ
            "warning" => "\u{26A0}", // ⚠
            "danger" | "error" => "\u{2718}", // ✘
            _ => "\u{2022}",
        }
    }
}

/// A notification to show for a fixed duration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
    pub icon: Icon,
}

/// Anything that can show a notification.
///
pub trait Notify {
    fn show_message(&mut self, notification: Notification);
}

/// A notification with the time it was shown.
///
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    /// Check if the toast has expired at the given instant.
    ///
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.duration
    }
}

/// Queue of live toasts, oldest first.
///
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    /// Return the most recent live toast.
    ///
    pub fn current(&self) -> Option<&Toast> {
        self.items.back()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop toasts whose duration has elapsed.
    ///
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        self.items.retain(|toast| !toast.is_expired_at(now));
    }
}

impl Notify for Toasts {
    fn show_message(&mut self, notification: Notification) {
        info!("{}", notification.message);
        self.items.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }
}
