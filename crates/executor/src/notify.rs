//! Notification sinks.
//!
//! Every failed command, and every non-fatal warning, is forwarded to a
//! [`Notifier`] with a distinguishable kind.

use std::sync::Arc;

use parking_lot::Mutex;
use tracegraph_core::ErrorKind;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The command was rejected.
    Error,
    /// The command succeeded with a caveat.
    Warning,
}

/// One message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Severity.
    pub level: Level,
    /// Error category, for errors.
    pub kind: Option<ErrorKind>,
    /// Command that produced the notice.
    pub command: &'static str,
    /// Human-readable text.
    pub message: String,
}

/// Receiver of user-facing notices.
pub trait Notifier: Send {
    /// Deliver a notice.
    fn notify(&mut self, notice: Notice);
}

/// Writes notices to the `tracegraph::notify` tracing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            Level::Error => tracing::warn!(
                target: "tracegraph::notify",
                command = notice.command,
                kind = ?notice.kind,
                "{}",
                notice.message
            ),
            Level::Warning => tracing::info!(
                target: "tracegraph::notify",
                command = notice.command,
                "{}",
                notice.message
            ),
        }
    }
}

/// Keeps every notice in memory; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct CollectingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl CollectingNotifier {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Remove and return everything received so far.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
