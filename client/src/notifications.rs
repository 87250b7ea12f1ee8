//! Toast notification values handed to the host's notification sink.
//!
//! All display text travels as translation keys; the presentation layer owns
//! the string tables and resolves keys (including the undo action's
//! `toast.undo` label) before rendering.

use std::time::Duration;

/// How long an ordinary toast stays on screen.
const AUTO_DISMISS: Duration = Duration::from_secs(3);

/// Severity of a toast, used for styling by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A single fire-and-forget notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Translation key of the message to display
    pub message_key: &'static str,
    pub severity: Severity,
    /// Auto-dismiss duration
    pub duration: Duration,
    /// When set, the host offers an undo action that routes back into
    /// `ExpenseListApp::undo_delete` with this expense id.
    pub undo_expense_id: Option<String>,
}

impl Notification {
    pub fn success(message_key: &'static str) -> Self {
        Self {
            message_key,
            severity: Severity::Success,
            duration: AUTO_DISMISS,
            undo_expense_id: None,
        }
    }

    pub fn error(message_key: &'static str) -> Self {
        Self {
            message_key,
            severity: Severity::Error,
            duration: AUTO_DISMISS,
            undo_expense_id: None,
        }
    }

    /// An undoable toast. Stays visible for the whole undo window so the
    /// action remains reachable until the delete commits.
    pub fn undoable(
        message_key: &'static str,
        expense_id: impl Into<String>,
        window: Duration,
    ) -> Self {
        Self {
            message_key,
            severity: Severity::Success,
            duration: window,
            undo_expense_id: Some(expense_id.into()),
        }
    }
}
