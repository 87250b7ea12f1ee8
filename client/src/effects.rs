//! # Effects Module
//!
//! The core never touches a network socket, a timer, or a router directly.
//! Every state-mutating operation instead returns a list of [`Effect`] values
//! describing the asynchronous work the host must start; the host reports
//! outcomes back through the coordinator's completion methods
//! (`apply_page`, `on_delete_countdown_elapsed`, `on_chat_response`, ...).
//!
//! ## Ordering:
//! Fetch-style effects carry a [`FetchToken`]. Tokens are issued from a single
//! monotonically increasing counter, and a completion whose token is no longer
//! the latest issued for its stream is discarded on arrival. This is how rapid
//! period navigation ends up showing the last-issued request's data rather
//! than whichever response happened to arrive last.

use std::time::Duration;

use shared::{ChatMessage, CreateExpenseRequest, ExpenseListQuery};

use crate::notifications::Notification;

/// Monotonically increasing identifier for one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(pub u64);

impl std::fmt::Display for FetchToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Asynchronous work requested from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch one page of expenses (with aggregates) for the active window.
    LoadPage {
        token: FetchToken,
        query: ExpenseListQuery,
    },
    /// Fetch the preceding month's aggregates for the comparison display.
    /// Failure is non-fatal; the comparison is simply suppressed.
    LoadComparisonTotals {
        token: FetchToken,
        query: ExpenseListQuery,
    },
    /// Fetch the user's monthly budget ceiling, if any.
    LoadBudget { token: FetchToken },
    /// Fetch the category list for the expense form.
    LoadCategories { token: FetchToken },
    /// Create a new expense from a validated form submission.
    CreateExpense { request: CreateExpenseRequest },
    /// Update an existing expense from a validated form submission.
    UpdateExpense {
        expense_id: String,
        request: CreateExpenseRequest,
    },
    /// Issue the remote delete for an expense whose undo window elapsed.
    CommitDelete { expense_id: String },
    /// Persist a new budget ceiling.
    SaveBudget { amount: f64 },
    /// Remove the budget ceiling entirely.
    ClearBudget,
    /// Start the undo countdown for an optimistically removed expense.
    /// Supersedes any countdown already running for the same id.
    StartDeleteCountdown {
        expense_id: String,
        duration: Duration,
    },
    /// Cancel a running undo countdown (undo pressed, or superseded).
    CancelDeleteCountdown { expense_id: String },
    /// Dispatch a chat message plus the prior turn history to the assistant.
    SendChatMessage {
        message: String,
        history: Vec<ChatMessage>,
    },
    /// Schedule an automatic clear of the chat log. The generation must be
    /// echoed back through `on_chat_clear_elapsed`; a newer send invalidates
    /// older generations.
    ScheduleChatClear { generation: u64, delay: Duration },
    /// Begin speech recognition for voice input.
    StartVoiceCapture,
    /// Stop an in-progress speech recognition session.
    StopVoiceCapture,
    /// Navigate to the edit screen for an expense.
    NavigateToEdit { expense_id: String },
    /// Show a toast to the user.
    Notify(Notification),
}
