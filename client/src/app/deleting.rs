//! # Optimistic Delete Flow
//!
//! Delete-with-undo wiring: the record leaves the screen immediately, the
//! remote delete is deferred behind a countdown, and undo restores the record
//! at its original position as if nothing happened. A failed commit reloads
//! the page to resynchronize with the server rather than patching the one
//! record back in.

use anyhow::Result;
use log::{info, warn};

use super::ExpenseListApp;
use crate::deletion::UNDO_WINDOW;
use crate::effects::Effect;
use crate::error::ClientError;
use crate::notifications::Notification;

impl ExpenseListApp {
    /// Optimistically delete an expense from the current page.
    ///
    /// The record and visible total drop immediately; the remote delete waits
    /// out the undo window. Deleting an id that is already pending supersedes
    /// the earlier countdown instead of stacking a second remote delete.
    pub fn delete_expense(&mut self, expense_id: &str) -> Vec<Effect> {
        let Some((expense, index)) = self.store.remove_expense(expense_id) else {
            info!("🗑️ Ignoring delete for {expense_id}: not on the current page");
            return Vec::new();
        };
        self.swipe.close();
        info!("🗑️ Optimistically removed {expense_id} (index {index})");

        let mut effects = Vec::new();
        if self.deletes.begin(expense, index) {
            effects.push(Effect::CancelDeleteCountdown {
                expense_id: expense_id.to_string(),
            });
        }
        effects.push(Effect::StartDeleteCountdown {
            expense_id: expense_id.to_string(),
            duration: UNDO_WINDOW,
        });
        effects.push(Effect::Notify(Notification::undoable(
            "toast.expenseDeleted",
            expense_id,
            UNDO_WINDOW,
        )));
        effects
    }

    /// Undo a pending deletion: cancel its countdown and restore the record
    /// at its original index (clamped if the page has since shrunk). Valid
    /// only while the deletion is pending.
    pub fn undo_delete(&mut self, expense_id: &str) -> Vec<Effect> {
        let Some(pending) = self.deletes.take(expense_id) else {
            info!("🗑️ Ignoring undo for {expense_id}: nothing pending");
            return Vec::new();
        };
        self.store.restore_expense(pending.expense, pending.index);
        info!("🗑️ Undo restored {expense_id}");
        vec![Effect::CancelDeleteCountdown {
            expense_id: expense_id.to_string(),
        }]
    }

    /// The undo window elapsed without an undo: commit the remote delete.
    /// Exactly one commit per id, however many countdowns were superseded.
    pub fn on_delete_countdown_elapsed(&mut self, expense_id: &str) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        if self.deletes.take(expense_id).is_none() {
            return Vec::new();
        }
        info!("🗑️ Undo window elapsed, committing delete for {expense_id}");
        vec![Effect::CommitDelete {
            expense_id: expense_id.to_string(),
        }]
    }

    /// The remote delete settled. On failure the optimistic removal is not
    /// rolled back record-by-record; a full reload reconciles the page with
    /// the server's authoritative state.
    pub fn on_delete_commit_result(&mut self, expense_id: &str, result: Result<()>) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        match result {
            Ok(()) => Vec::new(),
            Err(error) => {
                warn!("❌ Remote delete for {expense_id} failed, reloading: {error:#}");
                self.last_error = Some(ClientError::Mutation(error));
                let mut effects = vec![Effect::Notify(Notification::error("toast.deleteError"))];
                effects.extend(self.store.reload());
                effects
            }
        }
    }
}
