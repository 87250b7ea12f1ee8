//! # Optimistic Delete Module
//!
//! Bookkeeping for delete-with-undo: each optimistically removed expense is
//! parked here with its original position until its countdown either elapses
//! (remote delete committed) or the user undoes it (record restored).
//!
//! ## Lifecycle per record:
//! `Active → PendingDeletion → {Committed | Restored}`. Both outcomes are
//! terminal; `Restored` is equivalent to never having deleted. The countdown
//! timers themselves live host-side, keyed by expense id and driven through
//! `StartDeleteCountdown` / `CancelDeleteCountdown` effects.
//!
//! At most one entry exists per id: deleting an id that is already pending
//! replaces its countdown and original-index bookkeeping, so a record can
//! never accumulate two remote-delete intents.

use std::collections::HashMap;
use std::time::Duration;

use shared::Expense;

/// How long an optimistic delete stays undoable.
pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

/// One optimistically removed expense awaiting commit or undo.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    /// The record as it was on screen, for restore
    pub expense: Expense,
    /// Index the record occupied before removal
    pub index: usize,
}

/// Table of pending deletions, keyed by expense id.
#[derive(Debug, Default)]
pub struct PendingDeletes {
    pending: HashMap<String, PendingDelete>,
}

impl PendingDeletes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a removed expense. Returns true when an earlier pending deletion
    /// for the same id was superseded (its countdown must be cancelled).
    pub fn begin(&mut self, expense: Expense, index: usize) -> bool {
        self.pending
            .insert(expense.id.clone(), PendingDelete { expense, index })
            .is_some()
    }

    /// Take an entry out of the table, ending its pending state. Returns
    /// `None` when the id is not pending (already committed or restored).
    pub fn take(&mut self, expense_id: &str) -> Option<PendingDelete> {
        self.pending.remove(expense_id)
    }

    pub fn is_pending(&self, expense_id: &str) -> bool {
        self.pending.contains_key(expense_id)
    }

    /// Drain every pending id for the teardown flush (commit now, drop none).
    pub fn drain_ids(&mut self) -> Vec<String> {
        let mut ids: Vec<String> = self.pending.drain().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount: 12.5,
            description: "coffee".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            notes: None,
            category_id: "cat-1".to_string(),
            category_name: None,
        }
    }

    #[test]
    fn begin_take_round_trip() {
        let mut deletes = PendingDeletes::new();
        assert!(!deletes.begin(expense("a"), 2));
        assert!(deletes.is_pending("a"));

        let pending = deletes.take("a").unwrap();
        assert_eq!(pending.index, 2);
        assert!(deletes.is_empty());
        assert_eq!(deletes.take("a"), None);
    }

    #[test]
    fn second_delete_for_same_id_supersedes_the_first() {
        let mut deletes = PendingDeletes::new();
        assert!(!deletes.begin(expense("a"), 0));
        assert!(deletes.begin(expense("a"), 4));
        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes.take("a").unwrap().index, 4);
    }

    #[test]
    fn drain_empties_the_table() {
        let mut deletes = PendingDeletes::new();
        deletes.begin(expense("a"), 0);
        deletes.begin(expense("b"), 1);
        let ids = deletes.drain_ids();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
        assert!(deletes.is_empty());
    }
}
