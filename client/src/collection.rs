//! # Paged Collection Store Module
//!
//! This module owns the current page of expenses plus the aggregate totals
//! for the active period, and mediates every fetch that touches them.
//!
//! ## Responsibilities:
//! - Issuing list fetches and applying only the most recently issued one
//! - Preserving the last good page when a refresh fails
//! - Chaining the preceding month's aggregate-only fetch for the comparison
//! - Pagination under an unchanged period window
//! - Atomic splice operations for the optimistic delete manager
//!
//! ## Purpose:
//! Three independent actors mutate the in-memory page (reload, optimistic
//! delete, undo-restore). Funnelling every mutation through this store keeps
//! them atomic with respect to each other: an index computed here is always
//! an index into the array that is actually spliced.

use anyhow::Result;
use log::{info, warn};
use shared::{CategorySummary, Expense, ExpenseListPage};

use crate::comparison::{self, CategoryComparison, SpendingComparison};
use crate::effects::{Effect, FetchToken};
use crate::notifications::Notification;
use crate::period::PeriodWindow;

/// Default page size, matching the list screen's layout.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Aggregate totals of the month preceding the active window.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousPeriodTotals {
    pub total_amount: f64,
    pub by_category: Vec<CategorySummary>,
}

/// Owns the current page of expenses and the aggregates derived from it.
#[derive(Debug)]
pub struct ExpenseListStore {
    /// The expenses currently on screen
    pub expenses: Vec<Expense>,

    /// Whether a page fetch is in flight
    pub loading: bool,

    /// 1-based page currently shown (or being fetched)
    pub current_page: u32,

    pub page_size: u32,

    /// Total expenses in the filtered set, kept in sync with optimistic
    /// removals and restores
    pub total_count: u32,

    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,

    /// Summed amount across the entire filtered set (not just this page)
    pub total_amount: f64,

    /// Per-category breakdown of `total_amount`
    pub by_category: Vec<CategorySummary>,

    /// Preceding month's aggregates, when loaded; `None` suppresses the
    /// comparison display
    pub previous_totals: Option<PreviousPeriodTotals>,

    /// Window of the last issued load
    active_window: PeriodWindow,

    /// Source for monotonically increasing fetch tokens
    next_token: u64,

    /// Token of the page fetch whose result is still awaited
    latest_page_token: Option<FetchToken>,

    /// Token of the comparison fetch whose result is still awaited
    latest_comparison_token: Option<FetchToken>,
}

impl ExpenseListStore {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            loading: false,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 0,
            has_previous_page: false,
            has_next_page: false,
            total_amount: 0.0,
            by_category: Vec::new(),
            previous_totals: None,
            active_window: PeriodWindow::AllTime,
            next_token: 0,
            latest_page_token: None,
            latest_comparison_token: None,
        }
    }

    /// Hand out the next fetch token. Shared with the coordinator so every
    /// fetch in the app draws from one monotonic sequence.
    pub(crate) fn issue_token(&mut self) -> FetchToken {
        self.next_token += 1;
        FetchToken(self.next_token)
    }

    pub fn active_window(&self) -> PeriodWindow {
        self.active_window
    }

    /// Issue exactly one fetch for `page` under `window`.
    ///
    /// A newer load supersedes any fetch still in flight, including a pending
    /// comparison fetch; their responses will be discarded on arrival.
    pub fn load(&mut self, page: u32, window: PeriodWindow) -> Vec<Effect> {
        self.loading = true;
        self.current_page = page;
        self.active_window = window;
        self.latest_comparison_token = None;

        let token = self.issue_token();
        self.latest_page_token = Some(token);

        let query = window.query(page, self.page_size);
        info!(
            "📊 Loading expenses page {} for {:?} [{}]",
            page, window, token
        );
        vec![Effect::LoadPage { token, query }]
    }

    /// Reload the current page under the unchanged window.
    pub fn reload(&mut self) -> Vec<Effect> {
        self.load(self.current_page, self.active_window)
    }

    /// Move to the next page. No-op when the server said there is none.
    pub fn next_page(&mut self) -> Vec<Effect> {
        if !self.has_next_page {
            info!("📊 Ignoring next_page(): no next page");
            return Vec::new();
        }
        self.load(self.current_page + 1, self.active_window)
    }

    /// Move to the previous page. No-op when the server said there is none.
    pub fn previous_page(&mut self) -> Vec<Effect> {
        if !self.has_previous_page || self.current_page <= 1 {
            info!("📊 Ignoring previous_page(): no previous page");
            return Vec::new();
        }
        self.load(self.current_page - 1, self.active_window)
    }

    /// Apply a page fetch result.
    ///
    /// Responses for superseded fetches are discarded: only the most recently
    /// issued request may touch the store. On success the whole page and its
    /// aggregates are replaced wholesale and, for a concrete month, the
    /// preceding month's aggregate-only fetch is chained (page size 1 — only
    /// the totals are needed). On failure the previous good page is kept and
    /// a transient error toast is requested.
    pub fn apply_page(&mut self, token: FetchToken, result: Result<ExpenseListPage>) -> Vec<Effect> {
        if Some(token) != self.latest_page_token {
            info!("📊 Discarding stale page response [{}]", token);
            return Vec::new();
        }
        self.latest_page_token = None;
        self.loading = false;

        match result {
            Ok(page) => {
                self.expenses = page.items;
                self.total_count = page.total_count;
                self.current_page = page.page_number;
                self.page_size = page.page_size;
                self.total_pages = page.total_pages;
                self.has_previous_page = page.has_previous_page;
                self.has_next_page = page.has_next_page;
                self.total_amount = page.total_amount;
                self.by_category = page.by_category;
                info!(
                    "📊 Applied page {}/{} ({} items, total {})",
                    self.current_page, self.total_pages, self.expenses.len(), self.total_count
                );

                match self.active_window.previous_month() {
                    Some(previous) => {
                        let token = self.issue_token();
                        self.latest_comparison_token = Some(token);
                        vec![Effect::LoadComparisonTotals {
                            token,
                            query: previous.query(1, 1),
                        }]
                    }
                    None => {
                        self.previous_totals = None;
                        Vec::new()
                    }
                }
            }
            Err(error) => {
                warn!("❌ Failed to load expenses, keeping last good page: {error:#}");
                vec![Effect::Notify(Notification::error("toast.loadError"))]
            }
        }
    }

    /// Apply the preceding month's aggregate fetch result. Failure or
    /// staleness is non-fatal and just suppresses the comparison display.
    pub fn apply_comparison_totals(
        &mut self,
        token: FetchToken,
        result: Result<ExpenseListPage>,
    ) {
        if Some(token) != self.latest_comparison_token {
            info!("📊 Discarding stale comparison response [{}]", token);
            return;
        }
        self.latest_comparison_token = None;

        match result {
            Ok(page) => {
                self.previous_totals = Some(PreviousPeriodTotals {
                    total_amount: page.total_amount,
                    by_category: page.by_category,
                });
            }
            Err(error) => {
                warn!("❌ Comparison totals unavailable, suppressing display: {error:#}");
                self.previous_totals = None;
            }
        }
    }

    /// Splice an expense out of the page and decrement the visible total.
    /// Returns the removed record and its index for the undo bookkeeping.
    pub fn remove_expense(&mut self, expense_id: &str) -> Option<(Expense, usize)> {
        let index = self.expenses.iter().position(|e| e.id == expense_id)?;
        let expense = self.expenses.remove(index);
        self.total_count = self.total_count.saturating_sub(1);
        Some((expense, index))
    }

    /// Splice an expense back in at its original index, clamped to the
    /// current length if the page has since shrunk, and re-increment the
    /// visible total.
    pub fn restore_expense(&mut self, expense: Expense, index: usize) {
        let insert_at = index.min(self.expenses.len());
        self.expenses.insert(insert_at, expense);
        self.total_count += 1;
    }

    /// Period-over-period comparison of the aggregate totals, when the
    /// preceding month's totals are available.
    pub fn comparison(&self) -> Option<SpendingComparison> {
        let previous = self.previous_totals.as_ref()?;
        comparison::compare_totals(self.total_amount, previous.total_amount)
    }

    /// Per-category period-over-period comparisons.
    pub fn category_comparisons(&self) -> Vec<CategoryComparison> {
        match &self.previous_totals {
            Some(previous) => {
                comparison::compare_by_category(&self.by_category, &previous.by_category)
            }
            None => Vec::new(),
        }
    }
}

impl Default for ExpenseListStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    fn expense(id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            description: format!("expense {id}"),
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            notes: None,
            category_id: "cat-1".to_string(),
            category_name: Some("Groceries".to_string()),
        }
    }

    fn page(ids: &[&str], total_count: u32, total_amount: f64) -> ExpenseListPage {
        ExpenseListPage {
            items: ids.iter().map(|id| expense(id, 10.0)).collect(),
            total_count,
            page_number: 1,
            page_size: 10,
            total_pages: total_count.div_ceil(10),
            has_previous_page: false,
            has_next_page: total_count > 10,
            total_amount,
            by_category: vec![CategorySummary {
                category_name: "Groceries".to_string(),
                amount: total_amount,
            }],
        }
    }

    fn june() -> PeriodWindow {
        PeriodWindow::Month {
            year: 2025,
            month: 6,
        }
    }

    fn page_token(effects: &[Effect]) -> FetchToken {
        match effects {
            [Effect::LoadPage { token, .. }] => *token,
            other => panic!("expected a single LoadPage effect, got {other:?}"),
        }
    }

    #[test]
    fn load_issues_exactly_one_fetch() {
        let mut store = ExpenseListStore::new();
        let effects = store.load(1, june());
        assert_eq!(effects.len(), 1);
        assert!(store.loading);
        match &effects[0] {
            Effect::LoadPage { query, .. } => {
                assert_eq!(query.page_number, 1);
                assert_eq!(
                    query.from_date,
                    Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
                );
                assert_eq!(
                    query.to_date,
                    Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
                );
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn stale_response_is_discarded_in_favor_of_the_last_issued() {
        let mut store = ExpenseListStore::new();
        let token_a = page_token(&store.load(1, june()));
        let token_b = page_token(&store.load(
            1,
            PeriodWindow::Month {
                year: 2025,
                month: 5,
            },
        ));

        // B resolves before A.
        store.apply_page(token_b, Ok(page(&["b1", "b2"], 2, 20.0)));
        let effects = store.apply_page(token_a, Ok(page(&["a1"], 1, 10.0)));

        assert!(effects.is_empty());
        let ids: Vec<&str> = store.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
        assert_eq!(store.total_count, 2);
        assert!(!store.loading);
    }

    #[test]
    fn failed_refresh_preserves_last_good_page_and_notifies() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, june()));
        store.apply_page(token, Ok(page(&["a", "b"], 2, 30.0)));

        let token = page_token(&store.reload());
        let effects = store.apply_page(token, Err(anyhow!("503 from the gateway")));

        assert_eq!(store.expenses.len(), 2);
        assert_eq!(store.total_amount, 30.0);
        assert!(!store.loading);
        assert!(matches!(
            &effects[..],
            [Effect::Notify(n)] if n.message_key == "toast.loadError"
        ));
    }

    #[test]
    fn month_load_chains_previous_month_aggregate_fetch() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, june()));
        let effects = store.apply_page(token, Ok(page(&["a"], 1, 150.0)));

        match &effects[..] {
            [Effect::LoadComparisonTotals { query, .. }] => {
                assert_eq!(query.page_size, 1);
                assert_eq!(
                    query.from_date,
                    Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
                );
                assert_eq!(
                    query.to_date,
                    Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
                );
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn all_time_load_does_not_chain_comparison() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, PeriodWindow::AllTime));
        let effects = store.apply_page(token, Ok(page(&["a"], 1, 150.0)));
        assert!(effects.is_empty());
        assert_eq!(store.previous_totals, None);
    }

    #[test]
    fn comparison_failure_suppresses_display_without_notifying() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, june()));
        let effects = store.apply_page(token, Ok(page(&["a"], 1, 150.0)));
        let comparison_token = match &effects[..] {
            [Effect::LoadComparisonTotals { token, .. }] => *token,
            other => panic!("unexpected effects {other:?}"),
        };

        store.apply_comparison_totals(comparison_token, Err(anyhow!("timeout")));
        assert_eq!(store.previous_totals, None);
        assert_eq!(store.comparison(), None);
    }

    #[test]
    fn comparison_is_derived_from_both_snapshots() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, june()));
        let effects = store.apply_page(token, Ok(page(&["a"], 1, 150.0)));
        let comparison_token = match &effects[..] {
            [Effect::LoadComparisonTotals { token, .. }] => *token,
            other => panic!("unexpected effects {other:?}"),
        };

        store.apply_comparison_totals(comparison_token, Ok(page(&[], 0, 100.0)));
        let comparison = store.comparison().unwrap();
        assert_eq!(comparison.percent, 50);
    }

    #[test]
    fn newer_load_supersedes_pending_comparison_fetch() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, june()));
        let effects = store.apply_page(token, Ok(page(&["a"], 1, 150.0)));
        let comparison_token = match &effects[..] {
            [Effect::LoadComparisonTotals { token, .. }] => *token,
            other => panic!("unexpected effects {other:?}"),
        };

        // User navigates away before the aggregate fetch lands.
        store.load(1, PeriodWindow::AllTime);
        store.apply_comparison_totals(comparison_token, Ok(page(&[], 0, 100.0)));
        assert_eq!(store.previous_totals, None);
    }

    #[test]
    fn pagination_is_guarded_by_server_flags() {
        let mut store = ExpenseListStore::new();
        assert!(store.next_page().is_empty());
        assert!(store.previous_page().is_empty());

        let token = page_token(&store.load(1, PeriodWindow::AllTime));
        store.apply_page(token, Ok(page(&["a"], 25, 250.0)));
        assert!(store.has_next_page);

        let effects = store.next_page();
        match &effects[..] {
            [Effect::LoadPage { query, .. }] => assert_eq!(query.page_number, 2),
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn remove_and_restore_round_trip_preserves_order_and_count() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, PeriodWindow::AllTime));
        store.apply_page(token, Ok(page(&["a", "b", "c"], 3, 30.0)));

        let (removed, index) = store.remove_expense("b").unwrap();
        assert_eq!(index, 1);
        assert_eq!(store.total_count, 2);

        store.restore_expense(removed, index);
        let ids: Vec<&str> = store.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(store.total_count, 3);
    }

    #[test]
    fn restore_clamps_index_to_shrunken_page() {
        let mut store = ExpenseListStore::new();
        let token = page_token(&store.load(1, PeriodWindow::AllTime));
        store.apply_page(token, Ok(page(&["a", "b", "c"], 3, 30.0)));

        let (removed, index) = store.remove_expense("c").unwrap();
        assert_eq!(index, 2);
        store.expenses.clear();

        store.restore_expense(removed, index);
        assert_eq!(store.expenses.len(), 1);
        assert_eq!(store.expenses[0].id, "c");
    }
}
