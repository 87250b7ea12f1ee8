//! # Data Loading Module
//!
//! Fetch orchestration for the expense list screen: period navigation,
//! pagination, refresh, the budget ceiling, the category list, and form
//! submissions. Every path funnels through the collection store so the
//! latest-fetch-wins ordering holds no matter which user action raced which.

use anyhow::Result;
use log::{info, warn};
use shared::{Budget, Category, Expense, ExpenseListPage};

use super::ExpenseListApp;
use crate::comparison::{self, BudgetStatus};
use crate::effects::{Effect, FetchToken};
use crate::error::ClientError;
use crate::form::{ExpenseDraft, FieldError};
use crate::notifications::Notification;
use crate::period::PeriodWindow;

impl ExpenseListApp {
    // --- period navigation -------------------------------------------------
    //
    // Changing the period invalidates pagination, so every transition
    // refetches at page 1.

    pub fn go_previous_month(&mut self) -> Vec<Effect> {
        self.period.previous();
        self.store.load(1, self.period.current_window())
    }

    pub fn go_next_month(&mut self) -> Vec<Effect> {
        if !self.period.can_go_next() {
            return Vec::new();
        }
        self.period.next();
        self.store.load(1, self.period.current_window())
    }

    pub fn toggle_all_time(&mut self) -> Vec<Effect> {
        self.period.toggle_all_time();
        self.store.load(1, self.period.current_window())
    }

    // --- pagination & refresh ----------------------------------------------

    pub fn next_page(&mut self) -> Vec<Effect> {
        self.store.next_page()
    }

    pub fn previous_page(&mut self) -> Vec<Effect> {
        self.store.previous_page()
    }

    /// Manual refresh of the current page under the unchanged window.
    pub fn refresh(&mut self) -> Vec<Effect> {
        self.store.reload()
    }

    // --- fetch completions -------------------------------------------------

    /// A page fetch settled. Also releases a pinned pull-to-refresh
    /// indicator once the latest request has settled either way.
    pub fn apply_page(&mut self, token: FetchToken, result: Result<ExpenseListPage>) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        let effects = self.store.apply_page(token, result);
        if self.pull.is_refreshing() && !self.store.loading {
            self.pull.finish();
        }
        effects
    }

    /// The preceding month's aggregate fetch settled.
    pub fn apply_comparison_totals(&mut self, token: FetchToken, result: Result<ExpenseListPage>) {
        if self.is_torn_down() {
            return;
        }
        self.store.apply_comparison_totals(token, result);
    }

    // --- budget ------------------------------------------------------------

    pub fn load_budget(&mut self) -> Vec<Effect> {
        let token = self.store.issue_token();
        self.budget_token = Some(token);
        vec![Effect::LoadBudget { token }]
    }

    pub fn on_budget_loaded(&mut self, token: FetchToken, result: Result<Option<Budget>>) {
        if self.is_torn_down() || Some(token) != self.budget_token {
            return;
        }
        self.budget_token = None;
        match result {
            Ok(budget) => self.budget = budget,
            Err(error) => {
                // Keep whatever ceiling we last knew about.
                warn!("❌ Failed to load budget: {error:#}");
                self.last_error = Some(ClientError::TransientFetch(error));
            }
        }
    }

    /// Set the monthly ceiling. The local value updates optimistically;
    /// a non-positive ceiling is a validation failure and never leaves the
    /// client.
    pub fn set_budget(&mut self, amount: f64) -> Result<Vec<Effect>, ClientError> {
        if amount <= 0.0 {
            return Err(ClientError::Validation(vec![FieldError::AmountNotPositive]));
        }
        self.budget = Some(Budget { amount });
        Ok(vec![Effect::SaveBudget { amount }])
    }

    /// Remove the ceiling entirely.
    pub fn clear_budget(&mut self) -> Vec<Effect> {
        self.budget = None;
        vec![Effect::ClearBudget]
    }

    /// A budget save or clear settled. Failure reloads the ceiling so the
    /// optimistic local value resynchronizes with the server's.
    pub fn on_budget_saved(&mut self, result: Result<()>) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        match result {
            Ok(()) => Vec::new(),
            Err(error) => {
                warn!("❌ Failed to save budget: {error:#}");
                self.last_error = Some(ClientError::Mutation(error));
                let mut effects = vec![Effect::Notify(Notification::error("toast.budgetError"))];
                effects.extend(self.load_budget());
                effects
            }
        }
    }

    /// Budget consumption for the active month. The ceiling is monthly, so
    /// all-time shows no budget bar.
    pub fn budget_status(&self) -> Option<BudgetStatus> {
        match self.store.active_window() {
            PeriodWindow::AllTime => None,
            PeriodWindow::Month { .. } => {
                let budget = self.budget?;
                comparison::budget_status(self.store.total_amount, budget.amount)
            }
        }
    }

    // --- categories --------------------------------------------------------

    pub fn load_categories(&mut self) -> Vec<Effect> {
        let token = self.store.issue_token();
        self.categories_token = Some(token);
        vec![Effect::LoadCategories { token }]
    }

    pub fn on_categories_loaded(
        &mut self,
        token: FetchToken,
        result: Result<Vec<Category>>,
    ) -> Vec<Effect> {
        if self.is_torn_down() || Some(token) != self.categories_token {
            return Vec::new();
        }
        self.categories_token = None;
        match result {
            Ok(categories) => {
                info!("📊 Loaded {} categories", categories.len());
                self.categories = categories;
                Vec::new()
            }
            Err(error) => {
                warn!("❌ Failed to load categories: {error:#}");
                self.last_error = Some(ClientError::TransientFetch(error));
                vec![Effect::Notify(Notification::error(
                    "expenseForm.failedCategories",
                ))]
            }
        }
    }

    // --- form submissions --------------------------------------------------

    /// Submit a new expense. Validation failures are returned without any
    /// request being issued.
    pub fn create_expense(&mut self, draft: &ExpenseDraft) -> Result<Vec<Effect>, ClientError> {
        let request = draft.validate().map_err(ClientError::Validation)?;
        Ok(vec![Effect::CreateExpense { request }])
    }

    /// Submit an edit of an existing expense.
    pub fn update_expense(
        &mut self,
        expense_id: &str,
        draft: &ExpenseDraft,
    ) -> Result<Vec<Effect>, ClientError> {
        let request = draft.validate().map_err(ClientError::Validation)?;
        Ok(vec![Effect::UpdateExpense {
            expense_id: expense_id.to_string(),
            request,
        }])
    }

    pub fn on_expense_created(&mut self, result: Result<Expense>) -> Vec<Effect> {
        self.on_expense_saved(result, "toast.expenseCreated")
    }

    pub fn on_expense_updated(&mut self, result: Result<Expense>) -> Vec<Effect> {
        self.on_expense_saved(result, "toast.expenseUpdated")
    }

    fn on_expense_saved(
        &mut self,
        result: Result<Expense>,
        success_key: &'static str,
    ) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        match result {
            Ok(expense) => {
                info!("📊 Saved expense {}", expense.id);
                let mut effects = vec![Effect::Notify(Notification::success(success_key))];
                effects.extend(self.store.reload());
                effects
            }
            Err(error) => {
                warn!("❌ Failed to save expense: {error:#}");
                self.last_error = Some(ClientError::Mutation(error));
                vec![Effect::Notify(Notification::error("expenseForm.failedSave"))]
            }
        }
    }
}
