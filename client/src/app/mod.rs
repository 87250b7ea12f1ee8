//! # App Coordinator Module
//!
//! This module defines the central state structure for the expense list
//! screen and wires the individual components together.
//!
//! ## Key Types:
//! - `ExpenseListApp` - the single owner of every piece of screen state
//!
//! ## State Management:
//! The struct holds all screen state in one place: the period selector, the
//! paged collection store, pending deletions, both gesture machines, the
//! assistant session, and the budget/category side data. Cross-component
//! behavior (a period change refetching page 1, a chat-created expense
//! reloading the list, teardown flushing pending deletes) lives in the impl
//! blocks spread across this directory:
//! - `data_loading.rs` - fetches, period navigation, budget, categories, form
//! - `deleting.rs` - optimistic delete, undo, countdown commit
//! - `chat.rs` - assistant conversation and voice capture
//! - `touch.rs` - gesture wiring for swipe-reveal and pull-to-refresh
//!
//! All asynchronous work is returned as [`Effect`](crate::effects::Effect)
//! values; the host executes them and reports back through the completion
//! methods. After `teardown()` every completion is ignored, so a late
//! callback can never write into dead screen state.

mod chat;
mod data_loading;
mod deleting;
mod touch;

#[cfg(test)]
pub(crate) mod test_fixtures;

use std::sync::Arc;

use log::info;
use shared::{Budget, Category};

use crate::assistant::ChatSession;
use crate::collection::ExpenseListStore;
use crate::deletion::PendingDeletes;
use crate::effects::{Effect, FetchToken};
use crate::error::ClientError;
use crate::gestures::{PullToRefresh, SwipeState};
use crate::period::PeriodSelector;
use crate::translate::TranslateText;

/// Central state for the expense list screen.
pub struct ExpenseListApp {
    pub period: PeriodSelector,
    pub store: ExpenseListStore,
    pub deletes: PendingDeletes,
    pub swipe: SwipeState,
    pub pull: PullToRefresh,
    pub chat: ChatSession,

    /// Monthly spending ceiling, when the user set one
    pub budget: Option<Budget>,

    /// Categories for the expense form
    pub categories: Vec<Category>,

    /// Most recent classified failure, for hosts that render error state
    pub last_error: Option<ClientError>,

    translator: Arc<dyn TranslateText>,
    budget_token: Option<FetchToken>,
    categories_token: Option<FetchToken>,
    torn_down: bool,
}

impl ExpenseListApp {
    /// Create the screen state. `speech_supported` is the host environment's
    /// speech-recognition capability, checked once here; absence simply
    /// disables the voice affordance.
    pub fn new(translator: Arc<dyn TranslateText>, speech_supported: bool) -> Self {
        info!("🚀 Initializing expense list state engine");
        Self {
            period: PeriodSelector::new(),
            store: ExpenseListStore::new(),
            deletes: PendingDeletes::new(),
            swipe: SwipeState::new(),
            pull: PullToRefresh::new(),
            chat: ChatSession::new(speech_supported),
            budget: None,
            categories: Vec::new(),
            last_error: None,
            translator,
            budget_token: None,
            categories_token: None,
            torn_down: false,
        }
    }

    /// Kick off the initial fetches: page 1 of the current month, the budget
    /// ceiling, and the category list.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = self.store.load(1, self.period.current_window());
        effects.extend(self.load_budget());
        effects.extend(self.load_categories());
        effects
    }

    /// The screen is going away. Every pending delete countdown fires
    /// immediately (commit now, drop none), and every completion arriving
    /// after this point is ignored.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let ids = self.deletes.drain_ids();
        if !ids.is_empty() {
            info!("🗑️ Teardown committing {} pending deletes", ids.len());
        }
        let mut effects = Vec::new();
        for expense_id in ids {
            effects.push(Effect::CancelDeleteCountdown {
                expense_id: expense_id.clone(),
            });
            effects.push(Effect::CommitDelete { expense_id });
        }
        self.torn_down = true;
        effects
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn translator(&self) -> &dyn TranslateText {
        self.translator.as_ref()
    }

    pub(crate) fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
