//! Shared builders for coordinator tests.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{CategorySummary, Expense, ExpenseListPage};

use super::ExpenseListApp;
use crate::effects::{Effect, FetchToken};
use crate::translate::UntranslatedKeys;

pub(crate) fn app() -> ExpenseListApp {
    let _ = env_logger::builder().is_test(true).try_init();
    ExpenseListApp::new(Arc::new(UntranslatedKeys), false)
}

pub(crate) fn app_with_speech() -> ExpenseListApp {
    let _ = env_logger::builder().is_test(true).try_init();
    ExpenseListApp::new(Arc::new(UntranslatedKeys), true)
}

pub(crate) fn expense(id: &str, amount: f64) -> Expense {
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

pub(crate) fn page(ids: &[&str]) -> ExpenseListPage {
    let items: Vec<Expense> = ids.iter().map(|id| expense(id, 10.0)).collect();
    let total_amount: f64 = items.iter().map(|e| e.amount).sum();
    ExpenseListPage {
        total_count: items.len() as u32,
        page_number: 1,
        page_size: 10,
        total_pages: 1,
        has_previous_page: false,
        has_next_page: false,
        total_amount,
        by_category: vec![CategorySummary {
            category_name: "Groceries".to_string(),
            amount: total_amount,
        }],
        items,
    }
}

/// Token of the single `LoadPage` effect in `effects`.
pub(crate) fn page_token(effects: &[Effect]) -> FetchToken {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::LoadPage { token, .. } => Some(*token),
            _ => None,
        })
        .expect("no LoadPage effect issued")
}

/// An app whose initial load has completed with the given expenses.
pub(crate) fn loaded_app(ids: &[&str]) -> ExpenseListApp {
    let mut app = app();
    let effects = app.start();
    app.apply_page(page_token(&effects), Ok(page(ids)));
    app
}
