use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single expense record as served by the backend.
///
/// Immutable once fetched; edits go through explicit update/delete requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque server-owned identifier
    pub id: String,
    /// Monetary magnitude, currency-agnostic
    pub amount: f64,
    /// Free-text description of the expense
    pub description: String,
    /// Calendar date of the expense (date-only, no time-of-day)
    pub date: NaiveDate,
    /// Optional free-text notes
    pub notes: Option<String>,
    /// Identifier of the category this expense belongs to
    pub category_id: String,
    /// Display name of the category, when the backend resolved it
    pub category_name: Option<String>,
}

/// An expense category as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Summed spending for one category across the entire filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_name: String,
    pub amount: f64,
}

/// One page of expenses plus aggregate totals over the whole filtered set.
///
/// `total_amount` and `by_category` are independent of pagination: they cover
/// every expense matching the query's date filters, not just this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListPage {
    pub items: Vec<Expense>,
    /// Total number of expenses in the filtered set
    pub total_count: u32,
    /// 1-based page number of this page
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    /// Summed amount across the entire filtered set
    pub total_amount: f64,
    /// Per-category breakdown of `total_amount` (unordered)
    pub by_category: Vec<CategorySummary>,
}

/// Query parameters for listing expenses.
///
/// The date filter is half-open: `from_date` is inclusive, `to_date`
/// exclusive. Both absent means no date filtering (all time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListQuery {
    /// 1-based page number to fetch
    pub page_number: u32,
    pub page_size: u32,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

/// Payload for creating or updating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: String,
    pub notes: Option<String>,
}

/// Monthly spending ceiling. Absent entirely when the user never set one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: f64,
}

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in an assistant conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// What the assistant did with a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatResponseKind {
    /// Plain conversational reply, no data changed
    Message,
    /// The assistant created an expense as a side effect
    ExpenseCreated,
}

/// Assistant reply to a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub kind: ChatResponseKind,
    /// Display text of the assistant's reply
    pub message: String,
    /// Id of the created expense when `kind` is `ExpenseCreated`
    pub expense_id: Option<String>,
}
