//! Expense form state and validation.
//!
//! Holds raw string input the way the presentation layer receives it and
//! validates on submit. Validation failures never reach the network layer:
//! only a fully valid draft produces a `CreateExpenseRequest`.

use chrono::NaiveDate;
use shared::CreateExpenseRequest;

/// Longest accepted description.
const MAX_DESCRIPTION_LEN: usize = 256;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    EmptyDescription,
    DescriptionTooLong(usize),
    /// The raw input that failed to parse as an amount
    InvalidAmount(String),
    AmountNotPositive,
    MissingDate,
    /// The raw input that failed to parse as a date
    InvalidDate(String),
    MissingCategory,
}

/// Raw form input for creating or editing an expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    /// Raw amount input, parsed on submit
    pub amount: String,
    /// Raw date input in `YYYY-MM-DD`, parsed on submit
    pub date: String,
    pub category_id: String,
    pub notes: String,
}

impl ExpenseDraft {
    /// Pre-fill the draft from an existing expense for editing.
    pub fn from_expense(expense: &shared::Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category_id: expense.category_id.clone(),
            notes: expense.notes.clone().unwrap_or_default(),
        }
    }

    /// Validate every field, collecting all failures rather than stopping at
    /// the first, and build the request payload.
    pub fn validate(&self) -> Result<CreateExpenseRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(FieldError::EmptyDescription);
        } else if description.len() > MAX_DESCRIPTION_LEN {
            errors.push(FieldError::DescriptionTooLong(description.len()));
        }

        let amount = match self.amount.trim().parse::<f64>() {
            Ok(value) if value > 0.0 => Some(value),
            Ok(_) => {
                errors.push(FieldError::AmountNotPositive);
                None
            }
            Err(_) => {
                errors.push(FieldError::InvalidAmount(self.amount.clone()));
                None
            }
        };

        let date = if self.date.trim().is_empty() {
            errors.push(FieldError::MissingDate);
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::InvalidDate(self.date.clone()));
                    None
                }
            }
        };

        if self.category_id.trim().is_empty() {
            errors.push(FieldError::MissingCategory);
        }

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => {
                let notes = self.notes.trim();
                Ok(CreateExpenseRequest {
                    amount,
                    description: description.to_string(),
                    date,
                    category_id: self.category_id.trim().to_string(),
                    notes: if notes.is_empty() {
                        None
                    } else {
                        Some(notes.to_string())
                    },
                })
            }
            _ => Err(errors),
        }
    }
}
