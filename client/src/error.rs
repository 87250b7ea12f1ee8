//! Failure taxonomy for the client core.
//!
//! Nothing here is fatal: every failure path resolves to a consistent,
//! re-enterable state (loading and in-flight flags cleared, no orphaned
//! countdowns).

use thiserror::Error;

use crate::form::FieldError;

/// Classified failure surfaced by the coordinator.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A list or aggregate load failed. The last good page is preserved and
    /// the fetch is retried only on the next explicit user action.
    #[error("failed to load expenses: {0}")]
    TransientFetch(anyhow::Error),

    /// A create/update/delete was rejected by the server. For deletes this
    /// additionally triggers a corrective reload, since local state was
    /// already optimistically changed.
    #[error("mutation rejected by the server: {0}")]
    Mutation(anyhow::Error),

    /// The assistant transport failed. Surfaced inside the conversation as an
    /// assistant-authored turn, not as a global toast.
    #[error("assistant request failed: {0}")]
    Assistant(anyhow::Error),

    /// Form input rejected before any request was issued.
    #[error("invalid form input")]
    Validation(Vec<FieldError>),
}
