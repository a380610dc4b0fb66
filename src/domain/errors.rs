//! Error taxonomy of the shortening core and its storage collaborators.

use std::time::Duration;

use crate::utils::code_encoder::InvalidCode;
use thiserror::Error;

/// Failures reported by [`crate::domain::repositories::CounterStore`] and
/// [`crate::domain::repositories::LinkStore`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("{matches} records match code {code}")]
    Ambiguous { code: String, matches: usize },
    #[error("no record for code {0}")]
    Missing(String),
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the shortening service to its callers.
///
/// `InvalidInput`, `NotFound` and `InvalidCode` are the caller's problem and
/// should not be retried. `SequenceAllocation` and `Persistence` leave no
/// partial state behind (at most a skipped sequence number), so the caller may
/// retry with a fresh request. `AmbiguousRecord` is a data-integrity fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("sequence allocation failed: {0}")]
    SequenceAllocation(String),
    #[error("persistence failed: {0}")]
    Persistence(String),
    #[error("no link found for code {0}")]
    NotFound(String),
    #[error("{matches} links share code {code}")]
    AmbiguousRecord { code: String, matches: usize },
    #[error(transparent)]
    InvalidCode(#[from] InvalidCode),
}

impl ShortenerError {
    /// Returns true for storage failures a caller may retry with a new request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SequenceAllocation(_) | Self::Persistence(_))
    }
}
