//! Error types for snapshot construction.
//!
//! This module defines the error types used throughout the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, SnapshotError>;

/// Errors that can occur while building a portfolio snapshot.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum SnapshotError {
    /// Snapshot has no positions.
    #[error("Snapshot has no positions")]
    EmptySnapshot,

    /// Total portfolio value is not positive.
    #[error("Total portfolio value must be positive, got {total}")]
    NonPositiveTotal {
        /// The offending total value.
        total: String,
    },

    /// A position carries a negative market value.
    #[error("Invalid value for position '{ticker}': {value}")]
    InvalidValue {
        /// The position ticker.
        ticker: String,
        /// The invalid value.
        value: String,
    },

    /// Duplicate ticker in the position list.
    #[error("Duplicate ticker in snapshot: '{ticker}'")]
    DuplicateTicker {
        /// The duplicated ticker.
        ticker: String,
    },
}

impl SnapshotError {
    /// Create a non-positive total error.
    #[must_use]
    pub fn non_positive_total(total: impl ToString) -> Self {
        Self::NonPositiveTotal {
            total: total.to_string(),
        }
    }

    /// Create an invalid value error.
    #[must_use]
    pub fn invalid_value(ticker: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidValue {
            ticker: ticker.into(),
            value: value.to_string(),
        }
    }

    /// Create a duplicate ticker error.
    #[must_use]
    pub fn duplicate_ticker(ticker: impl Into<String>) -> Self {
        Self::DuplicateTicker {
            ticker: ticker.into(),
        }
    }
}
