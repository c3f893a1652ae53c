//! Error types for risk registry validation.
//!
//! Scoring itself is total; these errors surface configuration mistakes
//! in a factor registry, which are programmer errors caught when the
//! registry is constructed, never per analysis request.

use thiserror::Error;

/// Result type for registry operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur while validating a risk factor registry.
#[derive(Error, Debug, Clone)]
#[allow(missing_docs)]
pub enum RiskError {
    /// Registry has no factors.
    #[error("Risk factor registry has no factors")]
    EmptyRegistry,

    /// Two factors share an id.
    #[error("Duplicate risk factor id: '{id}'")]
    DuplicateFactorId {
        /// The duplicated id.
        id: String,
    },

    /// Thresholds are not strictly increasing.
    #[error("Factor '{id}' has non-increasing thresholds: {thresholds}")]
    InvalidThresholds {
        /// The offending factor id.
        id: String,
        /// The threshold values, rendered for the message.
        thresholds: String,
    },

    /// Severity calculation does not fit the factor's trigger.
    #[error("Factor '{id}': {reason}")]
    IncoherentFactor {
        /// The offending factor id.
        id: String,
        /// Why the factor is incoherent.
        reason: String,
    },
}

impl RiskError {
    /// Create a duplicate factor id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateFactorId { id: id.into() }
    }

    /// Create an invalid thresholds error.
    #[must_use]
    pub fn invalid_thresholds(id: impl Into<String>, thresholds: impl ToString) -> Self {
        Self::InvalidThresholds {
            id: id.into(),
            thresholds: thresholds.to_string(),
        }
    }

    /// Create an incoherent factor error.
    #[must_use]
    pub fn incoherent(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IncoherentFactor {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
