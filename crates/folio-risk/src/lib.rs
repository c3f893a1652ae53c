//! # Folio Risk
//!
//! Rule-based portfolio risk scoring for the folio workspace.
//!
//! A [`RiskFactorRegistry`] holds an ordered set of [`RiskFactor`] rules -
//! static, versioned configuration validated at construction. The engine
//! evaluates them against a [`folio_core::PortfolioSnapshot`] in two phases:
//!
//! 1. **Structural**: single-stock and sector concentration, computed from
//!    snapshot aggregates (positions without sector data never count
//!    toward sector concentration)
//! 2. **Criteria**: every other factor matches positions by ticker, sector,
//!    industry, or display-name keyword
//!
//! Alerts carry a severity tier, a clamped score, the matched tickers, and
//! hedge-search keywords, ranked by severity then exposure.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::prelude::*;
//! use folio_risk::{evaluate, RiskFactorRegistry};
//! use rust_decimal_macros::dec;
//!
//! let snapshot = PortfolioSnapshot::builder()
//!     .add_holding(EnrichedHolding::new("NVDA", dec!(62_000)))
//!     .add_holding(EnrichedHolding::new("JNJ", dec!(38_000)))
//!     .build()
//!     .unwrap();
//!
//! let alerts = evaluate(&snapshot, RiskFactorRegistry::builtin());
//! assert!(!alerts.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod catalog;
pub mod engine;
pub mod error;
pub mod factor;
pub mod registry;

// Re-export error types at crate root
pub use error::{RiskError, RiskResult};

// Re-export main types and the evaluation entry point
pub use engine::{evaluate, RiskAlert};
pub use factor::{
    RiskCategory, RiskFactor, Severity, SeverityCalc, Thresholds, Trigger, TriggerCriteria,
};
pub use registry::RiskFactorRegistry;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_risk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{evaluate, RiskAlert};
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::factor::{
        RiskCategory, RiskFactor, Severity, SeverityCalc, Thresholds, Trigger, TriggerCriteria,
    };
    pub use crate::registry::RiskFactorRegistry;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        assert!(!RiskFactorRegistry::builtin().is_empty());
    }
}
