//! # Folio Classify
//!
//! Heuristic portfolio archetype classification for the folio workspace.
//!
//! Scores four aggregate metrics (sector concentration, top holding
//! weight, holding count, tech exposure) against a point rubric, assigns a
//! risk profile with bounded confidence, and looks up similar reference
//! archetypes from a static catalog.
//!
//! Everything is deterministic: no randomness, no trained models, and
//! identical metrics always produce the identical result.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_classify::{classify, PortfolioMetrics, RiskProfile};
//!
//! let metrics = PortfolioMetrics::new(75.0, 18.0, 6, 10.0);
//! let result = classify(&metrics);
//!
//! assert_eq!(result.profile, RiskProfile::Aggressive);
//! assert_eq!(result.confidence, 83);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod archetypes;
pub mod metrics;
pub mod rubric;

// Re-export the classification surface
pub use archetypes::{
    builtin_archetypes, find_similar, ReferenceHolding, ReferencePortfolio, VolatilityTier,
};
pub use metrics::PortfolioMetrics;
pub use rubric::{classify, classify_against, ClassificationResult, RiskProfile};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_classify::prelude::*;
/// ```
pub mod prelude {
    pub use crate::archetypes::{
        builtin_archetypes, find_similar, ReferencePortfolio, VolatilityTier,
    };
    pub use crate::metrics::PortfolioMetrics;
    pub use crate::rubric::{classify, classify_against, ClassificationResult, RiskProfile};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        assert_eq!(builtin_archetypes().len(), 6);
    }
}
