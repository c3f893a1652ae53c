//! Validated, versioned collections of risk factors.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{RiskError, RiskResult};
use crate::factor::{RiskFactor, SeverityCalc};

/// An ordered, validated set of risk factors.
///
/// Construction validates every factor, so an engine evaluating a registry
/// never has to re-check configuration invariants per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactorRegistry {
    /// Registry revision, bumped whenever the factor set changes.
    pub version: String,

    factors: Vec<RiskFactor>,
}

impl RiskFactorRegistry {
    /// Creates a registry from an ordered factor list.
    ///
    /// # Errors
    ///
    /// Returns an error when the list is empty, an id repeats, thresholds
    /// are not strictly increasing, or a factor pairs
    /// [`SeverityCalc::Concentration`] with a non-structural trigger (or a
    /// structural trigger with any other calculation).
    pub fn new(version: impl Into<String>, factors: Vec<RiskFactor>) -> RiskResult<Self> {
        if factors.is_empty() {
            return Err(RiskError::EmptyRegistry);
        }

        let mut seen = std::collections::HashSet::new();
        for factor in &factors {
            if !seen.insert(factor.id.as_str()) {
                return Err(RiskError::duplicate_id(&factor.id));
            }

            if !factor.thresholds.is_strictly_increasing() {
                return Err(RiskError::invalid_thresholds(
                    &factor.id,
                    factor.thresholds,
                ));
            }

            let concentration_calc = factor.severity_calc == SeverityCalc::Concentration;
            if factor.is_structural() && !concentration_calc {
                return Err(RiskError::incoherent(
                    &factor.id,
                    "structural triggers require the concentration calculation",
                ));
            }
            if !factor.is_structural() && concentration_calc {
                return Err(RiskError::incoherent(
                    &factor.id,
                    "concentration calculation requires a structural trigger",
                ));
            }
        }

        Ok(Self {
            version: version.into(),
            factors,
        })
    }

    /// Returns the builtin registry.
    ///
    /// Validated on first access; invalid builtin data is a programmer
    /// error and panics here rather than surfacing per request.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: Lazy<RiskFactorRegistry> = Lazy::new(|| {
            RiskFactorRegistry::new("2025.2", catalog::builtin_factors())
                .expect("builtin risk factor registry is valid")
        });
        &BUILTIN
    }

    /// Returns the factors in evaluation order.
    #[must_use]
    pub fn factors(&self) -> &[RiskFactor] {
        &self.factors
    }

    /// Returns the number of factors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns true if the registry has no factors (unreachable through
    /// [`RiskFactorRegistry::new`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Looks up a factor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|factor| factor.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::{RiskCategory, Thresholds, Trigger, TriggerCriteria};

    fn criteria_factor(id: &str, thresholds: Thresholds) -> RiskFactor {
        RiskFactor::new(
            id,
            "Test",
            RiskCategory::Event,
            Trigger::Criteria(TriggerCriteria::new().with_tickers(&["AAPL"])),
            SeverityCalc::ExposurePct,
            thresholds,
        )
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = RiskFactorRegistry::builtin();
        assert!(!registry.is_empty());
        assert!(registry.get("single-stock-concentration").is_some());
        assert!(registry.get("sector-concentration").is_some());
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = RiskFactorRegistry::new("test", vec![]);
        assert!(matches!(result, Err(RiskError::EmptyRegistry)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let t = Thresholds::new(5.0, 10.0, 20.0, 40.0);
        let result = RiskFactorRegistry::new(
            "test",
            vec![criteria_factor("same", t), criteria_factor("same", t)],
        );
        assert!(matches!(result, Err(RiskError::DuplicateFactorId { .. })));
    }

    #[test]
    fn test_non_increasing_thresholds_rejected() {
        let result = RiskFactorRegistry::new(
            "test",
            vec![criteria_factor("bad", Thresholds::new(40.0, 30.0, 20.0, 10.0))],
        );
        assert!(matches!(result, Err(RiskError::InvalidThresholds { .. })));
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let result = RiskFactorRegistry::new(
            "test",
            vec![criteria_factor("bad", Thresholds::new(10.0, 10.0, 20.0, 30.0))],
        );
        assert!(matches!(result, Err(RiskError::InvalidThresholds { .. })));
    }

    #[test]
    fn test_concentration_calc_requires_structural_trigger() {
        let factor = RiskFactor::new(
            "bad",
            "Bad",
            RiskCategory::Concentration,
            Trigger::Criteria(TriggerCriteria::new()),
            SeverityCalc::Concentration,
            Thresholds::new(20.0, 30.0, 40.0, 55.0),
        );
        let result = RiskFactorRegistry::new("test", vec![factor]);
        assert!(matches!(result, Err(RiskError::IncoherentFactor { .. })));
    }

    #[test]
    fn test_structural_trigger_requires_concentration_calc() {
        let factor = RiskFactor::new(
            "bad",
            "Bad",
            RiskCategory::Concentration,
            Trigger::LargestPosition,
            SeverityCalc::ExposurePct,
            Thresholds::new(20.0, 30.0, 40.0, 55.0),
        );
        let result = RiskFactorRegistry::new("test", vec![factor]);
        assert!(matches!(result, Err(RiskError::IncoherentFactor { .. })));
    }

    #[test]
    fn test_lookup() {
        let t = Thresholds::new(5.0, 10.0, 20.0, 40.0);
        let registry =
            RiskFactorRegistry::new("test", vec![criteria_factor("one", t)]).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("one").is_some());
        assert!(registry.get("two").is_none());
    }
}
