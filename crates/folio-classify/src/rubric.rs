//! The classification rubric.

use serde::{Deserialize, Serialize};

use crate::archetypes::{builtin_archetypes, find_similar, ReferencePortfolio};
use crate::metrics::PortfolioMetrics;

/// Portfolio risk profile, ordered mild to wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskProfile {
    /// Diversified, low concentration.
    Conservative,
    /// Some tilt, nothing dominating.
    Moderate,
    /// Concentrated bets.
    Aggressive,
    /// Concentration stacked on concentration.
    Speculative,
}

impl RiskProfile {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
            Self::Speculative => "speculative",
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of classifying one set of metrics. Ephemeral - recomputed per
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned risk profile.
    pub profile: RiskProfile,

    /// Confidence in the assignment, 0-100.
    pub confidence: u8,

    /// Up to three similar archetype ids, in catalog order.
    pub similar_to: Vec<String>,

    /// Rubric warnings, in check order.
    pub warnings: Vec<String>,
}

/// Classifies aggregate metrics against the builtin archetype catalog.
#[must_use]
pub fn classify(metrics: &PortfolioMetrics) -> ClassificationResult {
    classify_against(metrics, builtin_archetypes())
}

/// Classifies aggregate metrics against an explicit archetype catalog.
///
/// Deterministic: identical metrics always produce the identical result.
/// Each rubric check accumulates points and may append a warning; the
/// total picks the profile and bounds the confidence per tier.
#[must_use]
pub fn classify_against(
    metrics: &PortfolioMetrics,
    archetypes: &[ReferencePortfolio],
) -> ClassificationResult {
    let mut score: u32 = 0;
    let mut warnings = Vec::new();

    // Single-position concentration
    if metrics.top_holding_weight > 50.0 {
        score += 4;
        warnings.push("extremely concentrated in a single position".to_string());
    } else if metrics.top_holding_weight > 30.0 {
        score += 3;
        warnings.push("high single-stock concentration".to_string());
    } else if metrics.top_holding_weight > 20.0 {
        score += 2;
    } else if metrics.top_holding_weight > 12.0 {
        score += 1;
    }

    // Sector concentration
    if metrics.sector_concentration > 70.0 {
        score += 3;
        warnings.push("heavily concentrated in one sector".to_string());
    } else if metrics.sector_concentration > 50.0 {
        score += 2;
    } else if metrics.sector_concentration > 35.0 {
        score += 1;
    }

    // Breadth
    if metrics.num_holdings < 5 {
        score += 3;
        warnings.push("very few holdings increases idiosyncratic risk".to_string());
    } else if metrics.num_holdings < 8 {
        score += 2;
    } else if metrics.num_holdings < 12 {
        score += 1;
    }

    // Technology tilt
    if metrics.tech_exposure > 60.0 {
        score += 2;
        warnings.push("heavy technology sector exposure".to_string());
    } else if metrics.tech_exposure > 40.0 {
        score += 1;
    }

    let (profile, confidence) = if score >= 8 {
        (RiskProfile::Speculative, (70 + 2 * score).min(95))
    } else if score >= 5 {
        (RiskProfile::Aggressive, (65 + 3 * score).min(90))
    } else if score >= 2 {
        (RiskProfile::Moderate, (60 + 5 * score).min(85))
    } else {
        (RiskProfile::Conservative, (75 + 5 * (3 - score)).min(90))
    };

    ClassificationResult {
        profile,
        confidence: confidence as u8,
        similar_to: find_similar(metrics, archetypes),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rubric_scenario() {
        // sector 75 -> +3, top 18 -> +1, six holdings -> +2, tech 10 -> +0
        let metrics = PortfolioMetrics::new(75.0, 18.0, 6, 10.0);
        let result = classify(&metrics);

        assert_eq!(result.profile, RiskProfile::Aggressive);
        assert_eq!(result.confidence, 83); // min(90, 65 + 3×6)
        assert_eq!(
            result.warnings,
            vec!["heavily concentrated in one sector".to_string()]
        );
    }

    #[test]
    fn test_conservative_floor() {
        // Nothing scores: wide, balanced, low tech.
        let metrics = PortfolioMetrics::new(20.0, 5.0, 25, 15.0);
        let result = classify(&metrics);

        assert_eq!(result.profile, RiskProfile::Conservative);
        assert_eq!(result.confidence, 90); // min(90, 75 + 5×3)
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_conservative_with_one_point() {
        let metrics = PortfolioMetrics::new(20.0, 13.0, 25, 15.0);
        let result = classify(&metrics);

        assert_eq!(result.profile, RiskProfile::Conservative);
        assert_eq!(result.confidence, 85); // 75 + 5×(3-1)
    }

    #[test]
    fn test_speculative_everything_fires() {
        // top 60 -> +4, sector 80 -> +3, 3 holdings -> +3, tech 80 -> +2
        let metrics = PortfolioMetrics::new(80.0, 60.0, 3, 80.0);
        let result = classify(&metrics);

        assert_eq!(result.profile, RiskProfile::Speculative);
        assert_eq!(result.confidence, 94); // min(95, 70 + 2×12)
        assert_eq!(result.warnings.len(), 4);
        assert_eq!(
            result.warnings[0],
            "extremely concentrated in a single position"
        );
    }

    #[test]
    fn test_speculative_confidence_capped() {
        let metrics = PortfolioMetrics::new(80.0, 60.0, 3, 80.0);
        let result = classify(&metrics);
        assert!(result.confidence <= 95);
    }

    #[test]
    fn test_moderate_band() {
        // top 25 -> +2, nothing else
        let metrics = PortfolioMetrics::new(20.0, 25.0, 20, 10.0);
        let result = classify(&metrics);

        assert_eq!(result.profile, RiskProfile::Moderate);
        assert_eq!(result.confidence, 70); // 60 + 5×2
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        // Exactly at each boundary scores the lower band.
        let at_twelve = PortfolioMetrics::new(35.0, 12.0, 12, 40.0);
        let result = classify(&at_twelve);
        assert_eq!(result.profile, RiskProfile::Conservative);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_determinism() {
        let metrics = PortfolioMetrics::new(55.0, 28.0, 9, 45.0);
        let first = classify(&metrics);
        let second = classify(&metrics);

        assert_eq!(first.profile, second.profile);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.similar_to, second.similar_to);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = classify(&PortfolioMetrics::new(75.0, 18.0, 6, 10.0));
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.profile, result.profile);
        assert_eq!(parsed.confidence, result.confidence);
        assert_eq!(parsed.similar_to, result.similar_to);
    }

    #[test]
    fn test_profile_ordering() {
        assert!(RiskProfile::Speculative > RiskProfile::Aggressive);
        assert!(RiskProfile::Aggressive > RiskProfile::Moderate);
        assert!(RiskProfile::Moderate > RiskProfile::Conservative);
    }
}
