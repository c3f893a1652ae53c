//! Risk factor definitions: severities, thresholds, triggers.

use serde::{Deserialize, Serialize};

use folio_core::{Position, Sector};

/// Alert severity tier, ordered Low through Critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Worth a look.
    Low,
    /// Deserves attention.
    Medium,
    /// Material risk.
    High,
    /// Portfolio-defining risk.
    Critical,
}

impl Severity {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Risk pattern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Too much weight in one place.
    Concentration,
    /// Exposure to geopolitical flashpoints.
    Geopolitical,
    /// Regulatory or antitrust overhang.
    Regulatory,
    /// Binary or scheduled event risk.
    Event,
    /// Positions that move together.
    Correlation,
}

impl RiskCategory {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Concentration => "concentration",
            Self::Geopolitical => "geopolitical",
            Self::Regulatory => "regulatory",
            Self::Event => "event",
            Self::Correlation => "correlation",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a factor's severity score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityCalc {
    /// Score is the matched exposure percent.
    ExposurePct,
    /// Score is 100 × matched holdings / total holdings.
    Count,
    /// Score is the structural concentration weight. Only valid on
    /// structural triggers.
    Concentration,
}

/// Severity tier boundaries. Strictly increasing low → critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum score for a low alert (also the emission gate).
    pub low: f64,
    /// Minimum score for a medium alert.
    pub medium: f64,
    /// Minimum score for a high alert.
    pub high: f64,
    /// Minimum score for a critical alert.
    pub critical: f64,
}

impl Thresholds {
    /// Creates threshold boundaries.
    #[must_use]
    pub fn new(low: f64, medium: f64, high: f64, critical: f64) -> Self {
        Self {
            low,
            medium,
            high,
            critical,
        }
    }

    /// Returns true if the boundaries strictly increase.
    #[must_use]
    pub fn is_strictly_increasing(&self) -> bool {
        self.low < self.medium && self.medium < self.high && self.high < self.critical
    }

    /// Returns the highest tier whose boundary the score meets.
    #[must_use]
    pub fn tier_for(&self, score: f64) -> Option<Severity> {
        if score >= self.critical {
            Some(Severity::Critical)
        } else if score >= self.high {
            Some(Severity::High)
        } else if score >= self.medium {
            Some(Severity::Medium)
        } else if score >= self.low {
            Some(Severity::Low)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.low, self.medium, self.high, self.critical
        )
    }
}

/// Criteria for matching positions in the generic trigger phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerCriteria {
    /// Exact ticker matches.
    pub tickers: Vec<String>,
    /// Sector matches.
    pub sectors: Vec<Sector>,
    /// Case-insensitive industry label matches.
    pub industries: Vec<String>,
    /// Case-insensitive substrings matched against the display name.
    pub keywords: Vec<String>,
}

impl TriggerCriteria {
    /// Creates empty criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets ticker matches.
    #[must_use]
    pub fn with_tickers(mut self, tickers: &[&str]) -> Self {
        self.tickers = tickers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Sets sector matches.
    #[must_use]
    pub fn with_sectors(mut self, sectors: &[Sector]) -> Self {
        self.sectors = sectors.to_vec();
        self
    }

    /// Sets industry matches.
    #[must_use]
    pub fn with_industries(mut self, industries: &[&str]) -> Self {
        self.industries = industries.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Sets display-name keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Returns true if the position matches any criterion.
    #[must_use]
    pub fn matches(&self, position: &Position) -> bool {
        if self.tickers.iter().any(|t| *t == position.ticker) {
            return true;
        }
        if self.sectors.contains(&position.sector) {
            return true;
        }
        if let Some(industry) = &position.industry {
            let lower = industry.to_lowercase();
            if self
                .industries
                .iter()
                .any(|i| i.to_lowercase() == lower)
            {
                return true;
            }
        }
        if let Some(name) = &position.name {
            let lower = name.to_lowercase();
            if self
                .keywords
                .iter()
                .any(|k| lower.contains(&k.to_lowercase()))
            {
                return true;
            }
        }
        false
    }
}

/// What makes a factor fire.
///
/// The two structural variants bypass criteria matching entirely and are
/// evaluated in their own phase against snapshot aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Trigger {
    /// Weight of the largest single position.
    LargestPosition,
    /// Weight of the heaviest known sector (Unknown excluded).
    TopSector,
    /// Criteria-based position matching.
    Criteria(TriggerCriteria),
}

impl Trigger {
    /// Returns true for the structural variants.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::LargestPosition | Self::TopSector)
    }
}

/// A named risk rule: what to match, how to score it, where the tiers sit.
///
/// Factors are static, versioned configuration owned by a
/// [`crate::RiskFactorRegistry`]; the engine never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Risk pattern category.
    pub category: RiskCategory,

    /// What makes this factor fire.
    pub trigger: Trigger,

    /// How the severity score is computed.
    pub severity_calc: SeverityCalc,

    /// Severity tier boundaries.
    pub thresholds: Thresholds,

    /// Descriptive text for reporting.
    pub description: String,

    /// Search keywords for the downstream hedge-matching collaborator.
    pub hedge_keywords: Vec<String>,
}

impl RiskFactor {
    /// Creates a new factor.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: RiskCategory,
        trigger: Trigger,
        severity_calc: SeverityCalc,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            trigger,
            severity_calc,
            thresholds,
            description: String::new(),
            hedge_keywords: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the hedge keywords.
    #[must_use]
    pub fn with_hedge_keywords(mut self, keywords: &[&str]) -> Self {
        self.hedge_keywords = keywords.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Returns true if this factor is evaluated in the structural phase.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.trigger.is_structural()
    }
}
