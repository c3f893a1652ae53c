//! Reference archetype portfolios.
//!
//! Hand-authored exemplar portfolios with precomputed aggregates, used as
//! classification anchors. The catalog is read-only and its order is the
//! similarity-lookup order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use folio_core::Sector;

use crate::metrics::PortfolioMetrics;

/// Coarse volatility banding for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityTier {
    /// Sleep-at-night.
    Low,
    /// Market-like.
    Medium,
    /// Noticeably swingy.
    High,
    /// Drawdowns are the norm.
    VeryHigh,
}

impl VolatilityTier {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

impl std::fmt::Display for VolatilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One holding inside a reference portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceHolding {
    /// Ticker symbol.
    pub ticker: String,
    /// Weight as percentage of the archetype (0-100).
    pub weight_pct: f64,
    /// Sector classification.
    pub sector: Sector,
}

impl ReferenceHolding {
    /// Creates a reference holding.
    #[must_use]
    pub fn new(ticker: impl Into<String>, weight_pct: f64, sector: Sector) -> Self {
        Self {
            ticker: ticker.into(),
            weight_pct,
            sector,
        }
    }
}

/// A hand-authored exemplar portfolio with precomputed aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencePortfolio {
    /// Stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Constituent holdings (weights sum to 100).
    pub holdings: Vec<ReferenceHolding>,

    /// Overall risk score, 0 (inert) to 100 (maximally risky).
    pub risk_score: u8,

    /// Precomputed aggregates matching [`PortfolioMetrics`].
    pub metrics: PortfolioMetrics,

    /// Trailing dividend yield percent.
    pub dividend_yield: f64,

    /// Volatility banding.
    pub volatility: VolatilityTier,
}

impl ReferencePortfolio {
    /// Creates an archetype from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        holdings: Vec<ReferenceHolding>,
        risk_score: u8,
        metrics: PortfolioMetrics,
        dividend_yield: f64,
        volatility: VolatilityTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            holdings,
            risk_score,
            metrics,
            dividend_yield,
            volatility,
        }
    }
}

/// Returns the builtin archetype catalog in similarity-lookup order.
#[must_use]
pub fn builtin_archetypes() -> &'static [ReferencePortfolio] {
    static BUILTIN: Lazy<Vec<ReferencePortfolio>> = Lazy::new(|| {
        vec![
            catalog::dividend_income(),
            catalog::balanced_blue_chip(),
            catalog::broad_market_core(),
            catalog::tech_growth(),
            catalog::mega_cap_momentum(),
            catalog::speculative_growth(),
        ]
    });
    &BUILTIN
}

/// Returns archetypes whose aggregates sit close to the given metrics.
///
/// Similar means all of: sector concentration within 15 points, top
/// holding weight within 10 points, holding count within 5. At most
/// three ids come back, in catalog order.
#[must_use]
pub fn find_similar(metrics: &PortfolioMetrics, archetypes: &[ReferencePortfolio]) -> Vec<String> {
    archetypes
        .iter()
        .filter(|archetype| {
            let m = &archetype.metrics;
            (metrics.sector_concentration - m.sector_concentration).abs() < 15.0
                && (metrics.top_holding_weight - m.top_holding_weight).abs() < 10.0
                && metrics.num_holdings.abs_diff(m.num_holdings) < 5
        })
        .take(3)
        .map(|archetype| archetype.id.clone())
        .collect()
}

/// Builtin archetype definitions.
pub mod catalog {
    use super::*;

    /// Mature dividend payers across defensive sectors.
    #[must_use]
    pub fn dividend_income() -> ReferencePortfolio {
        ReferencePortfolio::new(
            "dividend-income",
            "Dividend Income",
            vec![
                ReferenceHolding::new("JNJ", 12.0, Sector::Healthcare),
                ReferenceHolding::new("PG", 11.0, Sector::ConsumerStaples),
                ReferenceHolding::new("KO", 10.0, Sector::ConsumerStaples),
                ReferenceHolding::new("PEP", 10.0, Sector::ConsumerStaples),
                ReferenceHolding::new("VZ", 10.0, Sector::CommunicationServices),
                ReferenceHolding::new("XOM", 10.0, Sector::Energy),
                ReferenceHolding::new("CVX", 10.0, Sector::Energy),
                ReferenceHolding::new("MMM", 9.0, Sector::Industrials),
                ReferenceHolding::new("IBM", 9.0, Sector::Technology),
                ReferenceHolding::new("O", 9.0, Sector::RealEstate),
            ],
            20,
            PortfolioMetrics::new(31.0, 12.0, 10, 9.0),
            3.8,
            VolatilityTier::Low,
        )
    }

    /// Household blue chips across most sectors.
    #[must_use]
    pub fn balanced_blue_chip() -> ReferencePortfolio {
        ReferencePortfolio::new(
            "balanced-blue-chip",
            "Balanced Blue Chip",
            vec![
                ReferenceHolding::new("AAPL", 10.0, Sector::Technology),
                ReferenceHolding::new("MSFT", 10.0, Sector::Technology),
                ReferenceHolding::new("JNJ", 9.0, Sector::Healthcare),
                ReferenceHolding::new("UNH", 8.0, Sector::Healthcare),
                ReferenceHolding::new("JPM", 9.0, Sector::Financials),
                ReferenceHolding::new("V", 8.0, Sector::Financials),
                ReferenceHolding::new("PG", 8.0, Sector::ConsumerStaples),
                ReferenceHolding::new("HD", 8.0, Sector::ConsumerDiscretionary),
                ReferenceHolding::new("DIS", 8.0, Sector::CommunicationServices),
                ReferenceHolding::new("XOM", 8.0, Sector::Energy),
                ReferenceHolding::new("CAT", 7.0, Sector::Industrials),
                ReferenceHolding::new("KO", 7.0, Sector::ConsumerStaples),
            ],
            40,
            PortfolioMetrics::new(20.0, 10.0, 12, 20.0),
            2.1,
            VolatilityTier::Medium,
        )
    }

    /// Wide, roughly equal-weight large-cap basket.
    #[must_use]
    pub fn broad_market_core() -> ReferencePortfolio {
        ReferencePortfolio::new(
            "broad-market-core",
            "Broad Market Core",
            vec![
                ReferenceHolding::new("AAPL", 7.0, Sector::Technology),
                ReferenceHolding::new("MSFT", 7.0, Sector::Technology),
                ReferenceHolding::new("GOOGL", 6.0, Sector::CommunicationServices),
                ReferenceHolding::new("AMZN", 6.0, Sector::ConsumerDiscretionary),
                ReferenceHolding::new("JNJ", 6.0, Sector::Healthcare),
                ReferenceHolding::new("LLY", 6.0, Sector::Healthcare),
                ReferenceHolding::new("JPM", 6.0, Sector::Financials),
                ReferenceHolding::new("BAC", 5.0, Sector::Financials),
                ReferenceHolding::new("PG", 6.0, Sector::ConsumerStaples),
                ReferenceHolding::new("KO", 5.0, Sector::ConsumerStaples),
                ReferenceHolding::new("XOM", 6.0, Sector::Energy),
                ReferenceHolding::new("CVX", 5.0, Sector::Energy),
                ReferenceHolding::new("CAT", 5.0, Sector::Industrials),
                ReferenceHolding::new("UNP", 5.0, Sector::Industrials),
                ReferenceHolding::new("LIN", 5.0, Sector::Materials),
                ReferenceHolding::new("NEE", 4.0, Sector::Utilities),
                ReferenceHolding::new("PLD", 4.0, Sector::RealEstate),
                ReferenceHolding::new("DIS", 3.0, Sector::CommunicationServices),
                ReferenceHolding::new("HD", 3.0, Sector::ConsumerDiscretionary),
            ],
            35,
            PortfolioMetrics::new(14.0, 7.0, 19, 14.0),
            1.8,
            VolatilityTier::Medium,
        )
    }

    /// Growth tech concentration.
    #[must_use]
    pub fn tech_growth() -> ReferencePortfolio {
        ReferencePortfolio::new(
            "tech-growth",
            "Tech Growth",
            vec![
                ReferenceHolding::new("NVDA", 18.0, Sector::Technology),
                ReferenceHolding::new("MSFT", 15.0, Sector::Technology),
                ReferenceHolding::new("AAPL", 13.0, Sector::Technology),
                ReferenceHolding::new("AMD", 9.0, Sector::Technology),
                ReferenceHolding::new("CRM", 7.0, Sector::Technology),
                ReferenceHolding::new("GOOGL", 14.0, Sector::CommunicationServices),
                ReferenceHolding::new("META", 12.0, Sector::CommunicationServices),
                ReferenceHolding::new("AMZN", 12.0, Sector::ConsumerDiscretionary),
            ],
            70,
            PortfolioMetrics::new(62.0, 18.0, 8, 62.0),
            0.4,
            VolatilityTier::High,
        )
    }

    /// The seven names that led the last run-up, held alone.
    #[must_use]
    pub fn mega_cap_momentum() -> ReferencePortfolio {
        ReferencePortfolio::new(
            "mega-cap-momentum",
            "Mega-Cap Momentum",
            vec![
                ReferenceHolding::new("NVDA", 25.0, Sector::Technology),
                ReferenceHolding::new("MSFT", 16.0, Sector::Technology),
                ReferenceHolding::new("AAPL", 14.0, Sector::Technology),
                ReferenceHolding::new("GOOGL", 12.0, Sector::CommunicationServices),
                ReferenceHolding::new("META", 11.0, Sector::CommunicationServices),
                ReferenceHolding::new("AMZN", 12.0, Sector::ConsumerDiscretionary),
                ReferenceHolding::new("TSLA", 10.0, Sector::ConsumerDiscretionary),
            ],
            75,
            PortfolioMetrics::new(55.0, 25.0, 7, 55.0),
            0.2,
            VolatilityTier::High,
        )
    }

    /// Concentrated speculative names.
    #[must_use]
    pub fn speculative_growth() -> ReferencePortfolio {
        ReferencePortfolio::new(
            "speculative-growth",
            "Speculative Growth",
            vec![
                ReferenceHolding::new("PLTR", 30.0, Sector::Technology),
                ReferenceHolding::new("COIN", 20.0, Sector::Financials),
                ReferenceHolding::new("MSTR", 18.0, Sector::Technology),
                ReferenceHolding::new("RBLX", 12.0, Sector::CommunicationServices),
                ReferenceHolding::new("SOFI", 11.0, Sector::Financials),
                ReferenceHolding::new("RIOT", 9.0, Sector::Financials),
            ],
            90,
            PortfolioMetrics::new(48.0, 30.0, 6, 48.0),
            0.0,
            VolatilityTier::VeryHigh,
        )
    }
}
