//! Aggregate metrics the classifier consumes.

use serde::{Deserialize, Serialize};

use folio_core::PortfolioSnapshot;

/// The four aggregates the rubric scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Weight of the heaviest known sector (0-100).
    pub sector_concentration: f64,

    /// Weight of the largest position (0-100).
    pub top_holding_weight: f64,

    /// Number of holdings.
    pub num_holdings: usize,

    /// Technology sector weight (0-100).
    pub tech_exposure: f64,
}

impl PortfolioMetrics {
    /// Creates metrics from explicit values.
    #[must_use]
    pub fn new(
        sector_concentration: f64,
        top_holding_weight: f64,
        num_holdings: usize,
        tech_exposure: f64,
    ) -> Self {
        Self {
            sector_concentration,
            top_holding_weight,
            num_holdings,
            tech_exposure,
        }
    }

    /// Derives metrics from a snapshot.
    ///
    /// Sector concentration is the heaviest known sector (positions
    /// without sector data are excluded, matching the scoring engine).
    #[must_use]
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            sector_concentration: snapshot
                .top_known_sector()
                .map(|(_, weight)| weight)
                .unwrap_or(0.0),
            top_holding_weight: snapshot
                .largest_position
                .as_ref()
                .map(|p| p.weight_pct)
                .unwrap_or(0.0),
            num_holdings: snapshot.holding_count(),
            tech_exposure: snapshot.tech_exposure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{EnrichedHolding, Sector};
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_snapshot() {
        let snapshot = PortfolioSnapshot::builder()
            .add_holding(
                EnrichedHolding::new("NVDA", dec!(45_000)).with_sector(Sector::Technology),
            )
            .add_holding(
                EnrichedHolding::new("MSFT", dec!(30_000)).with_sector(Sector::Technology),
            )
            .add_holding(EnrichedHolding::new("XYZ", dec!(25_000)))
            .build()
            .unwrap();

        let metrics = PortfolioMetrics::from_snapshot(&snapshot);

        assert!((metrics.sector_concentration - 75.0).abs() < 1e-9);
        assert!((metrics.top_holding_weight - 45.0).abs() < 1e-9);
        assert_eq!(metrics.num_holdings, 3);
        assert!((metrics.tech_exposure - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_unknown_sectors_mean_zero_concentration() {
        let snapshot = PortfolioSnapshot::builder()
            .add_holding(EnrichedHolding::new("AAA", dec!(50_000)))
            .add_holding(EnrichedHolding::new("BBB", dec!(50_000)))
            .build()
            .unwrap();

        let metrics = PortfolioMetrics::from_snapshot(&snapshot);
        assert_eq!(metrics.sector_concentration, 0.0);
        assert_eq!(metrics.tech_exposure, 0.0);
    }
}
