//! Immutable portfolio snapshots with computed weights.
//!
//! A snapshot is built from enriched holdings (the external market-data
//! collaborator fills in value, sector, and industry per ticker) and is the
//! sole input to risk scoring and classification. Snapshots are computed
//! fresh per analysis call and never mutated afterwards.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Sector;
use crate::error::{CoreResult, SnapshotError};

/// A holding enriched with market data, ready for snapshot construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedHolding {
    /// Normalized ticker symbol.
    pub ticker: String,

    /// Display name of the company, if known.
    pub name: Option<String>,

    /// Normalized sector classification.
    pub sector: Sector,

    /// Free-form industry label from the data provider, if known.
    pub industry: Option<String>,

    /// Market value of the position in the portfolio base currency.
    pub value: Decimal,
}

impl EnrichedHolding {
    /// Creates a new enriched holding with just a ticker and value.
    #[must_use]
    pub fn new(ticker: impl Into<String>, value: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            sector: Sector::Unknown,
            industry: None,
            value,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sector.
    #[must_use]
    pub fn with_sector(mut self, sector: Sector) -> Self {
        self.sector = sector;
        self
    }

    /// Sets the industry label.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }
}

/// A snapshot-resident position with its computed portfolio weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Normalized ticker symbol.
    pub ticker: String,

    /// Display name of the company, if known.
    pub name: Option<String>,

    /// Normalized sector classification.
    pub sector: Sector,

    /// Free-form industry label, if known.
    pub industry: Option<String>,

    /// Market value in the portfolio base currency.
    pub value: Decimal,

    /// Weight as percentage of total portfolio value (0-100).
    pub weight_pct: f64,
}

/// The largest position in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargestPosition {
    /// Ticker of the largest position.
    pub ticker: String,

    /// Its weight as percentage of total value.
    pub weight_pct: f64,
}

/// An immutable view of a portfolio at analysis time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Total market value across all positions.
    pub total_value: Decimal,

    /// Positions with computed weights, in input order.
    pub positions: Vec<Position>,

    /// Weight by sector, Unknown bucket included.
    pub sector_weights: HashMap<Sector, f64>,

    /// The heaviest position, if any.
    pub largest_position: Option<LargestPosition>,
}

impl PortfolioSnapshot {
    /// Creates a new snapshot builder.
    #[must_use]
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns sector weights excluding the Unknown bucket.
    ///
    /// Positions without sector data are excluded so that missing
    /// enrichment cannot masquerade as sector clustering.
    #[must_use]
    pub fn known_sector_weights(&self) -> HashMap<Sector, f64> {
        self.sector_weights
            .iter()
            .filter(|(sector, _)| **sector != Sector::Unknown)
            .map(|(sector, weight)| (*sector, *weight))
            .collect()
    }

    /// Returns the heaviest known sector and its weight, if any.
    #[must_use]
    pub fn top_known_sector(&self) -> Option<(Sector, f64)> {
        self.sector_weights
            .iter()
            .filter(|(sector, _)| **sector != Sector::Unknown)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(sector, weight)| (*sector, *weight))
    }

    /// Returns the technology sector weight (0 when absent).
    #[must_use]
    pub fn tech_exposure(&self) -> f64 {
        self.sector_weights
            .get(&Sector::Technology)
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns the tickers of all positions in the given sector.
    #[must_use]
    pub fn tickers_in_sector(&self, sector: Sector) -> Vec<String> {
        self.positions
            .iter()
            .filter(|p| p.sector == sector)
            .map(|p| p.ticker.clone())
            .collect()
    }
}

/// Builder for constructing a [`PortfolioSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    holdings: Vec<EnrichedHolding>,
}

impl SnapshotBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an enriched holding.
    #[must_use]
    pub fn add_holding(mut self, holding: EnrichedHolding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple enriched holdings.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = EnrichedHolding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Builds the snapshot, computing total value, weights, sector
    /// distribution, and the largest position.
    ///
    /// # Errors
    ///
    /// Returns an error if the position list is empty, a position value is
    /// negative, a ticker appears twice, or the total value is not positive.
    pub fn build(self) -> CoreResult<PortfolioSnapshot> {
        if self.holdings.is_empty() {
            return Err(SnapshotError::EmptySnapshot);
        }

        let mut seen = std::collections::HashSet::new();
        for h in &self.holdings {
            if h.value < Decimal::ZERO {
                return Err(SnapshotError::invalid_value(&h.ticker, h.value));
            }
            if !seen.insert(h.ticker.clone()) {
                return Err(SnapshotError::duplicate_ticker(&h.ticker));
            }
        }

        let total_value: Decimal = self.holdings.iter().map(|h| h.value).sum();
        if total_value <= Decimal::ZERO {
            return Err(SnapshotError::non_positive_total(total_value));
        }

        let positions: Vec<Position> = self
            .holdings
            .into_iter()
            .map(|h| {
                let weight = h.value / total_value * Decimal::ONE_HUNDRED;
                Position {
                    ticker: h.ticker,
                    name: h.name,
                    sector: h.sector,
                    industry: h.industry,
                    value: h.value,
                    weight_pct: weight.try_into().unwrap_or(0.0),
                }
            })
            .collect();

        let mut sector_weights: HashMap<Sector, f64> = HashMap::new();
        for p in &positions {
            *sector_weights.entry(p.sector).or_insert(0.0) += p.weight_pct;
        }

        let largest_position = positions
            .iter()
            .max_by(|a, b| {
                a.weight_pct
                    .partial_cmp(&b.weight_pct)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|p| LargestPosition {
                ticker: p.ticker.clone(),
                weight_pct: p.weight_pct,
            });

        Ok(PortfolioSnapshot {
            total_value,
            positions,
            sector_weights,
            largest_position,
        })
    }
}
