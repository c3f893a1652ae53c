//! The scoring engine: snapshot + registry in, ranked alerts out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use folio_core::PortfolioSnapshot;

use crate::factor::{RiskCategory, RiskFactor, Severity, SeverityCalc, Trigger};
use crate::registry::RiskFactorRegistry;

/// A triggered risk factor for one snapshot. Ephemeral - derived per
/// request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAlert {
    /// Id of the factor that fired.
    pub factor_id: String,

    /// Display name of the factor.
    pub factor_name: String,

    /// Risk pattern category.
    pub category: RiskCategory,

    /// Assigned severity tier.
    pub severity: Severity,

    /// Severity score, clamped to [0, 100].
    pub severity_score: f64,

    /// Share of portfolio value attributable to matched holdings (0-100).
    pub exposure_pct: f64,

    /// Tickers of the matched holdings.
    pub affected_tickers: Vec<String>,

    /// Combined market value of the matched holdings.
    pub affected_value: Decimal,

    /// Descriptive text from the factor.
    pub description: String,

    /// Hedge-search keywords from the factor.
    pub hedge_keywords: Vec<String>,
}

/// Evaluates every registry factor against a snapshot.
///
/// Structural factors (single-stock, top-sector) are checked against
/// snapshot aggregates; the rest match positions by criteria. A factor
/// emits an alert only when its exposure reaches the low threshold.
/// Alerts come back ordered by descending severity tier, ties broken by
/// descending exposure.
///
/// Pure and deterministic: the same snapshot and registry always produce
/// the same alerts, and an empty list is a valid outcome, not an error.
#[must_use]
pub fn evaluate(snapshot: &PortfolioSnapshot, registry: &RiskFactorRegistry) -> Vec<RiskAlert> {
    let mut alerts: Vec<RiskAlert> = registry
        .factors()
        .iter()
        .filter_map(|factor| evaluate_factor(snapshot, factor))
        .collect();

    alerts.sort_by(|a, b| {
        b.severity.cmp(&a.severity).then(
            b.exposure_pct
                .partial_cmp(&a.exposure_pct)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    alerts
}

fn evaluate_factor(snapshot: &PortfolioSnapshot, factor: &RiskFactor) -> Option<RiskAlert> {
    let (exposure_pct, affected_tickers, affected_value) = match &factor.trigger {
        Trigger::LargestPosition => {
            let largest = snapshot.largest_position.as_ref()?;
            let value = snapshot
                .positions
                .iter()
                .find(|p| p.ticker == largest.ticker)
                .map(|p| p.value)
                .unwrap_or(Decimal::ZERO);
            (largest.weight_pct, vec![largest.ticker.clone()], value)
        }
        Trigger::TopSector => {
            let (sector, weight) = snapshot.top_known_sector()?;
            let members = snapshot.tickers_in_sector(sector);
            let value: Decimal = snapshot
                .positions
                .iter()
                .filter(|p| p.sector == sector)
                .map(|p| p.value)
                .sum();
            (weight, members, value)
        }
        Trigger::Criteria(criteria) => {
            let matched: Vec<_> = snapshot
                .positions
                .iter()
                .filter(|p| criteria.matches(p))
                .collect();
            if matched.is_empty() {
                return None;
            }

            let value: Decimal = matched.iter().map(|p| p.value).sum();
            let exposure = (value / snapshot.total_value * Decimal::ONE_HUNDRED)
                .try_into()
                .unwrap_or(0.0);
            let tickers = matched.iter().map(|p| p.ticker.clone()).collect();
            (exposure, tickers, value)
        }
    };

    // Emission gate: exposure must reach the low threshold.
    if exposure_pct < factor.thresholds.low {
        return None;
    }

    let raw_score = match factor.severity_calc {
        SeverityCalc::ExposurePct | SeverityCalc::Concentration => exposure_pct,
        SeverityCalc::Count => {
            let total = snapshot.holding_count();
            if total == 0 {
                0.0
            } else {
                100.0 * affected_tickers.len() as f64 / total as f64
            }
        }
    };
    let severity_score = raw_score.clamp(0.0, 100.0);

    // Count-scored factors can score below the low threshold even though
    // the exposure gate passed; the tier floors at Low.
    let severity = factor
        .thresholds
        .tier_for(severity_score)
        .unwrap_or(Severity::Low);

    Some(RiskAlert {
        factor_id: factor.id.clone(),
        factor_name: factor.name.clone(),
        category: factor.category,
        severity,
        severity_score,
        exposure_pct,
        affected_tickers,
        affected_value,
        description: factor.description.clone(),
        hedge_keywords: factor.hedge_keywords.clone(),
    })
}
