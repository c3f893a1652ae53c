//! Canonical holding records normalized from brokerage exports.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized stock holding.
///
/// Produced by the ingestion pipeline from raw export rows. Tickers are
/// 1-5 characters from `[A-Z.]` with at least one letter and are unique
/// within a portfolio after merging. Holdings are never persisted; the
/// host system recomputes them per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Normalized ticker symbol.
    pub ticker: String,

    /// Share count (positive, rounded to four decimal places).
    pub shares: Decimal,

    /// Average purchase price per share, if the source provided one.
    pub average_price: Option<Decimal>,

    /// Current market value of the position, if the source provided one.
    pub current_value: Option<Decimal>,

    /// Total cost basis of the position, if the source provided one.
    pub cost_basis: Option<Decimal>,

    /// Currency of the monetary fields, if the source indicated one.
    pub currency: Option<String>,
}

impl Holding {
    /// Creates a new holding with just a ticker and share count.
    #[must_use]
    pub fn new(ticker: impl Into<String>, shares: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            shares,
            average_price: None,
            current_value: None,
            cost_basis: None,
            currency: None,
        }
    }

    /// Sets the average purchase price.
    #[must_use]
    pub fn with_average_price(mut self, price: Decimal) -> Self {
        self.average_price = Some(price);
        self
    }

    /// Sets the current market value.
    #[must_use]
    pub fn with_current_value(mut self, value: Decimal) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Sets the cost basis.
    #[must_use]
    pub fn with_cost_basis(mut self, basis: Decimal) -> Self {
        self.cost_basis = Some(basis);
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Merges another holding for the same ticker into this one.
    ///
    /// Shares sum. The average price recombines as a shares-weighted average
    /// when both sides carry one, otherwise whichever side has a price wins.
    /// Current value and cost basis sum additively. Currency keeps the first
    /// non-empty source.
    pub fn absorb(&mut self, other: Holding) {
        debug_assert_eq!(self.ticker, other.ticker);

        self.average_price = match (self.average_price, other.average_price) {
            (Some(a), Some(b)) => {
                let combined = self.shares + other.shares;
                if combined.is_zero() {
                    Some(a)
                } else {
                    Some((a * self.shares + b * other.shares) / combined)
                }
            }
            (a, b) => a.or(b),
        };

        self.shares += other.shares;

        self.current_value = sum_optional(self.current_value, other.current_value);
        self.cost_basis = sum_optional(self.cost_basis, other.cost_basis);

        if self.currency.is_none() {
            self.currency = other.currency;
        }
    }
}

/// Sums two optional amounts, treating a missing side as absent rather than zero.
fn sum_optional(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x + y),
        (x, y) => x.or(y),
    }
}
