//! Row normalization: ticker sanitization, holding construction, merging.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use folio_core::Holding;

use crate::mapping::ColumnMapping;
use crate::numeric::{parse_numeric, ParsedNumber};

/// Share counts above this are flagged as suspicious during post-validation.
pub const MAX_PLAUSIBLE_SHARES: Decimal = dec!(10_000_000);

/// Decimal places kept on share counts (brokerages report fractional shares).
pub const SHARE_PRECISION: u32 = 4;

/// Cell substrings identifying non-equity rows (cash sweeps, unsettled funds).
const NON_EQUITY_MARKERS: &[&str] = &["CASH", "MONEY MARKET", "PENDING"];

/// Normalizes a raw ticker cell.
///
/// Uppercases, strips a leading `*` (footnote marker in several exports),
/// rejects cash-like rows, drops everything outside `[A-Z.]`, removes a
/// trailing single-letter share-class suffix (`BRK.B` -> `BRK`), and
/// requires a final length of 1-5 with at least one letter.
#[must_use]
pub fn normalize_ticker(raw: &str) -> Option<String> {
    let upper = raw.trim().to_uppercase();
    let upper = upper.strip_prefix('*').unwrap_or(&upper);

    if NON_EQUITY_MARKERS
        .iter()
        .any(|marker| upper.contains(marker))
    {
        return None;
    }

    let mut cleaned: String = upper
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == '.')
        .collect();

    // BRK.B -> BRK
    let bytes = cleaned.as_bytes();
    if bytes.len() >= 3
        && bytes[bytes.len() - 2] == b'.'
        && bytes[bytes.len() - 1].is_ascii_uppercase()
    {
        cleaned.truncate(cleaned.len() - 2);
    }

    let valid_length = (1..=5).contains(&cleaned.len());
    let has_letter = cleaned.chars().any(|c| c.is_ascii_uppercase());
    if valid_length && has_letter {
        Some(cleaned)
    } else {
        None
    }
}

/// One data row converted to a holding, with any row-level warnings.
#[derive(Debug)]
pub struct ParsedRow {
    /// The normalized holding.
    pub holding: Holding,
    /// Warnings attached to this row (percent-formatted amount cells).
    pub warnings: Vec<String>,
}

/// Why a data row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    /// Ticker cell missing, cash-like, or not a valid symbol.
    BadTicker,
    /// No positive share count and no value/price pair to infer one from.
    NoShares,
}

/// Converts one tokenized data row into a [`Holding`].
///
/// `row_number` is 1-based over data rows and only used in warning text.
pub fn parse_row(
    row: &[String],
    mapping: &ColumnMapping,
    row_number: usize,
) -> Result<ParsedRow, RowRejection> {
    let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).map(String::as_str);

    let Some(ticker) = cell(mapping.ticker).and_then(normalize_ticker) else {
        debug!(row = row_number, "rejecting row: unusable ticker");
        return Err(RowRejection::BadTicker);
    };

    let mut warnings = Vec::new();
    let mut currency: Option<&'static str> = None;
    let mut parse_amount = |index: Option<usize>, field: &str| {
        let parsed = cell(index).map_or_else(ParsedNumber::zero, parse_numeric);
        if parsed.percent {
            warnings.push(format!(
                "row {row_number}: percent-formatted {field} for {ticker} treated as a fraction"
            ));
        }
        currency = currency.or(parsed.currency);
        parsed
    };

    let shares_cell = parse_amount(mapping.shares, "share count");
    let price = parse_amount(mapping.price, "price");
    let value = parse_amount(mapping.value, "value");
    let cost_basis = parse_amount(mapping.cost_basis, "cost basis");

    let shares = if shares_cell.is_positive() {
        shares_cell.value
    } else if value.is_positive() && price.is_positive() {
        // Share count inferable from the position value
        value.value / price.value
    } else {
        debug!(row = row_number, %ticker, "rejecting row: no usable share count");
        return Err(RowRejection::NoShares);
    };

    let mut holding = Holding::new(ticker, shares.round_dp(SHARE_PRECISION));
    if price.is_positive() {
        holding = holding.with_average_price(price.value);
    }
    if value.is_positive() {
        holding = holding.with_current_value(value.value);
    }
    if cost_basis.is_positive() {
        holding = holding.with_cost_basis(cost_basis.value);
    }
    if let Some(code) = currency {
        holding = holding.with_currency(code);
    }

    Ok(ParsedRow { holding, warnings })
}

/// Accumulates holdings in first-seen order, merging duplicate tickers.
#[derive(Debug, Default)]
pub struct HoldingAccumulator {
    holdings: Vec<Holding>,
    index_by_ticker: HashMap<String, usize>,
}

impl HoldingAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holding, merging it into an existing one on ticker collision.
    pub fn push(&mut self, holding: Holding) {
        match self.index_by_ticker.get(&holding.ticker) {
            Some(&i) => self.holdings[i].absorb(holding),
            None => {
                self.index_by_ticker
                    .insert(holding.ticker.clone(), self.holdings.len());
                self.holdings.push(holding);
            }
        }
    }

    /// Consumes the accumulator, returning merged holdings in input order.
    #[must_use]
    pub fn into_holdings(self) -> Vec<Holding> {
        self.holdings
    }
}

/// Non-fatal integrity checks over the merged holdings list.
///
/// Flags implausibly large share counts and any ticker that somehow
/// survived merging twice (unreachable through [`HoldingAccumulator`];
/// kept as an assertion surface).
#[must_use]
pub fn post_validate(holdings: &[Holding]) -> Vec<String> {
    let mut warnings = Vec::new();

    for holding in holdings {
        if holding.shares > MAX_PLAUSIBLE_SHARES {
            warnings.push(format!(
                "implausibly large share count for {}: {}",
                holding.ticker, holding.shares
            ));
        }
    }

    let mut seen = HashMap::new();
    for holding in holdings {
        let count = seen.entry(holding.ticker.as_str()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            warnings.push(format!(
                "integrity: duplicate ticker {} survived merge",
                holding.ticker
            ));
        }
    }

    warnings
}
