//! Lenient numeric cell parsing shared by all amount fields.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Outcome of parsing one numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The parsed amount; zero when the cell is not numeric.
    pub value: Decimal,

    /// True when the cell carried a trailing percent sign. The value has
    /// already been divided by 100; callers decide whether that convention
    /// makes sense for the field and warn when it does not.
    pub percent: bool,

    /// ISO currency code inferred from a currency symbol in the cell.
    pub currency: Option<&'static str>,
}

impl ParsedNumber {
    /// A non-numeric cell.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
            percent: false,
            currency: None,
        }
    }

    /// Returns true if the parsed amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }
}

/// Parses an amount cell the way brokerage exports write them.
///
/// Handles currency symbols, thousands separators, surrounding whitespace,
/// parenthesized negatives, and a trailing percent sign (divided by 100).
/// Anything that still fails to parse yields zero.
#[must_use]
pub fn parse_numeric(cell: &str) -> ParsedNumber {
    let mut text = cell.trim();
    if text.is_empty() {
        return ParsedNumber::zero();
    }

    let mut negative = false;
    if text.starts_with('(') && text.ends_with(')') {
        negative = true;
        text = &text[1..text.len() - 1];
    }

    let mut percent = false;
    if let Some(stripped) = text.trim_end().strip_suffix('%') {
        percent = true;
        text = stripped;
    }

    let mut currency = None;
    let mut digits = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '$' => currency = currency.or(Some("USD")),
            '€' => currency = currency.or(Some("EUR")),
            '£' => currency = currency.or(Some("GBP")),
            ',' | '_' => {}
            c if c.is_whitespace() => {}
            c => digits.push(c),
        }
    }

    let Ok(mut value) = Decimal::from_str(&digits) else {
        return ParsedNumber::zero();
    };

    if negative {
        value = -value;
    }
    if percent {
        value /= Decimal::ONE_HUNDRED;
    }

    ParsedNumber {
        value,
        percent,
        currency,
    }
}
