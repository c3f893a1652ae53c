//! Header discovery and keyword-based column resolution.

use serde::{Deserialize, Serialize};

use crate::formats::{FormatProfile, HoldingField};

/// How many leading rows are scanned for a header.
pub const HEADER_SCAN_ROWS: usize = 10;

/// Resolved column indices for one detected format.
///
/// `None` means the field could not be resolved from the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Ticker column index.
    pub ticker: Option<usize>,
    /// Shares column index.
    pub shares: Option<usize>,
    /// Price column index.
    pub price: Option<usize>,
    /// Market value column index.
    pub value: Option<usize>,
    /// Cost basis column index.
    pub cost_basis: Option<usize>,
}

impl ColumnMapping {
    /// Returns the resolved index for a field.
    #[must_use]
    pub fn index(&self, field: HoldingField) -> Option<usize> {
        match field {
            HoldingField::Ticker => self.ticker,
            HoldingField::Shares => self.shares,
            HoldingField::Price => self.price,
            HoldingField::Value => self.value,
            HoldingField::CostBasis => self.cost_basis,
        }
    }
}

/// Scans the first [`HEADER_SCAN_ROWS`] rows for a header.
///
/// A row qualifies when any cell matches a ticker or shares keyword of the
/// profile; the first qualifying row wins. Returns `None` when no row
/// qualifies (the caller defaults to row 0 with a warning).
#[must_use]
pub fn find_header_row(rows: &[Vec<String>], profile: &FormatProfile) -> Option<usize> {
    rows.iter().take(HEADER_SCAN_ROWS).position(|row| {
        row.iter().any(|cell| {
            let lower = cell.to_lowercase();
            cell_matches(&lower, profile.keywords.for_field(HoldingField::Ticker))
                || cell_matches(&lower, profile.keywords.for_field(HoldingField::Shares))
        })
    })
}

/// Resolves each semantic field to the first header cell containing one of
/// the profile's keywords for that field.
#[must_use]
pub fn map_columns(header: &[String], profile: &FormatProfile) -> ColumnMapping {
    let lower: Vec<String> = header.iter().map(|cell| cell.to_lowercase()).collect();

    let resolve = |field: HoldingField| {
        let keywords = profile.keywords.for_field(field);
        lower.iter().position(|cell| cell_matches(cell, keywords))
    };

    ColumnMapping {
        ticker: resolve(HoldingField::Ticker),
        shares: resolve(HoldingField::Shares),
        price: resolve(HoldingField::Price),
        value: resolve(HoldingField::Value),
        cost_basis: resolve(HoldingField::CostBasis),
    }
}

fn cell_matches(lower_cell: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| lower_cell.contains(keyword.as_str()))
}
