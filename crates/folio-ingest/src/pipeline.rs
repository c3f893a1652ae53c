//! The ingestion pipeline: raw export text to merged holdings.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use folio_core::Holding;

use crate::formats::FormatCatalog;
use crate::mapping::{find_header_row, map_columns};
use crate::normalize::{parse_row, post_validate, HoldingAccumulator};
use crate::tokenizer::{clean, detect_delimiter, tokenize};

/// Outcome of one import. Always well-formed: failure modes degrade to
/// warnings plus an empty or partial holdings list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    /// Merged holdings in first-seen order.
    pub holdings: Vec<Holding>,

    /// Id of the export profile used for column mapping.
    pub detected_format: String,

    /// Human-readable degradation notes, in occurrence order.
    pub warnings: Vec<String>,

    /// Non-empty data rows seen after the header.
    pub total_rows: usize,

    /// Data rows rejected during normalization.
    pub skipped_rows: usize,
}

impl ImportResult {
    fn empty(detected_format: impl Into<String>) -> Self {
        Self {
            holdings: Vec::new(),
            detected_format: detected_format.into(),
            warnings: Vec::new(),
            total_rows: 0,
            skipped_rows: 0,
        }
    }

    /// Returns true if every data row produced a holding.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_rows == 0 && self.warnings.is_empty()
    }
}

/// Imports holdings from a raw brokerage export using the builtin catalog.
///
/// `format_hint` pins column mapping to a named profile and bypasses
/// detection; an unrecognized hint falls back to detection with a warning.
///
/// This function is total: it never panics on malformed input and always
/// returns a well-formed [`ImportResult`]. Callers inspect `warnings` and
/// `skipped_rows` to decide whether to prompt for correction.
#[must_use]
pub fn import_holdings(raw: &str, format_hint: Option<&str>) -> ImportResult {
    import_holdings_with(raw, format_hint, FormatCatalog::builtin())
}

/// Imports holdings using an explicit format catalog.
#[must_use]
pub fn import_holdings_with(
    raw: &str,
    format_hint: Option<&str>,
    catalog: &FormatCatalog,
) -> ImportResult {
    let mut result = ImportResult::empty(catalog.generic().id.clone());

    if raw.trim().is_empty() {
        result.warnings.push("input is empty".to_string());
        return result;
    }

    let cleaned = clean(raw);
    let delimiter = detect_delimiter(&cleaned);
    debug!(delimiter = %(delimiter as char), "delimiter detected");

    let rows = tokenize(&cleaned, delimiter);
    if rows.is_empty() {
        result
            .warnings
            .push("no rows could be tokenized from the input".to_string());
        return result;
    }

    let profile = match format_hint {
        Some(hint) => match catalog.find(hint) {
            Some(profile) => profile,
            None => {
                warn!(hint, "unknown format hint, falling back to detection");
                result
                    .warnings
                    .push(format!("unknown format hint '{hint}'; auto-detecting"));
                catalog.detect(&cleaned)
            }
        },
        None => catalog.detect(&cleaned),
    };
    result.detected_format = profile.id.clone();
    debug!(format = %profile.id, "export format resolved");

    let header_index = match find_header_row(&rows, profile) {
        Some(index) => index,
        None => {
            result
                .warnings
                .push("no header row recognized; using the first row".to_string());
            0
        }
    };

    let mapping = map_columns(&rows[header_index], profile);
    debug!(?mapping, header = header_index, "columns mapped");

    let data_rows = &rows[header_index + 1..];

    if mapping.ticker.is_none() {
        result
            .warnings
            .push("could not locate a ticker column; nothing imported".to_string());
        let unprocessed = data_rows.iter().filter(|row| !is_blank(row)).count();
        result.total_rows = unprocessed;
        result.skipped_rows = unprocessed;
        return result;
    }
    if mapping.shares.is_none() {
        result.warnings.push(
            "could not locate a shares column; share counts will be inferred from value and price"
                .to_string(),
        );
    }

    let mut accumulator = HoldingAccumulator::new();
    for row in data_rows {
        if is_blank(row) {
            continue;
        }
        result.total_rows += 1;

        match parse_row(row, &mapping, result.total_rows) {
            Ok(parsed) => {
                result.warnings.extend(parsed.warnings);
                accumulator.push(parsed.holding);
            }
            Err(_) => result.skipped_rows += 1,
        }
    }

    result.holdings = accumulator.into_holdings();
    result.warnings.extend(post_validate(&result.holdings));

    debug!(
        holdings = result.holdings.len(),
        total = result.total_rows,
        skipped = result.skipped_rows,
        "import finished"
    );
    result
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}
