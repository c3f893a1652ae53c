//! Raw text cleaning, delimiter sniffing, and quote-aware tokenization.

use tracing::debug;

/// Strips a leading UTF-8 byte-order marker and normalizes line endings.
#[must_use]
pub fn clean(raw: &str) -> String {
    let stripped = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    stripped.replace("\r\n", "\n").replace('\r', "\n")
}

/// Sniffs the cell delimiter from the first line of cleaned content.
///
/// Tab wins when present; semicolon wins when present without any comma
/// (European exports); comma otherwise.
#[must_use]
pub fn detect_delimiter(cleaned: &str) -> u8 {
    let first_line = cleaned.lines().next().unwrap_or("");

    if first_line.contains('\t') {
        b'\t'
    } else if first_line.contains(';') && !first_line.contains(',') {
        b';'
    } else {
        b','
    }
}

/// Splits cleaned content into rows of trimmed cells.
///
/// Delegates quote handling to the `csv` reader: double-quote-escaped
/// fields are honored and surrounding quotes are stripped per cell.
/// Records that fail to parse are dropped.
#[must_use]
pub fn tokenize(cleaned: &str, delimiter: u8) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(cleaned.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
            }
            Err(err) => {
                debug!(error = %err, "dropping unparseable record");
            }
        }
    }

    rows
}
