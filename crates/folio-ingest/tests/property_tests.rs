//! Property-based tests for ingestion invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Merged holdings have unique tickers
//! - Merged shares equal the sum of contributing rows
//! - Accepted + skipped rows account for every data row
//! - Canonical output re-ingests to the identical holdings list

use std::collections::HashMap;

use rust_decimal::Decimal;

use folio_ingest::import_holdings;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const TICKER_POOL: &[&str] = &[
    "NVDA", "MSFT", "AAPL", "AMZN", "GOOG", "META", "TSLA", "JNJ", "XOM", "JPM", "V", "PG", "KO",
    "BRK.B", "CASH", "GOOGLE",
];

/// Generates an export with `n` rows drawn deterministically from the pool.
/// Some pool entries are intentionally invalid (CASH, six letters).
fn generate_export(n: usize, seed: u64) -> String {
    let mut text = String::from("Symbol,Shares\n");
    for i in 0..n {
        let hash = simple_hash(seed, i as u64);
        let ticker = TICKER_POOL[hash as usize % TICKER_POOL.len()];
        let shares = 1 + hash % 500;
        text.push_str(&format!("{ticker},{shares}\n"));
    }
    text
}

/// Expected per-ticker share sums for a generated export, valid rows only.
fn expected_sums(n: usize, seed: u64) -> HashMap<String, u64> {
    let mut sums = HashMap::new();
    for i in 0..n {
        let hash = simple_hash(seed, i as u64);
        let ticker = TICKER_POOL[hash as usize % TICKER_POOL.len()];
        let shares = 1 + hash % 500;
        let normalized = match ticker {
            "CASH" | "GOOGLE" => continue,
            "BRK.B" => "BRK",
            other => other,
        };
        *sums.entry(normalized.to_string()).or_insert(0) += shares;
    }
    sums
}

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// PROPERTY: UNIQUE TICKERS AFTER MERGE
// =============================================================================

#[test]
fn property_merged_tickers_are_unique() {
    for seed in 0..10 {
        for size in [1, 5, 25, 100] {
            let result = import_holdings(&generate_export(size, seed), None);

            let mut tickers: Vec<&str> =
                result.holdings.iter().map(|h| h.ticker.as_str()).collect();
            tickers.sort_unstable();
            let before = tickers.len();
            tickers.dedup();

            assert_eq!(
                before,
                tickers.len(),
                "duplicate ticker for size={size}, seed={seed}"
            );
        }
    }
}

// =============================================================================
// PROPERTY: SHARES ARE CONSERVED THROUGH MERGING
// =============================================================================

#[test]
fn property_merged_shares_equal_row_sums() {
    for seed in 0..10 {
        for size in [1, 5, 25, 100] {
            let result = import_holdings(&generate_export(size, seed), None);
            let expected = expected_sums(size, seed);

            assert_eq!(result.holdings.len(), expected.len());
            for holding in &result.holdings {
                let expected_shares = Decimal::from(expected[&holding.ticker]);
                assert_eq!(
                    holding.shares, expected_shares,
                    "shares mismatch for {} (size={size}, seed={seed})",
                    holding.ticker
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: EVERY DATA ROW IS ACCOUNTED FOR
// =============================================================================

#[test]
fn property_row_accounting() {
    for seed in 0..10 {
        for size in [1, 5, 25, 100] {
            let result = import_holdings(&generate_export(size, seed), None);

            assert_eq!(result.total_rows, size, "size={size}, seed={seed}");

            let contributing = size - result.skipped_rows;
            let merged_row_count: u64 = {
                // Count valid generated rows directly.
                (0..size)
                    .filter(|&i| {
                        let hash = simple_hash(seed, i as u64);
                        let ticker = TICKER_POOL[hash as usize % TICKER_POOL.len()];
                        ticker != "CASH" && ticker != "GOOGLE"
                    })
                    .count() as u64
            };
            assert_eq!(contributing as u64, merged_row_count);
        }
    }
}

// =============================================================================
// PROPERTY: CANONICAL RE-INGESTION IS IDEMPOTENT
// =============================================================================

#[test]
fn property_reingestion_is_idempotent() {
    for seed in 0..10 {
        let first = import_holdings(&generate_export(50, seed), None);

        let mut canonical = String::from("Symbol,Shares\n");
        for holding in &first.holdings {
            canonical.push_str(&format!("{},{}\n", holding.ticker, holding.shares));
        }
        let second = import_holdings(&canonical, None);

        assert_eq!(second.holdings, first.holdings, "seed={seed}");
        assert_eq!(second.skipped_rows, 0);
        assert_eq!(second.detected_format, "generic");
    }
}
