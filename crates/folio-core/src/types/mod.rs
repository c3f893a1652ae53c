//! Domain types for portfolio import and analysis.
//!
//! This module provides type-safe representations of the core concepts:
//!
//! - [`Holding`]: A normalized stock position from a brokerage export
//! - [`Sector`]: Equity sector classification
//! - [`EnrichedHolding`]: A holding enriched with market data
//! - [`PortfolioSnapshot`]: Immutable analysis-time view with weights

mod holding;
mod sector;
mod snapshot;

// Re-export all types
pub use holding::Holding;
pub use sector::Sector;
pub use snapshot::{
    EnrichedHolding, LargestPosition, PortfolioSnapshot, Position, SnapshotBuilder,
};
