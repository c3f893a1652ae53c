//! # Folio Core
//!
//! Canonical holding and portfolio snapshot types for the folio workspace.
//!
//! This crate defines the data model shared by the ingestion pipeline, the
//! risk scoring engine, and the archetype classifier.
//!
//! ## Design Philosophy
//!
//! - **Pure values**: No I/O, no caching, no shared mutable state
//! - **Snapshots are immutable**: A [`PortfolioSnapshot`] is computed fresh
//!   per analysis call and never mutated afterwards
//! - **Enrichment is external**: Market value, sector, and industry arrive
//!   from an external collaborator before a snapshot is built
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let snapshot = PortfolioSnapshot::builder()
//!     .add_holding(
//!         EnrichedHolding::new("NVDA", dec!(62_000)).with_sector(Sector::Technology),
//!     )
//!     .add_holding(
//!         EnrichedHolding::new("JNJ", dec!(38_000)).with_sector(Sector::Healthcare),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(snapshot.holding_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{CoreResult, SnapshotError};

// Re-export main types
pub use types::{
    EnrichedHolding, Holding, LargestPosition, PortfolioSnapshot, Position, Sector,
    SnapshotBuilder,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_core::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{CoreResult, SnapshotError};

    // Domain types
    pub use crate::types::{
        EnrichedHolding, Holding, LargestPosition, PortfolioSnapshot, Position, Sector,
        SnapshotBuilder,
    };

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
}
