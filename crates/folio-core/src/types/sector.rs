//! Equity sector classification.
//!
//! This module provides issuer sector classification for listed equities:
//!
//! - [`Sector`]: Normalized sector categories for equity markets

use serde::{Deserialize, Serialize};

/// Normalized equity sector for analytics.
///
/// These sectors cover the primary equity market segments. Source data from
/// market-data providers uses varying label spellings; [`Sector::parse_label`]
/// normalizes the common ones.
///
/// # Examples
///
/// ```
/// use folio_core::types::Sector;
///
/// let sector = Sector::Utilities;
/// assert!(sector.is_defensive());
/// assert!(sector.is_rate_sensitive());
///
/// let parsed = Sector::parse_label("Information Technology");
/// assert_eq!(parsed, Some(Sector::Technology));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sector {
    /// Information technology (software, hardware, semiconductors)
    Technology,
    /// Communication services (media, telecom, interactive platforms)
    CommunicationServices,
    /// Consumer discretionary (retail, autos, leisure)
    ConsumerDiscretionary,
    /// Consumer staples (food, beverages, household products)
    ConsumerStaples,
    /// Energy (oil, gas, consumable fuels)
    Energy,
    /// Financials (banks, insurance, capital markets)
    Financials,
    /// Health care (pharma, biotech, providers, equipment)
    Healthcare,
    /// Industrials (capital goods, transport, commercial services)
    Industrials,
    /// Materials (chemicals, metals, mining)
    Materials,
    /// Real estate (REITs, real estate management)
    RealEstate,
    /// Utilities (electric, gas, water)
    Utilities,
    /// Sector not provided or not recognized
    #[default]
    Unknown,
}

impl Sector {
    /// Returns all sectors in a standard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Technology,
            Self::CommunicationServices,
            Self::ConsumerDiscretionary,
            Self::ConsumerStaples,
            Self::Energy,
            Self::Financials,
            Self::Healthcare,
            Self::Industrials,
            Self::Materials,
            Self::RealEstate,
            Self::Utilities,
            Self::Unknown,
        ]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::CommunicationServices => "Communication Services",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::Energy => "Energy",
            Self::Financials => "Financials",
            Self::Healthcare => "Healthcare",
            Self::Industrials => "Industrials",
            Self::Materials => "Materials",
            Self::RealEstate => "Real Estate",
            Self::Utilities => "Utilities",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns a short code for the sector.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Technology => "TECH",
            Self::CommunicationServices => "COMM",
            Self::ConsumerDiscretionary => "COND",
            Self::ConsumerStaples => "CONS",
            Self::Energy => "ENRG",
            Self::Financials => "FIN",
            Self::Healthcare => "HLTH",
            Self::Industrials => "INDU",
            Self::Materials => "MATR",
            Self::RealEstate => "REAL",
            Self::Utilities => "UTIL",
            Self::Unknown => "UNKN",
        }
    }

    /// Parses a provider sector label into a normalized sector.
    ///
    /// Accepts the common spellings emitted by market-data providers
    /// (GICS names, Yahoo-style names, short forms). Returns `None` for
    /// labels that cannot be normalized.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "technology" | "information technology" | "tech" => Some(Self::Technology),
            "communication services" | "communications" | "telecommunications"
            | "telecommunication services" => Some(Self::CommunicationServices),
            "consumer discretionary" | "consumer cyclical" => Some(Self::ConsumerDiscretionary),
            "consumer staples" | "consumer defensive" => Some(Self::ConsumerStaples),
            "energy" => Some(Self::Energy),
            "financials" | "financial services" | "financial" => Some(Self::Financials),
            "healthcare" | "health care" => Some(Self::Healthcare),
            "industrials" => Some(Self::Industrials),
            "materials" | "basic materials" => Some(Self::Materials),
            "real estate" => Some(Self::RealEstate),
            "utilities" => Some(Self::Utilities),
            _ => None,
        }
    }

    /// Returns true if this is a classically defensive sector.
    #[must_use]
    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            Self::ConsumerStaples | Self::Healthcare | Self::Utilities
        )
    }

    /// Returns true if this sector is sensitive to interest rates.
    #[must_use]
    pub fn is_rate_sensitive(&self) -> bool {
        matches!(self, Self::RealEstate | Self::Utilities | Self::Financials)
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_basics() {
        assert_eq!(Sector::Technology.name(), "Technology");
        assert_eq!(Sector::Technology.code(), "TECH");
        assert!(Sector::Utilities.is_defensive());
        assert!(!Sector::Technology.is_defensive());
    }

    #[test]
    fn test_sector_rate_sensitive() {
        assert!(Sector::RealEstate.is_rate_sensitive());
        assert!(Sector::Financials.is_rate_sensitive());
        assert!(!Sector::Energy.is_rate_sensitive());
    }

    #[test]
    fn test_sector_all() {
        let all = Sector::all();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], Sector::Technology);
        assert_eq!(all[11], Sector::Unknown);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(
            Sector::parse_label("Information Technology"),
            Some(Sector::Technology)
        );
        assert_eq!(
            Sector::parse_label("  health care "),
            Some(Sector::Healthcare)
        );
        assert_eq!(
            Sector::parse_label("Consumer Cyclical"),
            Some(Sector::ConsumerDiscretionary)
        );
        assert_eq!(Sector::parse_label("Frontier Markets"), None);
    }

    #[test]
    fn test_sector_display() {
        assert_eq!(format!("{}", Sector::RealEstate), "Real Estate");
        assert_eq!(
            format!("{}", Sector::CommunicationServices),
            "Communication Services"
        );
    }

    #[test]
    fn test_sector_default() {
        assert_eq!(Sector::default(), Sector::Unknown);
    }

    #[test]
    fn test_serde() {
        let sector = Sector::Financials;
        let json = serde_json::to_string(&sector).unwrap();
        let parsed: Sector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sector);
    }
}
