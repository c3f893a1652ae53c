//! Brokerage export format catalog.
//!
//! Each brokerage ships a recognizably shaped export; a [`FormatProfile`]
//! captures that shape as data: substring patterns that identify the format
//! and per-field keyword lists that resolve columns. The catalog order is
//! the detection precedence - the first profile with a matching pattern
//! wins, and the generic profile is the fallback, never a detection target.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A semantic field the column mapper resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldingField {
    /// Ticker symbol column.
    Ticker,
    /// Share count column.
    Shares,
    /// Per-share price column.
    Price,
    /// Position market value column.
    Value,
    /// Position cost basis column.
    CostBasis,
}

impl HoldingField {
    /// Returns a human-readable field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::Shares => "shares",
            Self::Price => "price",
            Self::Value => "value",
            Self::CostBasis => "cost basis",
        }
    }
}

impl std::fmt::Display for HoldingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-field header keyword lists for one export format.
///
/// A header cell resolves a field when its lowercase text contains any of
/// the field's keywords.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldKeywords {
    /// Keywords identifying the ticker column.
    pub ticker: Vec<String>,
    /// Keywords identifying the shares column.
    pub shares: Vec<String>,
    /// Keywords identifying the price column.
    pub price: Vec<String>,
    /// Keywords identifying the market value column.
    pub value: Vec<String>,
    /// Keywords identifying the cost basis column.
    pub cost_basis: Vec<String>,
}

impl FieldKeywords {
    /// Returns the keyword list for a field.
    #[must_use]
    pub fn for_field(&self, field: HoldingField) -> &[String] {
        match field {
            HoldingField::Ticker => &self.ticker,
            HoldingField::Shares => &self.shares,
            HoldingField::Price => &self.price,
            HoldingField::Value => &self.value,
            HoldingField::CostBasis => &self.cost_basis,
        }
    }
}

/// A named entry in the brokerage export format catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatProfile {
    /// Stable identifier (also the `detected_format` value in results).
    pub id: String,

    /// Display name of the brokerage.
    pub name: String,

    /// Case-insensitive substrings tested against raw content during
    /// detection. Empty for the generic fallback.
    pub detection_patterns: Vec<String>,

    /// Column-resolution keyword lists.
    pub keywords: FieldKeywords,
}

impl FormatProfile {
    /// Creates a new profile with empty patterns and keywords.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detection_patterns: Vec::new(),
            keywords: FieldKeywords::default(),
        }
    }

    /// Sets the detection patterns.
    #[must_use]
    pub fn with_patterns(mut self, patterns: &[&str]) -> Self {
        self.detection_patterns = to_strings(patterns);
        self
    }

    /// Sets the ticker keywords.
    #[must_use]
    pub fn with_ticker_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.ticker = to_strings(keywords);
        self
    }

    /// Sets the shares keywords.
    #[must_use]
    pub fn with_shares_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.shares = to_strings(keywords);
        self
    }

    /// Sets the price keywords.
    #[must_use]
    pub fn with_price_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.price = to_strings(keywords);
        self
    }

    /// Sets the market value keywords.
    #[must_use]
    pub fn with_value_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.value = to_strings(keywords);
        self
    }

    /// Sets the cost basis keywords.
    #[must_use]
    pub fn with_cost_basis_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.cost_basis = to_strings(keywords);
        self
    }

    /// Returns true if any detection pattern occurs in the lowercased
    /// content. Profiles without patterns never match.
    #[must_use]
    pub fn matches_content(&self, lower_content: &str) -> bool {
        self.detection_patterns
            .iter()
            .any(|pattern| lower_content.contains(pattern.as_str()))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The ordered catalog of known export formats plus the generic fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatCatalog {
    /// Catalog revision, bumped whenever profiles change.
    pub version: String,

    profiles: Vec<FormatProfile>,
    generic: FormatProfile,
}

impl FormatCatalog {
    /// Creates a catalog from an ordered profile list and a fallback.
    #[must_use]
    pub fn new(
        version: impl Into<String>,
        profiles: Vec<FormatProfile>,
        generic: FormatProfile,
    ) -> Self {
        Self {
            version: version.into(),
            profiles,
            generic,
        }
    }

    /// Returns the builtin catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: Lazy<FormatCatalog> = Lazy::new(|| {
            FormatCatalog::new(
                "2025.2",
                vec![
                    profiles::fidelity(),
                    profiles::schwab(),
                    profiles::vanguard(),
                    profiles::etrade(),
                    profiles::merrill(),
                    profiles::robinhood(),
                    profiles::interactive_brokers(),
                    profiles::webull(),
                ],
                profiles::generic(),
            )
        });
        &BUILTIN
    }

    /// Detects the export format of raw content.
    ///
    /// Profiles are tested in catalog order; the first one with a matching
    /// detection pattern wins. No match resolves to the generic profile.
    #[must_use]
    pub fn detect(&self, content: &str) -> &FormatProfile {
        let lower = content.to_lowercase();
        self.profiles
            .iter()
            .find(|profile| profile.matches_content(&lower))
            .unwrap_or(&self.generic)
    }

    /// Looks up a profile by id, the generic fallback included.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&FormatProfile> {
        if self.generic.id == id {
            return Some(&self.generic);
        }
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Returns the generic fallback profile.
    #[must_use]
    pub fn generic(&self) -> &FormatProfile {
        &self.generic
    }

    /// Returns the ordered detection profiles.
    #[must_use]
    pub fn profiles(&self) -> &[FormatProfile] {
        &self.profiles
    }
}

/// Builtin export profiles in detection-precedence order.
pub mod profiles {
    use super::FormatProfile;

    /// Fidelity positions export.
    #[must_use]
    pub fn fidelity() -> FormatProfile {
        FormatProfile::new("fidelity", "Fidelity")
            .with_patterns(&["fidelity", "percent of account", "average cost basis"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["quantity"])
            .with_price_keywords(&["last price"])
            .with_value_keywords(&["current value"])
            .with_cost_basis_keywords(&["cost basis", "average cost"])
    }

    /// Charles Schwab positions export.
    #[must_use]
    pub fn schwab() -> FormatProfile {
        FormatProfile::new("schwab", "Charles Schwab")
            .with_patterns(&["schwab", "account total"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["qty", "quantity"])
            .with_price_keywords(&["price"])
            .with_value_keywords(&["mkt val", "market value"])
            .with_cost_basis_keywords(&["cost basis"])
    }

    /// Vanguard holdings export.
    #[must_use]
    pub fn vanguard() -> FormatProfile {
        FormatProfile::new("vanguard", "Vanguard")
            .with_patterns(&["vanguard", "investment name"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["shares"])
            .with_price_keywords(&["share price"])
            .with_value_keywords(&["total value"])
            .with_cost_basis_keywords(&["cost basis"])
    }

    /// E*TRADE portfolio download.
    #[must_use]
    pub fn etrade() -> FormatProfile {
        FormatProfile::new("etrade", "E*TRADE")
            .with_patterns(&["etrade", "e*trade", "net account value"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["quantity"])
            .with_price_keywords(&["last price", "price paid"])
            .with_value_keywords(&["value"])
            .with_cost_basis_keywords(&["cost basis"])
    }

    /// Merrill holdings export.
    #[must_use]
    pub fn merrill() -> FormatProfile {
        FormatProfile::new("merrill", "Merrill")
            .with_patterns(&["merrill", "cma account"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["quantity"])
            .with_price_keywords(&["price"])
            .with_value_keywords(&["value"])
            .with_cost_basis_keywords(&["cost basis", "unit cost"])
    }

    /// Robinhood account report.
    #[must_use]
    pub fn robinhood() -> FormatProfile {
        FormatProfile::new("robinhood", "Robinhood")
            .with_patterns(&["robinhood"])
            .with_ticker_keywords(&["symbol", "instrument"])
            .with_shares_keywords(&["shares", "quantity"])
            .with_price_keywords(&["price", "average cost"])
            .with_value_keywords(&["equity", "value"])
            .with_cost_basis_keywords(&["average cost"])
    }

    /// Interactive Brokers flex/portfolio export.
    #[must_use]
    pub fn interactive_brokers() -> FormatProfile {
        FormatProfile::new("ibkr", "Interactive Brokers")
            .with_patterns(&["interactive brokers", "ibkr"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["quantity", "position"])
            .with_price_keywords(&["close price", "cost price"])
            .with_value_keywords(&["value"])
            .with_cost_basis_keywords(&["cost basis"])
    }

    /// Webull positions export.
    #[must_use]
    pub fn webull() -> FormatProfile {
        FormatProfile::new("webull", "Webull")
            .with_patterns(&["webull"])
            .with_ticker_keywords(&["symbol"])
            .with_shares_keywords(&["quantity", "qty"])
            .with_price_keywords(&["avg cost", "last price"])
            .with_value_keywords(&["market value"])
            .with_cost_basis_keywords(&["total cost"])
    }

    /// Generic fallback for unrecognized exports. Carries no detection
    /// patterns; it is the resolution of "no profile matched".
    #[must_use]
    pub fn generic() -> FormatProfile {
        FormatProfile::new("generic", "Generic")
            .with_ticker_keywords(&["symbol", "ticker", "security", "stock", "holding"])
            .with_shares_keywords(&["shares", "quantity", "qty", "units"])
            .with_price_keywords(&["price", "last", "avg cost", "average cost"])
            .with_value_keywords(&["value", "market value", "balance", "equity"])
            .with_cost_basis_keywords(&["cost basis", "total cost", "basis", "book value"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = FormatCatalog::builtin();
        assert_eq!(catalog.profiles().len(), 8);
        assert_eq!(catalog.generic().id, "generic");
        assert!(catalog.generic().detection_patterns.is_empty());
    }

    #[test]
    fn test_detect_schwab() {
        let catalog = FormatCatalog::builtin();
        let content = "Positions for Schwab account\nSymbol,Qty,Price\nAccount Total,,\n";
        assert_eq!(catalog.detect(content).id, "schwab");
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let catalog = FormatCatalog::builtin();
        assert_eq!(catalog.detect("FIDELITY export").id, "fidelity");
    }

    #[test]
    fn test_detect_falls_back_to_generic() {
        let catalog = FormatCatalog::builtin();
        assert_eq!(catalog.detect("Symbol,Shares\nNVDA,50\n").id, "generic");
    }

    #[test]
    fn test_detection_precedence_is_catalog_order() {
        // Content matching two profiles resolves to the earlier one.
        let catalog = FormatCatalog::builtin();
        let content = "robinhood and webull both appear here";
        assert_eq!(catalog.detect(content).id, "robinhood");
    }

    #[test]
    fn test_find_includes_generic() {
        let catalog = FormatCatalog::builtin();
        assert!(catalog.find("schwab").is_some());
        assert!(catalog.find("generic").is_some());
        assert!(catalog.find("acme-broker").is_none());
    }

    #[test]
    fn test_profile_without_patterns_never_matches() {
        let profile = FormatProfile::new("x", "X");
        assert!(!profile.matches_content("anything"));
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = profiles::schwab();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: FormatProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, "schwab");
        assert_eq!(parsed.detection_patterns, profile.detection_patterns);
    }

    #[test]
    fn test_field_keywords_lookup() {
        let profile = profiles::generic();
        assert!(profile
            .keywords
            .for_field(HoldingField::Ticker)
            .iter()
            .any(|k| k == "symbol"));
        assert!(profile
            .keywords
            .for_field(HoldingField::CostBasis)
            .iter()
            .any(|k| k == "cost basis"));
    }
}
