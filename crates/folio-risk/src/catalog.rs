//! Builtin risk factor catalog.
//!
//! Factors are data: adding or retuning one is a catalog edit, not an
//! engine change. Hedge keywords feed the downstream hedge-matching
//! collaborator and never influence scoring.

use folio_core::Sector;

use crate::factor::{
    RiskCategory, RiskFactor, SeverityCalc, Thresholds, Trigger, TriggerCriteria,
};

/// Returns the builtin factors in evaluation order.
#[must_use]
pub fn builtin_factors() -> Vec<RiskFactor> {
    vec![
        single_stock_concentration(),
        sector_concentration(),
        china_adr_exposure(),
        semiconductor_cycle(),
        mega_cap_regulatory(),
        crypto_linked_equities(),
        rate_sensitive_sectors(),
        biotech_binary_events(),
        energy_transition(),
    ]
}

/// Largest single position as a share of portfolio value.
#[must_use]
pub fn single_stock_concentration() -> RiskFactor {
    RiskFactor::new(
        "single-stock-concentration",
        "Single-Stock Concentration",
        RiskCategory::Concentration,
        Trigger::LargestPosition,
        SeverityCalc::Concentration,
        Thresholds::new(20.0, 30.0, 40.0, 55.0),
    )
    .with_description(
        "A single position dominates the portfolio; idiosyncratic news in one \
         name moves the whole account.",
    )
    .with_hedge_keywords(&["put options", "collar", "covered call"])
}

/// Heaviest known sector as a share of portfolio value.
#[must_use]
pub fn sector_concentration() -> RiskFactor {
    RiskFactor::new(
        "sector-concentration",
        "Sector Concentration",
        RiskCategory::Concentration,
        Trigger::TopSector,
        SeverityCalc::Concentration,
        Thresholds::new(35.0, 45.0, 60.0, 75.0),
    )
    .with_description(
        "Holdings cluster in one sector; a sector-wide drawdown hits most of \
         the portfolio at once.",
    )
    .with_hedge_keywords(&["sector ETF", "inverse sector", "diversification"])
}

/// US-listed China ADRs and China-revenue names.
#[must_use]
pub fn china_adr_exposure() -> RiskFactor {
    RiskFactor::new(
        "china-adr-exposure",
        "China ADR Exposure",
        RiskCategory::Geopolitical,
        Trigger::Criteria(
            TriggerCriteria::new()
                .with_tickers(&["BABA", "JD", "PDD", "BIDU", "NIO", "LI", "XPEV", "NTES", "TME"])
                .with_keywords(&["alibaba", "tencent", "china"]),
        ),
        SeverityCalc::ExposurePct,
        Thresholds::new(5.0, 12.0, 25.0, 40.0),
    )
    .with_description(
        "Exposure to delisting, VIE-structure, and policy risk in US-listed \
         Chinese equities.",
    )
    .with_hedge_keywords(&["china delisting", "taiwan strait", "tariffs"])
}

/// Semiconductor names that trade as one cycle.
#[must_use]
pub fn semiconductor_cycle() -> RiskFactor {
    RiskFactor::new(
        "semiconductor-cycle",
        "Semiconductor Cycle Concentration",
        RiskCategory::Correlation,
        Trigger::Criteria(
            TriggerCriteria::new()
                .with_tickers(&["NVDA", "AMD", "INTC", "TSM", "AVGO", "QCOM", "MU", "AMAT", "ASML"])
                .with_industries(&["Semiconductors", "Semiconductor Equipment"]),
        ),
        SeverityCalc::ExposurePct,
        Thresholds::new(15.0, 25.0, 40.0, 60.0),
    )
    .with_description(
        "Chip names rise and fall with one capex cycle; apparent \
         diversification across them is thinner than it looks.",
    )
    .with_hedge_keywords(&["semiconductor downturn", "chip demand", "export controls"])
}

/// Mega-cap platforms under active antitrust scrutiny.
#[must_use]
pub fn mega_cap_regulatory() -> RiskFactor {
    RiskFactor::new(
        "mega-cap-regulatory",
        "Mega-Cap Regulatory Overhang",
        RiskCategory::Regulatory,
        Trigger::Criteria(
            TriggerCriteria::new()
                .with_tickers(&["AAPL", "MSFT", "GOOGL", "GOOG", "AMZN", "META"])
                .with_keywords(&["antitrust"]),
        ),
        SeverityCalc::ExposurePct,
        Thresholds::new(20.0, 35.0, 50.0, 70.0),
    )
    .with_description(
        "Concentrated exposure to platforms facing antitrust and app-store \
         remedy risk in the US and EU.",
    )
    .with_hedge_keywords(&["antitrust ruling", "big tech breakup", "app store"])
}

/// Equities that proxy crypto prices.
#[must_use]
pub fn crypto_linked_equities() -> RiskFactor {
    RiskFactor::new(
        "crypto-linked-equities",
        "Crypto-Linked Equities",
        RiskCategory::Correlation,
        Trigger::Criteria(
            TriggerCriteria::new()
                .with_tickers(&["COIN", "MSTR", "RIOT", "MARA", "HUT", "HOOD"])
                .with_keywords(&["bitcoin", "crypto"]),
        ),
        SeverityCalc::ExposurePct,
        Thresholds::new(5.0, 10.0, 20.0, 35.0),
    )
    .with_description(
        "These names track crypto prices with extra leverage; a coin drawdown \
         lands on the equity side amplified.",
    )
    .with_hedge_keywords(&["bitcoin price", "crypto regulation", "etf flows"])
}

/// Sectors that reprice when rates move.
#[must_use]
pub fn rate_sensitive_sectors() -> RiskFactor {
    RiskFactor::new(
        "rate-sensitive-sectors",
        "Rate-Sensitive Sectors",
        RiskCategory::Event,
        Trigger::Criteria(
            TriggerCriteria::new().with_sectors(&[
                Sector::RealEstate,
                Sector::Utilities,
                Sector::Financials,
            ]),
        ),
        SeverityCalc::ExposurePct,
        Thresholds::new(25.0, 40.0, 55.0, 70.0),
    )
    .with_description(
        "Real estate, utilities, and financials reprice together on rate \
         surprises.",
    )
    .with_hedge_keywords(&["fed funds", "rate decision", "treasury yields"])
}

/// Many small biotech positions with binary readouts.
///
/// Count-scored: the risk is how many lottery tickets are held, not their
/// combined weight.
#[must_use]
pub fn biotech_binary_events() -> RiskFactor {
    RiskFactor::new(
        "biotech-binary-events",
        "Biotech Binary Events",
        RiskCategory::Event,
        Trigger::Criteria(
            TriggerCriteria::new()
                .with_industries(&["Biotechnology"])
                .with_keywords(&["therapeutics", "biosciences", "pharma"]),
        ),
        SeverityCalc::Count,
        Thresholds::new(10.0, 20.0, 35.0, 50.0),
    )
    .with_description(
        "Clinical-stage names gap on trial readouts and FDA decisions; \
         position counts matter more than weights.",
    )
    .with_hedge_keywords(&["fda approval", "clinical trial", "phase 3"])
}

/// Fossil-fuel producers exposed to transition policy.
#[must_use]
pub fn energy_transition() -> RiskFactor {
    RiskFactor::new(
        "energy-transition",
        "Energy Transition Exposure",
        RiskCategory::Regulatory,
        Trigger::Criteria(
            TriggerCriteria::new()
                .with_sectors(&[Sector::Energy])
                .with_keywords(&["petroleum", "coal"]),
        ),
        SeverityCalc::ExposurePct,
        Thresholds::new(15.0, 30.0, 45.0, 65.0),
    )
    .with_description(
        "Producers carry stranded-asset and carbon-policy risk as transition \
         rules tighten.",
    )
    .with_hedge_keywords(&["carbon tax", "clean energy", "oil demand"])
}
