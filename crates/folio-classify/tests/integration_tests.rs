//! End-to-end classification from snapshots.

use rust_decimal_macros::dec;

use folio_classify::{classify, PortfolioMetrics, RiskProfile};
use folio_core::{EnrichedHolding, PortfolioSnapshot, Sector};

#[test]
fn concentrated_tech_snapshot_classifies_speculative() {
    let snapshot = PortfolioSnapshot::builder()
        .add_holding(EnrichedHolding::new("NVDA", dec!(55_000)).with_sector(Sector::Technology))
        .add_holding(EnrichedHolding::new("AMD", dec!(25_000)).with_sector(Sector::Technology))
        .add_holding(EnrichedHolding::new("PLTR", dec!(20_000)).with_sector(Sector::Technology))
        .build()
        .unwrap();

    let metrics = PortfolioMetrics::from_snapshot(&snapshot);
    let result = classify(&metrics);

    // top 55 -> +4, sector 100 -> +3, 3 holdings -> +3, tech 100 -> +2
    assert_eq!(result.profile, RiskProfile::Speculative);
    assert!(result
        .warnings
        .contains(&"extremely concentrated in a single position".to_string()));
    assert!(result
        .warnings
        .contains(&"heavy technology sector exposure".to_string()));
}

#[test]
fn diversified_snapshot_classifies_conservative() {
    let sectors = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Financials,
        Sector::ConsumerStaples,
        Sector::Industrials,
        Sector::Energy,
        Sector::Utilities,
        Sector::Materials,
        Sector::RealEstate,
        Sector::CommunicationServices,
        Sector::ConsumerDiscretionary,
        Sector::Healthcare,
        Sector::Financials,
        Sector::Industrials,
    ];
    let mut builder = PortfolioSnapshot::builder();
    for (i, sector) in sectors.iter().enumerate() {
        builder = builder
            .add_holding(EnrichedHolding::new(format!("T{i}"), dec!(7_000)).with_sector(*sector));
    }
    let snapshot = builder.build().unwrap();

    let result = classify(&PortfolioMetrics::from_snapshot(&snapshot));

    assert_eq!(result.profile, RiskProfile::Conservative);
    assert!(result.warnings.is_empty());
}

#[test]
fn missing_sector_data_does_not_inflate_concentration() {
    // Nine positions with no sector data and one known tech name: sector
    // concentration must come from the known 10%, not the unknown 90%.
    let mut builder = PortfolioSnapshot::builder()
        .add_holding(EnrichedHolding::new("NVDA", dec!(10_000)).with_sector(Sector::Technology));
    for i in 0..9 {
        builder = builder.add_holding(EnrichedHolding::new(format!("U{i}"), dec!(10_000)));
    }
    let snapshot = builder.build().unwrap();

    let metrics = PortfolioMetrics::from_snapshot(&snapshot);
    assert!((metrics.sector_concentration - 10.0).abs() < 1e-9);

    let result = classify(&metrics);
    assert_eq!(result.profile, RiskProfile::Conservative);
}

#[test]
fn similar_archetypes_come_back_in_catalog_order() {
    let metrics = PortfolioMetrics::new(22.0, 10.0, 11, 15.0);
    let result = classify(&metrics);

    // Both diversified archetypes qualify; dividend-income precedes
    // balanced-blue-chip in the catalog.
    assert_eq!(
        result.similar_to,
        vec![
            "dividend-income".to_string(),
            "balanced-blue-chip".to_string()
        ]
    );
}
