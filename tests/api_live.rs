//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use wbflat::{Client, models};

#[test]
fn fetch_small_gdp_range() {
    let cli = Client::default();
    let rows = cli
        .fetch_indicator("FR", "2021", "2022", models::GDP)
        .unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.countryiso3code == "FRA"));
    assert!(rows.iter().all(|r| r.date == "2021" || r.date == "2022"));
    assert!(
        rows.iter()
            .all(|r| r.indicator_code.as_deref() == Some(models::GDP))
    );
}

#[test]
fn preset_matches_explicit_indicator_code() {
    let cli = Client::default();
    let preset = cli.fetch_imports("SN", "2020", "2021", None).unwrap();
    let explicit = cli
        .fetch_indicator("SN", "2020", "2021", models::IMPORTS)
        .unwrap();
    assert_eq!(preset, explicit);
}

#[test]
fn unknown_route_is_an_error() {
    let mut cli = Client::default();
    cli.base_url = "https://api.worldbank.org/v2/nonexistent".into();
    assert!(cli.fetch_raw("FR", "2021", "2022", models::GDP).is_err());
}
