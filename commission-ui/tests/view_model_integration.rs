//! Integration tests driving the view model the way the window does, plus
//! loading the on-disk config fixture.

use std::path::{Path, PathBuf};

use commission_ui::{
    app,
    config::AppConfig,
    state::{Action, ViewModel, reduce, submit},
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("commission.toml")
}

#[test]
fn invalid_input_leaves_displayed_rows_unchanged() {
    let shown = submit(&ViewModel::default(), "40000").expect("default target is valid");
    let before = shown.clone();

    assert!(submit(&shown, "abc").is_err());
    assert_eq!(shown, before);

    let mut displayed = shown;
    assert!(displayed.submit_in_place("abc").is_err());
    assert_eq!(displayed, before);
    assert_eq!(displayed.sales_rows[1].range_label, "R$ 20,000.00 – R$ 32,000.00");
}

#[test]
fn error_message_matches_dialog_text() {
    let err = reduce(&ViewModel::new("abc"), Action::Calculate).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Enter the target in numeric format (e.g., 40000 or 40.000,00)."
    );
}

#[test]
fn decimal_comma_and_plain_input_render_identically() {
    let plain = submit(&ViewModel::default(), "40000").unwrap();
    let comma = submit(&ViewModel::default(), "40.000,00").unwrap();

    assert_eq!(plain.sales_rows, comma.sales_rows);
    assert_eq!(plain.average_units_rows, comma.average_units_rows);
}

#[test]
fn zero_target_renders_zero_rows() {
    let state = submit(&ViewModel::default(), "0").unwrap();

    assert!(state.sales_rows.iter().all(|r| r.range_label.starts_with("R$ 0.00")
        || r.range_label == "≥ R$ 0.00"));
    assert!(state
        .average_units_rows
        .iter()
        .all(|r| r.earnings_at_target_label == "R$ 0.00"));
}

#[test]
fn fixture_config_loads() {
    let config = AppConfig::load(Some(&fixture_path())).expect("fixture config should load");

    assert_eq!(config.default_target, "40.000,00");
    assert_eq!(config.window_width, 1200.0);
    assert_eq!(config.logging.level.as_deref(), Some("warn"));
    assert!(!config.logging.stdout);
}

#[test]
fn fixture_default_target_builds_report() {
    let config = AppConfig::load(Some(&fixture_path())).unwrap();
    let report = app::build_report(&config.default_target).unwrap();

    assert_eq!(report.target.value(), dec!(40000));
    assert_eq!(report.average_units_rows[1].earnings_at_target_label, "R$ 20.00");
}
