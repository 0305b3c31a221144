//! Integration tests that drive the CLI library against on-disk fixtures.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use salary_cli::config::{AppConfig, InputOverrides};
use salary_cli::{app, render};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_batch_fixture_computes_every_row() {
    let breakdowns = app::run_batch(&fixture("batch.csv"), None).expect("batch should succeed");

    assert_eq!(breakdowns.len(), 3);
    assert_eq!(breakdowns[0].net_salary, dec!(1378534.56));
    // 6,00,000 gross, no NPS: taxable = 6,00,000 - 28,800 - 11,520 - 75,000
    assert_eq!(breakdowns[1].taxable_amount, dec!(484680));
    assert_eq!(breakdowns[1].tax_amount, dec!(4234));
}

#[test]
fn test_batch_export_writes_csv() {
    let output = std::env::temp_dir().join(format!(
        "salary-cli-export-{}.csv",
        std::process::id()
    ));

    app::run_batch(&fixture("batch.csv"), Some(&output)).expect("batch should succeed");

    let text = std::fs::read_to_string(&output).expect("export file should exist");
    std::fs::remove_file(&output).ok();
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("regime,gross_salary,"));
}

#[test]
fn test_batch_missing_file_reports_path() {
    let err = app::run_batch(&fixture("missing.csv"), None).unwrap_err();

    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn test_config_fixture_feeds_single_calculation() {
    let config = AppConfig::load(&fixture("in-hand.toml")).expect("config should load");

    let input = config
        .defaults
        .resolve(InputOverrides::default())
        .expect("defaults are valid");
    let calculation = app::calculate(&input).expect("calculation should succeed");
    let text = render::render_markdown(&calculation.breakdown);

    assert_eq!(config.logging.level.as_deref(), Some("info"));
    assert!(text.contains("| Gross Salary | 12,00,000.00 | 1,00,000.00 |"));
}
