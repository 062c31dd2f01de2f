use std::fs;

use bazi_config::{ConfigError, EngineSettings};
use tempfile::TempDir;

#[test]
fn loads_file_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bazi.toml");
    fs::write(
        &path,
        "[solar_search]\ntolerance_deg = 1e-6\n\n[logging]\nfilter = \"bazi=debug\"\n",
    )
    .unwrap();

    let settings = EngineSettings::load(&path).unwrap();
    assert!((settings.solar_search.tolerance_deg - 1e-6).abs() < 1e-18);
    assert_eq!(settings.solar_search.max_iterations, 50);
    assert_eq!(settings.logging.filter, "bazi=debug");
}

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/bazi.toml");
    let settings = EngineSettings::load(path).unwrap();
    assert_eq!(settings, EngineSettings::default());
}

#[test]
fn invalid_file_reports_toml_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[solar_terms]\nproximity_hours = \"soon\"\n").unwrap();
    assert!(matches!(EngineSettings::load(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn calendar_from_tuned_settings() {
    let settings =
        EngineSettings::from_toml_str("[solar_search]\nmax_iterations = 3\ntolerance_deg = 1e-3\n")
            .unwrap();
    let calendar = settings.solar_term_calendar().unwrap();
    let dates = calendar.all_terms(2024);
    assert_eq!(dates.len(), 24);
}
