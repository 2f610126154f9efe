// tests/unit_config.rs
use l321_core::config::{io, Config, Overrides};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_defaults() {
    let c = Config::default();
    assert_eq!(c.input_dir, PathBuf::from("graphs"));
    assert_eq!(c.summary_dir, PathBuf::from("results"));
    assert_eq!(c.labeling_dir, PathBuf::from("labelings"));
    assert_eq!(c.extension, "txt");
    assert_eq!(c.workers, 1);
    assert!(c.tighten_bounds);
    assert!(c.greedy_fallback);
    assert_eq!(c.time_limit(), Duration::from_secs(15 * 60));
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let c = io::parse_toml("input_dir = \"cycles\"\ntime_limit_minutes = 0.5\n").unwrap();
    assert_eq!(c.input_dir, PathBuf::from("cycles"));
    assert_eq!(c.time_limit(), Duration::from_secs(30));
    assert_eq!(c.summary_dir, PathBuf::from("results"));
}

#[test]
fn test_invalid_toml() {
    assert!(io::parse_toml("workers = \"many\"").is_err());
}

#[test]
fn test_load_explicit_file() {
    let d = tempfile::tempdir().unwrap();
    let p = d.path().join("custom.toml");
    fs::write(&p, "workers = 4\ngreedy_fallback = false\n").unwrap();
    let c = Config::load(Some(p.as_path())).unwrap();
    assert_eq!(c.workers, 4);
    assert!(!c.greedy_fallback);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let d = tempfile::tempdir().unwrap();
    assert!(Config::load(Some(d.path().join("nope.toml").as_path())).is_err());
}

#[test]
fn test_load_rejects_invalid_values() {
    let d = tempfile::tempdir().unwrap();
    let p = d.path().join("bad.toml");
    fs::write(&p, "workers = 0\n").unwrap();
    assert!(Config::load(Some(p.as_path())).is_err());
}

#[test]
fn test_validate() {
    let mut c = Config::new();
    assert!(c.validate().is_ok());
    c.time_limit_minutes = -1.0;
    assert!(c.validate().is_err());
    c.time_limit_minutes = f64::NAN;
    assert!(c.validate().is_err());
    c.time_limit_minutes = 1.0;
    c.extension = ".".to_string();
    assert!(c.validate().is_err());
}

#[test]
fn test_overrides_win() {
    let c = Config::new().with_overrides(Overrides {
        input_dir: Some(PathBuf::from("in")),
        labeling_dir: Some(PathBuf::from("lab")),
        time_limit_minutes: Some(2.0),
        workers: Some(3),
        no_tighten: true,
        no_fallback: true,
        ..Overrides::default()
    });
    assert_eq!(c.input_dir, PathBuf::from("in"));
    assert_eq!(c.summary_dir, PathBuf::from("results"));
    assert_eq!(c.labeling_dir, PathBuf::from("lab"));
    assert_eq!(c.workers, 3);
    assert!(!c.build_options().tighten_bounds);
    assert!(!c.solve_options().greedy_fallback);
    assert_eq!(c.solve_options().time_limit, Duration::from_secs(120));
}

#[test]
fn test_to_toml_parses_back() {
    let mut c = Config::new();
    c.workers = 2;
    let text = c.to_toml().unwrap();
    assert_eq!(io::parse_toml(&text).unwrap(), c);
}
