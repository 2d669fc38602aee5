//! TOML configuration tests

use crate::common::write_fake_artifact;
use buildversion::app::cli::args::Args;
use buildversion::app::cli::config::{Config, ConfigError};
use buildversion::app::commands::execute;
use buildversion::inject::locate_in_file;
use buildversion::provider::PLACEHOLDER_CAPACITY;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_supplies_value_file_and_from() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("app");
    let value_file = dir.path().join("build_number.txt");
    let config_path = dir.path().join("buildversion.toml");
    let offset = write_fake_artifact(&artifact);
    fs::write(&value_file, "eng.user.20240101\n").unwrap();
    fs::write(
        &config_path,
        format!(
            "[inject]\nfrom = \"SOONG BUILD NUMBER PLACEHOLDER\"\nvalue_file = {:?}\n",
            value_file.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::discover(Some(&config_path)).unwrap();
    let args = Args::try_parse_from([
        "buildversion",
        "inject",
        "-i",
        artifact.to_str().unwrap(),
        "-o",
        artifact.to_str().unwrap(),
    ])
    .unwrap();

    execute(&args.command(), &config).unwrap();
    assert_eq!(
        locate_in_file(&artifact, "eng.user.20240101", PLACEHOLDER_CAPACITY).unwrap(),
        offset
    );
}

#[test]
fn test_flag_value_overrides_config_value_file() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("app");
    let config_path = dir.path().join("buildversion.toml");
    write_fake_artifact(&artifact);
    fs::write(
        &config_path,
        "[inject]\nvalue_file = \"does/not/exist.txt\"\n",
    )
    .unwrap();

    let config = Config::discover(Some(&config_path)).unwrap();
    let args = Args::try_parse_from([
        "buildversion",
        "inject",
        "-i",
        artifact.to_str().unwrap(),
        "-o",
        artifact.to_str().unwrap(),
        "-v",
        "1234567",
    ])
    .unwrap();

    execute(&args.command(), &config).unwrap();
    assert!(locate_in_file(&artifact, "1234567", PLACEHOLDER_CAPACITY).is_ok());
}

#[test]
fn test_malformed_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[logging\nlevel = ").unwrap();

    let err = Config::discover(Some(&config_path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}
