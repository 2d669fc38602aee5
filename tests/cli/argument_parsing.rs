//! CLI argument parsing tests

use buildversion::app::cli::args::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_no_subcommand_defaults_to_show() {
    let args = Args::try_parse_from(["buildversion"]).unwrap();
    assert_eq!(args.command, None);
    assert_eq!(args.command(), Command::Show);
}

#[test]
fn test_global_flags_before_subcommand() {
    let args = Args::try_parse_from([
        "buildversion",
        "--log-level",
        "debug",
        "--log-format=json",
        "--log-file",
        "/tmp/bv.log",
        "--no-color",
        "show",
    ])
    .unwrap();

    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
    assert_eq!(args.log_file, Some(PathBuf::from("/tmp/bv.log")));
    assert!(args.no_color);
    assert!(!args.color);
    assert_eq!(args.command(), Command::Show);
}

#[test]
fn test_inject_arguments() {
    let args = Args::try_parse_from([
        "buildversion",
        "inject",
        "-i",
        "out/app.unstripped",
        "-o",
        "out/app",
        "--from",
        "SOONG BUILD NUMBER PLACEHOLDER",
        "-v",
        "eng.user.20240101",
    ])
    .unwrap();

    assert_eq!(
        args.command(),
        Command::Inject {
            input: PathBuf::from("out/app.unstripped"),
            output: PathBuf::from("out/app"),
            from: Some("SOONG BUILD NUMBER PLACEHOLDER".to_string()),
            value: Some("eng.user.20240101".to_string()),
            value_file: None,
        }
    );
}

#[test]
fn test_value_and_value_file_conflict() {
    let result = Args::try_parse_from([
        "buildversion",
        "inject",
        "-i",
        "a",
        "-o",
        "b",
        "-v",
        "1",
        "--value-file",
        "build_number.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_color_flags_conflict() {
    assert!(Args::try_parse_from(["buildversion", "--color", "--no-color"]).is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Args::try_parse_from(["buildversion", "--log-level", "loud"]).is_err());
}

#[test]
fn test_locate_defaults() {
    let args = Args::try_parse_from(["buildversion", "locate", "-i", "libfoo.so"]).unwrap();
    assert_eq!(
        args.command(),
        Command::Locate {
            input: PathBuf::from("libfoo.so"),
            value: None,
        }
    );
}

#[test]
fn test_inject_requires_input_and_output() {
    assert!(Args::try_parse_from(["buildversion", "inject", "-v", "1"]).is_err());
}
