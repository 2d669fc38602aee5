//! Tests that run the built `buildversion` binary
//!
//! The binary links its own placeholder slot, so injecting into a copy of it
//! and running the copy exercises the whole packaging path.

use crate::common::write_fake_artifact;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const BINARY: &str = env!("CARGO_BIN_EXE_buildversion");

fn run(binary: &Path, args: &[&str]) -> Output {
    Command::new(binary)
        .args(["--log-level", "off"])
        .args(args)
        .output()
        .expect("failed to run buildversion")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[cfg(not(target_os = "android"))]
#[test]
fn test_untouched_binary_reports_sentinel() {
    let output = run(Path::new(BINARY), &["show"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "SOONG BUILD NUMBER PLACEHOLDER");
}

#[cfg(all(unix, not(target_os = "android")))]
#[test]
fn test_injected_binary_reports_new_build_number() {
    let dir = TempDir::new().unwrap();
    let injected = dir.path().join("buildversion-injected");

    let output = run(
        Path::new(BINARY),
        &[
            "inject",
            "-i",
            BINARY,
            "-o",
            injected.to_str().unwrap(),
            "-v",
            "eng.user.20240101",
        ],
    );
    assert!(
        output.status.success(),
        "inject failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = run(&injected, &["show"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "eng.user.20240101");

    // The original binary is untouched
    assert_eq!(
        stdout(&run(Path::new(BINARY), &[])),
        "SOONG BUILD NUMBER PLACEHOLDER"
    );
}

#[test]
fn test_locate_reports_offset() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("libfoo.so");
    let offset = write_fake_artifact(&artifact);

    let output = run(
        Path::new(BINARY),
        &["locate", "-i", artifact.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{:#x}", offset));
}

#[test]
fn test_failed_injection_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("no-slot");
    std::fs::write(&artifact, b"nothing to see").unwrap();

    let output = run(
        Path::new(BINARY),
        &[
            "inject",
            "-i",
            artifact.to_str().unwrap(),
            "-o",
            artifact.to_str().unwrap(),
            "-v",
            "1",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read(&artifact).unwrap(), b"nothing to see");
}
