//! Writes `version.rs` into OUT_DIR: the C ABI version from
//! `[package.metadata] abi_version`, the build timestamp and the short commit.
//!
//! The file is rewritten on every run. Cargo only reruns the script when one of
//! the watched inputs changes, and the commit can change without touching
//! Cargo.toml.

use chrono::Utc;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let manifest = manifest_dir.join("Cargo.toml");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", manifest.display());
    for watched in git_watch_list(&manifest_dir) {
        println!("cargo:rerun-if-changed={}", watched.display());
    }

    let generated = format!(
        "pub const ABI_VERSION: &str = {:?};\n\
         pub const BUILD_TIME: &str = {:?};\n\
         pub const GIT_HASH: &str = {:?};\n",
        abi_version(&manifest),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        short_commit(&manifest_dir),
    );
    fs::write(out_dir.join("version.rs"), generated).unwrap();
}

/// `[package.metadata] abi_version`, or "unknown" when absent
fn abi_version(manifest: &Path) -> String {
    fs::read_to_string(manifest)
        .ok()
        .and_then(|text| text.parse::<toml::Table>().ok())
        .and_then(|table| {
            table
                .get("package")?
                .get("metadata")?
                .get("abi_version")?
                .as_integer()
        })
        .map(|version| version.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn git(manifest_dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(manifest_dir)
        .args(args)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn short_commit(manifest_dir: &Path) -> String {
    git(manifest_dir, &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| UNKNOWN.to_string())
}

/// HEAD, the ref it points at, and packed-refs. Without a repository, the
/// would-be HEAD path is watched so `git init` triggers a rerun.
fn git_watch_list(manifest_dir: &Path) -> Vec<PathBuf> {
    let Some(git_dir) = git(manifest_dir, &["rev-parse", "--absolute-git-dir"]) else {
        return vec![manifest_dir.join(".git").join("HEAD")];
    };
    let git_dir = PathBuf::from(git_dir);

    let mut watched = vec![git_dir.join("HEAD"), git_dir.join("packed-refs")];
    if let Some(reference) = git(manifest_dir, &["symbolic-ref", "-q", "HEAD"]) {
        watched.push(git_dir.join(reference));
    }
    watched
}
