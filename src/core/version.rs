//! Build metadata and C ABI version accessors.
//! This includes the generated version.rs from the build script into a core module,
//! providing a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the ABI version string from build script into u32.
/// Falls back to a stable default if parsing fails.
pub fn get_abi_version() -> u32 {
    ABI_VERSION.parse().unwrap_or(1)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Multi-line version text for `--version`
pub fn long_version() -> String {
    format!(
        "{}\nabi: {}\nbuilt: {}\ncommit: {}",
        env!("CARGO_PKG_VERSION"),
        get_abi_version(),
        build_time(),
        git_hash()
    )
}
