//! Build number accessor.
//!
//! On Android the build number comes from the `ro.build.version.incremental`
//! system property. Everywhere else it is read from a placeholder slot that
//! packaging tooling overwrites in the linked artifact.

pub mod app;
pub mod core;
pub mod ffi;
pub mod inject;
pub mod provider;

pub use provider::{get_build_number, is_placeholder, BuildNumberSource};
