//! CLI Integration Test Modules

pub mod argument_parsing;
pub mod binary;
pub mod config_file;
