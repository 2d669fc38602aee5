//! Command-line arguments
//!
//! Global flags come before the subcommand; each one overrides the matching
//! config file entry.

use crate::core::version::long_version;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "buildversion")]
#[command(about = "Read the build number, or inject one into a linked artifact")]
#[command(version, long_version = long_version())]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force coloured log output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable coloured log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        value_parser = ["text", "ext", "json"]
    )]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the build number of this binary (the default)
    Show,

    /// Overwrite the placeholder slot of an artifact with a build number
    Inject {
        /// Artifact to read
        #[arg(short = 'i', long = "input", value_name = "FILE")]
        input: PathBuf,

        /// Where to write the injected artifact (may equal the input)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: PathBuf,

        /// Value the slot holds now [default: the placeholder sentinel]
        #[arg(long = "from", value_name = "TEXT")]
        from: Option<String>,

        /// Build number to inject
        #[arg(
            short = 'v',
            long = "value",
            value_name = "TEXT",
            conflicts_with = "value_file"
        )]
        value: Option<String>,

        /// Read the build number to inject from a file
        #[arg(long = "value-file", value_name = "FILE")]
        value_file: Option<PathBuf>,
    },

    /// Print the offset of the slot holding a value in an artifact
    Locate {
        /// Artifact to search
        #[arg(short = 'i', long = "input", value_name = "FILE")]
        input: PathBuf,

        /// Value the slot holds [default: the placeholder sentinel]
        #[arg(long = "value", value_name = "TEXT")]
        value: Option<String>,
    },
}

impl Args {
    /// Subcommand to run, `show` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}
