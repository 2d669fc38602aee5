//! Application startup: configuration, logging, then the requested command

use super::cli::args::Args;
use super::cli::config::Config;
use super::commands::execute;
use crate::core::error_handling::{fatal_message, log_error_with_context};
use crate::core::logging::init_logging;
use std::io::IsTerminal;

/// Parse the process arguments and run; returns the exit status
pub fn startup() -> i32 {
    use clap::Parser;

    run(Args::parse())
}

/// Run with already-parsed arguments
pub fn run(args: Args) -> i32 {
    let config = match Config::discover(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet
            eprintln!("Error: {}", fatal_message(&e, "Loading configuration"));
            return 1;
        }
    };

    let log_level = args.log_level.clone().or(config.logging.level.clone());
    let log_format = args.log_format.clone().or(config.logging.format.clone());
    let log_file = args.log_file.clone().or(config.logging.file.clone());
    let use_color = resolve_color(&args, &config);

    if let Err(e) = init_logging(
        log_level.as_deref(),
        log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }

    let command = args.command();
    log::debug!("Running {:?}", command);

    match execute(&command, &config) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            log_error_with_context(&e, "Build number command failed");
            1
        }
    }
}

/// --no-color wins, then --color, then the config file, then TTY detection
fn resolve_color(args: &Args, config: &Config) -> bool {
    if args.no_color {
        false
    } else if args.color {
        true
    } else {
        config
            .logging
            .color
            .unwrap_or_else(|| std::io::stderr().is_terminal())
    }
}
