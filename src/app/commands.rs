//! Subcommand implementations
//!
//! Each command returns the text to print so it can be exercised without a
//! process boundary.

use crate::app::cli::args::Command;
use crate::app::cli::config::Config;
use crate::inject::{
    inject_file, locate_in_file, read_value_file, InjectError, InjectRequest, InjectResult,
};
use crate::provider::{get_build_number, is_placeholder, PLACEHOLDER_CAPACITY, PLACEHOLDER_SENTINEL};

/// Run `command` with settings from `config` filling the gaps left by its flags
pub fn execute(command: &Command, config: &Config) -> InjectResult<String> {
    match command {
        Command::Show => Ok(show()),
        Command::Inject {
            input,
            output,
            from,
            value,
            value_file,
        } => {
            let value_file = value_file.as_ref().or(config.inject.value_file.as_ref());
            let value = match (value, value_file) {
                (Some(value), _) => value.clone(),
                (None, Some(path)) => read_value_file(path)?,
                (None, None) => {
                    return Err(InjectError::invalid(
                        "no build number given; use --value or --value-file",
                    ))
                }
            };
            let from = from
                .clone()
                .or_else(|| config.inject.from.clone())
                .unwrap_or_else(|| PLACEHOLDER_SENTINEL.to_string());

            let request = InjectRequest::new(value).with_from(from);
            let offset = inject_file(input, output, &request)?;
            Ok(format!(
                "{}: injected '{}' at {:#x}",
                output.display(),
                request.value,
                offset
            ))
        }
        Command::Locate { input, value } => {
            let from = value.as_deref().unwrap_or(PLACEHOLDER_SENTINEL);
            let offset = locate_in_file(input, from, PLACEHOLDER_CAPACITY)?;
            Ok(format!("{:#x}", offset))
        }
    }
}

fn show() -> String {
    let build_number = get_build_number();
    if is_placeholder(&build_number) {
        log::warn!("Build number placeholder was never replaced");
    } else if build_number.is_empty() {
        log::warn!("No build number available");
    }
    build_number
}
