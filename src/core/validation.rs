//! Validation utilities for settings coming from the command line or config files

use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};

/// Validate a log level string, returning it lowercased
pub fn validate_log_level(level: &str) -> Result<String, String> {
    let lowered = level.to_lowercase();
    if LOG_LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(format!(
            "'{}' is not a valid log level (expected one of: {})",
            level,
            LOG_LEVELS.join(", ")
        ))
    }
}

/// Validate a log format name
pub fn validate_log_format(format: &str) -> Result<String, String> {
    if LOG_FORMATS.contains(&format) {
        Ok(format.to_string())
    } else {
        Err(format!(
            "'{}' is not a valid log format (expected one of: {})",
            format,
            LOG_FORMATS.join(", ")
        ))
    }
}

/// Validate the text a placeholder slot is expected to hold
pub fn validate_slot_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Slot text cannot be empty".to_string());
    }
    if text.contains('\0') {
        return Err("Slot text cannot contain NUL bytes".to_string());
    }
    Ok(())
}
