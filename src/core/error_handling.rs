//! Generic error handling utilities
//!
//! Provides unified fatal-error reporting for the command-line tool while letting
//! each error type decide whether its message is meant for the user.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. When it returns `false`,
/// `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on
    /// (a bad value, a missing slot, an invalid config entry)
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message; system errors log the
/// operation context and leave the detail to debug level.
///
/// ```rust,no_run
/// # use buildversion::core::error_handling::log_error_with_context;
/// # use buildversion::inject::InjectError;
/// let err = InjectError::SlotNotFound { from: "SOONG BUILD NUMBER PLACEHOLDER".into() };
/// log_error_with_context(&err, "Injecting build number");
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Message to show on stderr when logging may be filtered out
pub fn fatal_message<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => user_msg,
        _ => format!("{}: {}", operation_context, error),
    }
}
