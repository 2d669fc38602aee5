//! Slot injection error types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("No placeholder slot holding '{from}' found")]
    SlotNotFound { from: String },

    #[error("Slot holding '{from}' found more than once (offsets {first:#x}, {second:#x})")]
    AmbiguousSlot {
        from: String,
        first: usize,
        second: usize,
    },

    #[error("Build number is {len} bytes, the slot holds at most {max}")]
    ValueTooLong { len: usize, max: usize },

    #[error("Invalid build number: {reason}")]
    InvalidValue { reason: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InjectError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        InjectError::InvalidValue {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InjectError::Io {
            path: path.into(),
            source,
        }
    }
}

impl crate::core::error_handling::ContextualError for InjectError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, InjectError::Io { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

/// Result type for injection operations
pub type InjectResult<T> = Result<T, InjectError>;
