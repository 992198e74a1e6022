//! Error types for cache operations.

use thiserror::Error;

/// Result type alias using CacheError.
pub type CacheResult<T> = Result<T, CacheError>;

/// Primary error type for cache operations.
///
/// `NullArgument` and `InvalidArgument` are raised synchronously by input
/// validation and abort only the call that raised them. `UpdateFailed` is a
/// domain failure recorded by an update action; it is never raised by the
/// cache itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    // === Input Errors ===
    #[error("Missing required argument: {name}")]
    NullArgument { name: String },

    #[error("Invalid value for '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    // === Update Errors ===
    #[error("Update '{update}' failed: {message}")]
    UpdateFailed { update: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    pub fn null_argument(name: impl Into<String>) -> Self {
        CacheError::NullArgument { name: name.into() }
    }

    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        CacheError::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn update_failed(update: impl Into<String>, message: impl Into<String>) -> Self {
        CacheError::UpdateFailed {
            update: update.into(),
            message: message.into(),
        }
    }

    /// True for the two kinds raised by input validation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CacheError::NullArgument { .. } | CacheError::InvalidArgument { .. }
        )
    }

    /// Name of the offending argument, if this error came from validation.
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            CacheError::NullArgument { name } | CacheError::InvalidArgument { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let null = CacheError::null_argument("offering");
        let invalid = CacheError::invalid_argument("epsg", "must be greater than zero");
        let failed = CacheError::update_failed("SensorInsertion", "dao unavailable");

        assert!(null.is_input_error());
        assert!(invalid.is_input_error());
        assert!(!failed.is_input_error());
        assert_eq!(null.argument_name(), Some("offering"));
        assert_eq!(failed.argument_name(), None);
    }

    #[test]
    fn test_error_display() {
        let err = CacheError::invalid_argument("epsg", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'epsg': must be greater than zero"
        );
    }
}
