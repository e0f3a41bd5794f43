//! Error types

mod api;
mod validation;

pub use api::*;
pub use validation::*;

/// Errors produced by the catalog library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record source failed to deliver a page.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// User-supplied input was rejected before any state changed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A configuration value is unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error rejected user input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns the validation error if this error rejected user input.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::from(ValidationError::NotPositive(0));
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input: selection count must be a positive number, got 0"
        );
    }

    #[test]
    fn test_api_error_is_not_invalid_input() {
        let err = Error::from(ApiError::http(503, "unavailable"));
        assert!(!err.is_invalid_input());
        assert!(err.validation().is_none());
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
    }
}
