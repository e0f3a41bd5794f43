//! Validation error types

/// Rejected user input.
///
/// Returned before any selection state is touched, so callers can show the
/// message and let the user correct the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No selection count was entered.
    #[error("selection count is empty")]
    EmptyCount,

    /// The selection count is not a whole number.
    #[error("selection count '{0}' is not a whole number")]
    NotANumber(String),

    /// The selection count is zero or negative.
    #[error("selection count must be a positive number, got {0}")]
    NotPositive(i64),

    /// Page numbers start at 1.
    #[error("page number must be at least 1, got {0}")]
    PageNumber(u32),
}
