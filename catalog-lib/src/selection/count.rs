//! Transient "select first N" count input.

use std::num::IntErrorKind;

use crate::error::ValidationError;

/// The count the user typed for "select first N".
///
/// Holds the raw text until a successful [`select_first_n_from`] clears it. A
/// rejected count is kept so it can be shown back for correction.
///
/// [`select_first_n_from`]: super::select_first_n_from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCount {
    raw: Option<String>,
}

impl SelectionCount {
    /// Create an empty count input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw text of the input.
    pub fn set(&mut self, text: impl Into<String>) {
        self.raw = Some(text.into());
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.raw = None;
    }

    /// Get the raw text, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Check if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }

    /// Parse the input as a positive whole number.
    ///
    /// Values beyond the range of `i64` saturate, so a huge count still
    /// selects the whole page.
    pub fn parse(&self) -> Result<i64, ValidationError> {
        let text = self.raw.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(ValidationError::EmptyCount);
        }
        let n = match text.parse::<i64>() {
            Ok(n) => n,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(ValidationError::NotANumber(text.to_string())),
            },
        };
        validate_count(n)?;
        Ok(n)
    }
}

impl From<i64> for SelectionCount {
    fn from(n: i64) -> Self {
        Self {
            raw: Some(n.to_string()),
        }
    }
}

/// Rejects counts below 1.
pub fn validate_count(n: i64) -> Result<(), ValidationError> {
    if n < 1 {
        return Err(ValidationError::NotPositive(n));
    }
    Ok(())
}
