//! Parsing of the active-status path literal

use crate::domain::DomainError;

/// How the `active_status` path segment is turned into a boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveStatusParse {
    /// `"1"` and `"0"` only; anything else is rejected
    Strict,
    /// `"1"` is true, every other literal is false
    #[default]
    Lenient,
}

impl ActiveStatusParse {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    pub fn parse(self, raw: &str) -> Result<bool, DomainError> {
        match (self, raw) {
            (_, "1") => Ok(true),
            (_, "0") => Ok(false),
            (Self::Lenient, _) => Ok(false),
            (Self::Strict, other) => Err(DomainError::validation(format!(
                "Invalid active_status '{}': expected 1 or 0",
                other
            ))),
        }
    }
}
