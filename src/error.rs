//! Error types for check-digit computation

use thiserror::Error;

use crate::symbol::Glyph;

/// Result type for check/compute operations
pub type CheckResult<T> = std::result::Result<T, CheckError>;

/// Errors that abort a single `check` or `compute` call.
///
/// None of these are fatal to the process: the caller decides whether to
/// correct the input, reject the identifier, or report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A symbol could not be mapped to a value under the active filter
    #[error("cannot translate symbol {symbol} at index {index}")]
    Translation { index: usize, symbol: String },

    /// The number of significant values violates the size contract
    #[error("expected {contract} significant values, found {found}")]
    Size { contract: String, found: usize },

    /// A standard-specific prefix or structure check failed
    #[error("format error: {reason}")]
    Format { reason: String },
}

impl CheckError {
    pub(crate) fn translation(index: usize, glyph: Glyph) -> Self {
        let symbol = match glyph {
            Glyph::Text(c) => format!("{:?}", c),
            Glyph::Number(n) => n.to_string(),
        };
        Self::Translation { index, symbol }
    }

    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, Self::Translation { .. })
    }

    pub fn is_size(&self) -> bool {
        matches!(self, Self::Size { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
