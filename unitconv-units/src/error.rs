//! Conversion errors
//!
//! Every failure is reported to the caller as a value; nothing is retried
//! or recovered.

use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
}

/// Which end of a conversion a unit symbol belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => write!(f, "from"),
            Side::To => write!(f, "to"),
        }
    }
}

/// Errors that can occur during unit conversion or listing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Empty unit symbol or non-finite value
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Symbol not present in the category table
    #[error("invalid {side} unit: {symbol}")]
    UnknownUnit { side: Side, symbol: String },

    /// Category name is not recognized
    #[error("Wrong type provided")]
    UnknownCategory(String),
}

impl ConversionError {
    pub fn missing_unit() -> Self {
        ConversionError::InvalidInput("from/to unit is required")
    }

    pub fn invalid_value() -> Self {
        ConversionError::InvalidInput("invalid value")
    }

    pub fn unknown_unit(side: Side, symbol: impl Into<String>) -> Self {
        ConversionError::UnknownUnit { side, symbol: symbol.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput(_) => codes::INVALID_INPUT,
            ConversionError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConversionError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
        }
    }
}
