//! Core error types

use thiserror::Error;

/// Errors produced while parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string contains something other than hex digits
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),

    /// The string has the wrong number of hex digits
    #[error("color {input:?} has {len} hex digits, expected 3, 6 or 8")]
    InvalidLength { input: String, len: usize },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ColorParseError>;
