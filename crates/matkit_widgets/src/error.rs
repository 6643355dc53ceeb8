//! Widget error types

use matkit_core::ColorParseError;
use thiserror::Error;

/// Errors surfaced by the widget layer
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The theme document is not valid TOML or has the wrong shape
    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),

    /// The theme file could not be read
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// A color entry in the theme could not be parsed
    #[error("invalid color for `{field}`: {source}")]
    InvalidColor {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },

    /// A numeric entry in the theme is NaN or infinite
    #[error("invalid value for `{field}`: {value} is not a finite number")]
    NonFiniteValue { field: &'static str, value: f32 },

    /// A focus signal was sent after its control was dropped
    #[error("focus channel closed: the control has been dropped")]
    FocusChannelClosed,
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
