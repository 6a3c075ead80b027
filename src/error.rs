//! Error types for spectra.

use thiserror::Error;

/// Result type alias for spectra operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or accessing a color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input does not look like an RGB color, it must be an object with
    /// an `r` or `red` key.
    #[error("Invalid color input: expected an object with `r` or `red`, found {found}")]
    InvalidColorInput {
        /// A short description of what was passed instead.
        found: String,
    },

    /// An accessor was used on a wrapper that holds no color.
    #[error("No color value is set")]
    MissingColorValue,

    /// Normalization needs at least one of the RGB or HSV notations.
    #[error("Incomplete color: neither rgb nor hsv is specified")]
    IncompleteColorSpec,
}

impl Error {
    /// Create an invalid input error describing the JSON value that was
    /// passed.
    pub fn invalid_input(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(_) => "a boolean".to_string(),
            serde_json::Value::Number(_) => "a number".to_string(),
            serde_json::Value::String(_) => "a string".to_string(),
            serde_json::Value::Array(_) => "an array".to_string(),
            serde_json::Value::Object(_) => "an object without `r` or `red`".to_string(),
        };

        Self::InvalidColorInput { found }
    }
}
