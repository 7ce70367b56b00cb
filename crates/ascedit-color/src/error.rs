//! Error types for color conversion and parsing

use std::num::ParseIntError;

use thiserror::Error;

use crate::repr::Format;

/// Error type for color operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// No conversion is defined between [`Color`](crate::Color) and this format
    #[error("unsupported color format: {0}")]
    UnsupportedFormat(Format),

    /// A color string could not be parsed
    #[error("invalid color: {0}")]
    Parse(#[from] ParseColorError),
}

/// Error type for parsing color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Input was empty or whitespace only
    #[error("empty color string")]
    Empty,

    /// Input matches none of the accepted forms
    #[error("unrecognized color syntax: {0:?}")]
    InvalidSyntax(String),

    /// Hex string has invalid length (must be 3, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 3, 6 or 8 digits)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[source] ParseIntError),

    /// A decimal component is not an integer in `0..=255`
    #[error("invalid color component: {0}")]
    InvalidComponent(#[source] ParseIntError),

    /// `rgb(...)` or `rgba(...)` had the wrong number of components
    #[error("expected {expected} color components, found {found}")]
    WrongComponentCount {
        /// Components required by the function name
        expected: usize,
        /// Components actually present
        found: usize,
    },
}
