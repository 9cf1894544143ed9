//! Error type for hex color parsing.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string is malformed, either because it has
/// the wrong number of digits or because it contains a non-hex character.
/// This is the explicit "invalid" signal of the converter: malformed input
/// never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
