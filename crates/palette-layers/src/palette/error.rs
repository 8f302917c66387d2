//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette validation.
///
/// Returned when a palette configuration is invalid: empty, or with two
/// entries sharing a color or a name.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Duplicate entry name found at the specified index
    DuplicateName {
        /// Index where the duplicate was found
        index: usize,
        /// The repeated name
        name: String,
    },
    /// Invalid hex color string
    ParseColor {
        /// Name of the entry whose color failed to parse
        name: String,
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::DuplicateName { index, name } => {
                write!(f, "duplicate name '{}' found at index {}", name, index)
            }
            PaletteError::ParseColor { name, source } => {
                write!(f, "invalid color for '{}': {}", name, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(PaletteError::EmptyPalette.to_string(), "palette cannot be empty");
        assert_eq!(
            PaletteError::DuplicateColor { index: 2 }.to_string(),
            "duplicate color found at index 2"
        );
        assert_eq!(
            PaletteError::DuplicateName {
                index: 1,
                name: "red".to_string()
            }
            .to_string(),
            "duplicate name 'red' found at index 1"
        );
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_parse_color_source_chain() {
        use std::error::Error;

        let err = PaletteError::ParseColor {
            name: "black".to_string(),
            source: ParseColorError::InvalidLength,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid color for 'black'"));
        assert!(PaletteError::EmptyPalette.source().is_none());
    }
}
