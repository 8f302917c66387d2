//! Unified error type for the palette-layers public API.
//!
//! [`SplitError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::grid::GridError;
use crate::layers::ExtractError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the palette-layers public API.
///
/// # Example
///
/// ```
/// use palette_layers::{Palette, PixelGrid, SplitError};
///
/// fn load(bytes: &[u8]) -> Result<(Palette, PixelGrid), SplitError> {
///     let palette = Palette::from_hex(&[("black", "#12070a")])?;
///     let grid = PixelGrid::from_rgba_bytes(bytes, 1, 1)?;
///     Ok((palette, grid))
/// }
///
/// assert!(load(&[0, 0, 0, 255]).is_ok());
/// assert!(load(&[0, 0, 0]).is_err());
/// ```
#[derive(Debug)]
pub enum SplitError {
    /// Palette validation error (empty, duplicate, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Raw pixel buffer does not match the stated dimensions
    Grid(GridError),
    /// Layer extraction error (bad dimensions or targets)
    Extract(ExtractError),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Palette(err) => write!(f, "palette error: {}", err),
            SplitError::ParseColor(err) => write!(f, "color parse error: {}", err),
            SplitError::Grid(err) => write!(f, "pixel grid error: {}", err),
            SplitError::Extract(err) => write!(f, "layer extraction error: {}", err),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Palette(err) => Some(err),
            SplitError::ParseColor(err) => Some(err),
            SplitError::Grid(err) => Some(err),
            SplitError::Extract(err) => Some(err),
        }
    }
}

impl From<PaletteError> for SplitError {
    fn from(err: PaletteError) -> Self {
        SplitError::Palette(err)
    }
}

impl From<ParseColorError> for SplitError {
    fn from(err: ParseColorError) -> Self {
        SplitError::ParseColor(err)
    }
}

impl From<GridError> for SplitError {
    fn from(err: GridError) -> Self {
        SplitError::Grid(err)
    }
}

impl From<ExtractError> for SplitError {
    fn from(err: ExtractError) -> Self {
        SplitError::Extract(err)
    }
}
