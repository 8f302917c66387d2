//! Error type for layer extraction.

use std::fmt;

/// Error type for [`LayerExtractor::extract()`](super::LayerExtractor::extract).
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Image has zero width or height
    UnsupportedDimensions { width: usize, height: usize },
    /// No target colors were given
    EmptyTargets,
    /// Two targets share a color, so a pixel would land in both layers
    DuplicateTarget {
        /// Index of the second target with the repeated color
        index: usize,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::UnsupportedDimensions { width, height } => {
                write!(f, "unsupported dimensions: {}x{}", width, height)
            }
            ExtractError::EmptyTargets => write!(f, "no target colors given"),
            ExtractError::DuplicateTarget { index } => {
                write!(f, "duplicate target color at index {}", index)
            }
        }
    }
}

impl std::error::Error for ExtractError {}
