//! palette-layers: split flat-color logos into per-color layers
//!
//! This library reduces a raster logo to a fixed set of brand colors plus a
//! white background, then separates the result into one layer per color,
//! each with a vector form (one circle per pixel) and a raster form (only
//! that color's pixels opaque).
//!
//! # Quick Start
//!
//! The [`LogoSeparator`] builder is the primary entry point:
//!
//! ```
//! use palette_layers::{LogoSeparator, Palette, PixelGrid, Rgba};
//!
//! let palette = Palette::from_hex(&[
//!     ("black", "12070a"),
//!     ("yellow", "eab42e"),
//!     ("red", "bf292b"),
//! ]).unwrap();
//!
//! let image = PixelGrid::from_rgba_bytes(&[18, 7, 10, 255, 255, 255, 255, 0], 2, 1).unwrap();
//! let result = LogoSeparator::new(palette).separate(&image).unwrap();
//!
//! assert_eq!(result.quantized.grid().get(1, 0), Rgba::new(255, 255, 255, 0));
//! assert_eq!(result.layers.len(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source PixelGrid
//!     |
//!     v
//! Quantizer              (per pixel: background rule, else nearest palette color)
//!     |
//!     v
//! QuantizedImage         (RGB in palette + white, alpha copied from source)
//!     |
//!     v
//! LayerExtractor         (one row-major pass, bucket by exact RGB)
//!     |
//!     v
//! Layer per target       (VectorDocument + transparent-background raster)
//! ```
//!
//! # Color Matching
//!
//! Distance is plain Euclidean distance over the three 8-bit RGB channels;
//! alpha is not part of it. Squared integer distances are compared, so ties
//! are exact and always resolved in favour of the earliest palette entry.
//! Each pixel is classified once, which makes the layers mutually exclusive.
//!
//! Pixels that are fully transparent or exactly white are background no
//! matter which palette color they are closest to.

pub mod api;
pub mod color;
pub mod grid;
pub mod layers;
pub mod palette;
pub mod quantize;

#[cfg(test)]
mod domain_tests;

pub use api::{LogoSeparator, Separation, SplitError, DEFAULT_BACKGROUND_NAME};
pub use color::{Rgb, Rgba};
pub use grid::{GridError, PixelGrid};
pub use layers::{
    ExtractError, Layer, LayerExtractor, PointMark, Target, VectorDocument, DEFAULT_MARK_RADIUS,
};
pub use palette::{Palette, PaletteEntry, PaletteError, ParseColorError};
pub use quantize::{targets_for, Class, QuantizedImage, Quantizer, BACKGROUND};
