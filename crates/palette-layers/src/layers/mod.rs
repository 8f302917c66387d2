//! Layer extraction.
//!
//! [`LayerExtractor`] turns a quantized image into one [`Layer`] per target
//! color. Each layer pairs a [`VectorDocument`] (one [`PointMark`] per
//! pixel) with a raster that is transparent outside the layer's pixels.

mod document;
mod error;
mod extractor;

pub use document::{Layer, PointMark, Target, VectorDocument};
pub use error::ExtractError;
pub use extractor::{LayerExtractor, DEFAULT_MARK_RADIUS};
