//! Per-color layer documents.

use crate::color::Rgb;
use crate::grid::PixelGrid;

/// A named color to extract a layer for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub color: Rgb,
}

impl Target {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A filled circle centered on a pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointMark {
    pub x: usize,
    pub y: usize,
}

/// The vector half of a layer: one mark per matching pixel.
///
/// The document has the same size as the source image. Every mark is drawn
/// with the same `fill` and `radius`. Marks are kept in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    pub width: usize,
    pub height: usize,
    pub fill: Rgb,
    pub radius: f32,
    pub marks: Vec<PointMark>,
}

impl VectorDocument {
    pub fn new(width: usize, height: usize, fill: Rgb, radius: f32) -> Self {
        Self {
            width,
            height,
            fill,
            radius,
            marks: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// One target color's output: marks and a transparent-background raster.
#[derive(Debug, Clone)]
pub struct Layer {
    pub target: Target,
    pub vector: VectorDocument,
    /// Same size as the source; opaque `target.color` where the quantized
    /// image matched, fully transparent everywhere else.
    pub raster: PixelGrid,
}

impl Layer {
    /// Number of pixels in this layer.
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.vector.marks.len()
    }
}
