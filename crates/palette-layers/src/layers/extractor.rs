//! Single-pass split of a quantized image into per-color layers.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::grid::PixelGrid;

use super::{ExtractError, Layer, PointMark, Target, VectorDocument};

/// Default radius of a point mark, in pixel units.
pub const DEFAULT_MARK_RADIUS: f32 = 0.5;

/// Splits a quantized image into one [`Layer`] per target color.
///
/// The image is scanned once, in row-major order. Each pixel whose RGB
/// exactly equals a target color is added to that target's layer: a mark
/// in the vector document and an opaque pixel in the raster. Pixels that
/// match no target appear in no layer.
///
/// Alpha of the quantized pixel is ignored; layer pixels are always fully
/// opaque.
///
/// # Example
///
/// ```
/// use palette_layers::{LayerExtractor, PixelGrid, Rgb, Rgba, Target};
///
/// let image = PixelGrid::from_rgba_bytes(&[18, 7, 10, 255, 255, 255, 255, 0], 2, 1).unwrap();
/// let targets = vec![
///     Target::new("black", Rgb::new(18, 7, 10)),
///     Target::new("white", Rgb::WHITE),
/// ];
///
/// let layers = LayerExtractor::new(targets).extract(&image).unwrap();
/// assert_eq!(layers[0].mark_count(), 1);
/// assert_eq!(layers[1].raster.get(1, 0), Rgba::new(255, 255, 255, 255));
/// ```
#[derive(Debug, Clone)]
pub struct LayerExtractor {
    targets: Vec<Target>,
    radius: f32,
}

impl LayerExtractor {
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            targets,
            radius: DEFAULT_MARK_RADIUS,
        }
    }

    /// Set the radius of every point mark.
    #[inline]
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Build all layers, returned in target order.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::UnsupportedDimensions`] for a zero-width or
    ///   zero-height image
    /// - [`ExtractError::EmptyTargets`] for an empty target list
    /// - [`ExtractError::DuplicateTarget`] when two targets share a color
    pub fn extract(&self, image: &PixelGrid) -> Result<Vec<Layer>, ExtractError> {
        if image.is_empty() {
            return Err(ExtractError::UnsupportedDimensions {
                width: image.width(),
                height: image.height(),
            });
        }
        if self.targets.is_empty() {
            return Err(ExtractError::EmptyTargets);
        }

        let mut lookup: HashMap<Rgb, usize> = HashMap::with_capacity(self.targets.len());
        for (index, target) in self.targets.iter().enumerate() {
            if lookup.insert(target.color, index).is_some() {
                return Err(ExtractError::DuplicateTarget { index });
            }
        }

        let (width, height) = (image.width(), image.height());
        let mut layers: Vec<Layer> = self
            .targets
            .iter()
            .map(|target| Layer {
                target: target.clone(),
                vector: VectorDocument::new(width, height, target.color, self.radius),
                raster: PixelGrid::transparent(width, height),
            })
            .collect();

        for (x, y, px) in image.coords() {
            let Some(&idx) = lookup.get(&px.rgb()) else {
                continue;
            };
            let layer = &mut layers[idx];
            layer.vector.marks.push(PointMark { x, y });
            layer.raster.set(x, y, layer.target.color.with_alpha(255));
        }

        Ok(layers)
    }
}
