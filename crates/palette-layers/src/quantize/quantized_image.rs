//! QuantizedImage: the output of the quantizer.

use crate::color::Rgb;
use crate::grid::PixelGrid;
use crate::layers::Target;
use crate::palette::Palette;

use super::BACKGROUND;

/// How a single pixel was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// Matched the palette entry at this index
    Palette(usize),
    /// Transparent or white in the source
    Background,
}

/// A quantized image: every pixel's RGB is a palette color or white.
///
/// Stores the output grid together with the per-pixel classification and
/// the palette used, so callers can both serialize the image and reason
/// about which entry each pixel belongs to.
#[derive(Debug, Clone)]
pub struct QuantizedImage {
    grid: PixelGrid,
    classes: Vec<Class>,
    palette: Palette,
}

impl QuantizedImage {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that there is one class per pixel.
    pub fn new(grid: PixelGrid, classes: Vec<Class>, palette: Palette) -> Self {
        debug_assert_eq!(grid.pixels().len(), classes.len());
        Self {
            grid,
            classes,
            palette,
        }
    }

    /// The quantized pixels, alpha copied from the source.
    #[inline]
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Per-pixel classification, row-major.
    #[inline]
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Pixel count per palette entry, followed by the background count.
    ///
    /// The returned vector has `palette.len() + 1` elements.
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len() + 1];
        for class in &self.classes {
            match *class {
                Class::Palette(idx) => counts[idx] += 1,
                Class::Background => counts[self.palette.len()] += 1,
            }
        }
        counts
    }

    /// The layer targets for this image: every palette entry in order,
    /// then the background.
    ///
    /// When the palette already contains pure white, that entry is the
    /// background layer and no separate target is added, so every pixel
    /// still lands in exactly one layer.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_layers::{Palette, PixelGrid, Quantizer, Rgb};
    ///
    /// let palette = Palette::from_hex(&[("black", "12070a")]).unwrap();
    /// let image = Quantizer::new(palette).quantize(&PixelGrid::transparent(1, 1));
    ///
    /// let targets = image.targets("white");
    /// assert_eq!(targets.len(), 2);
    /// assert_eq!(targets[1].color, Rgb::WHITE);
    /// ```
    pub fn targets(&self, background_name: &str) -> Vec<Target> {
        targets_for(&self.palette, background_name)
    }
}

/// Palette entries plus the background, without duplicating white.
pub fn targets_for(palette: &Palette, background_name: &str) -> Vec<Target> {
    let mut targets: Vec<Target> = palette
        .iter()
        .map(|e| Target::new(e.name.clone(), e.color))
        .collect();
    if palette.index_of(BACKGROUND).is_none() {
        targets.push(Target::new(background_name, BACKGROUND));
    }
    targets
}

/// True when `color` is a legal quantized color for `palette`.
pub fn is_quantized_color(palette: &Palette, color: Rgb) -> bool {
    color == BACKGROUND || palette.index_of(color).is_some()
}
