//! Nearest-color quantization against a fixed palette.

use crate::color::{Rgb, Rgba};
use crate::grid::PixelGrid;
use crate::palette::Palette;

use super::{Class, QuantizedImage};

/// Color of every background pixel in a quantized image.
pub const BACKGROUND: Rgb = Rgb::WHITE;

/// Maps every pixel of a source image onto a palette color or background.
///
/// Each pixel is classified exactly once, in a single pass:
///
/// 1. A fully transparent pixel (alpha 0) or an exactly white pixel is
///    background, whatever palette color it would be closest to.
/// 2. Any other pixel takes the nearest palette color by Euclidean RGB
///    distance, ties going to the earliest palette entry.
///
/// Alpha is copied from the source for every pixel, background included,
/// so a transparent source pixel comes out as transparent white.
///
/// # Example
///
/// ```
/// use palette_layers::{Palette, PixelGrid, Quantizer, Rgba};
///
/// let palette = Palette::from_hex(&[("black", "12070a"), ("red", "bf292b")]).unwrap();
/// let source = PixelGrid::from_rgba_bytes(&[250, 10, 10, 255, 0, 0, 0, 0], 2, 1).unwrap();
///
/// let quantized = Quantizer::new(palette).quantize(&source);
/// assert_eq!(quantized.grid().get(0, 0), Rgba::new(191, 41, 43, 255));
/// assert_eq!(quantized.grid().get(1, 0), Rgba::new(255, 255, 255, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
}

impl Quantizer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Classify a single source pixel.
    #[inline]
    pub fn classify(&self, pixel: Rgba) -> Class {
        if pixel.is_transparent() || pixel.rgb() == BACKGROUND {
            return Class::Background;
        }
        let (idx, _) = self.palette.find_nearest(pixel.rgb());
        Class::Palette(idx)
    }

    /// Quantize a whole image. The source grid is left untouched.
    pub fn quantize(&self, source: &PixelGrid) -> QuantizedImage {
        let mut classes = Vec::with_capacity(source.pixels().len());
        let mut pixels = Vec::with_capacity(source.pixels().len());

        for &px in source.pixels() {
            let class = self.classify(px);
            let rgb = match class {
                Class::Palette(idx) => self.palette.color(idx),
                Class::Background => BACKGROUND,
            };
            classes.push(class);
            pixels.push(rgb.with_alpha(px.a));
        }

        let grid = PixelGrid::new(pixels, source.width(), source.height());
        QuantizedImage::new(grid, classes, self.palette.clone())
    }
}
