//! LogoSeparator builder -- the primary ergonomic entry point for the crate.
//!
//! [`LogoSeparator`] runs quantization followed by layer extraction behind a
//! small fluent configuration API.

use crate::grid::PixelGrid;
use crate::layers::{Layer, LayerExtractor, DEFAULT_MARK_RADIUS};
use crate::palette::Palette;
use crate::quantize::{QuantizedImage, Quantizer};

use super::SplitError;

/// Default name of the background layer.
pub const DEFAULT_BACKGROUND_NAME: &str = "white";

/// Result of separating one image.
#[derive(Debug, Clone)]
pub struct Separation {
    pub quantized: QuantizedImage,
    /// One layer per palette entry in palette order, then the background.
    pub layers: Vec<Layer>,
}

/// High-level quantize-then-split builder.
///
/// - Constructor requires a validated [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`separate()`](Self::separate) takes `&self` so one separator can
///   process many images
///
/// # Example
///
/// ```
/// use palette_layers::{LogoSeparator, Palette, PixelGrid};
///
/// let palette = Palette::from_hex(&[("black", "12070a"), ("red", "bf292b")]).unwrap();
/// let separator = LogoSeparator::new(palette).mark_radius(0.5);
///
/// let image = PixelGrid::from_rgba_bytes(&[18, 7, 10, 255], 1, 1).unwrap();
/// let result = separator.separate(&image).unwrap();
///
/// assert_eq!(result.layers.len(), 3); // black, red, white
/// assert_eq!(result.layers[0].mark_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LogoSeparator {
    quantizer: Quantizer,
    mark_radius: f32,
    background_name: String,
}

impl LogoSeparator {
    pub fn new(palette: Palette) -> Self {
        Self {
            quantizer: Quantizer::new(palette),
            mark_radius: DEFAULT_MARK_RADIUS,
            background_name: DEFAULT_BACKGROUND_NAME.to_string(),
        }
    }

    /// Set the radius of the circles in every vector document.
    #[inline]
    pub fn mark_radius(mut self, radius: f32) -> Self {
        self.mark_radius = radius;
        self
    }

    /// Set the name reported for the background layer.
    #[inline]
    pub fn background_name(mut self, name: impl Into<String>) -> Self {
        self.background_name = name.into();
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        self.quantizer.palette()
    }

    /// Quantize `source`, then extract every layer from the result.
    ///
    /// # Errors
    ///
    /// [`SplitError::Extract`] if the image has a zero dimension.
    pub fn separate(&self, source: &PixelGrid) -> Result<Separation, SplitError> {
        let quantized = self.quantizer.quantize(source);
        let layers = LayerExtractor::new(quantized.targets(&self.background_name))
            .radius(self.mark_radius)
            .extract(quantized.grid())?;
        Ok(Separation { quantized, layers })
    }
}
