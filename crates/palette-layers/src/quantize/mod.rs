//! Color quantization.
//!
//! [`Quantizer`] reduces a source image to palette colors plus white
//! background, producing a [`QuantizedImage`].

mod quantized_image;
mod quantizer;

pub use quantized_image::{is_quantized_color, targets_for, Class, QuantizedImage};
pub use quantizer::{Quantizer, BACKGROUND};
