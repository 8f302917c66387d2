//! Color types
//!
//! - [`Rgb`]: an opaque 8-bit color, the unit of palette matching
//! - [`Rgba`]: a pixel, RGB plus an independent alpha channel
//!
//! # Example
//!
//! ```
//! use palette_layers::{Rgb, Rgba};
//!
//! let brand: Rgb = "#12070a".parse().unwrap();
//! let pixel = Rgba::new(18, 7, 10, 255);
//! assert_eq!(pixel.rgb(), brand);
//! ```

mod rgb;

pub use rgb::{Rgb, Rgba};
