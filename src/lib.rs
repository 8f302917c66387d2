//! Logosplit - logo color separation
//!
//! Quantizes a logo to a fixed brand palette and writes one SVG and one PNG
//! layer per color. The pixel work lives in the `palette-layers` crate; this
//! crate adds file decoding, output encoding, naming and configuration.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
