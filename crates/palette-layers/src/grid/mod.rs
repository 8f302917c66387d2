//! In-memory image representation.
//!
//! [`PixelGrid`] is the canonical form of both the source image and every
//! image derived from it.

mod pixel_grid;

pub use pixel_grid::{GridError, PixelGrid};
