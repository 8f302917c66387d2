//! Row-major RGBA pixel storage.

use std::fmt;

use crate::color::Rgba;

/// Error type for building a [`PixelGrid`] from raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The RGBA buffer does not hold exactly `width * height` pixels
    BufferSizeMismatch {
        /// Expected byte count (`width * height * 4`)
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`
    DimensionsOverflow { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "RGBA buffer size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            GridError::DimensionsOverflow { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A 2D grid of RGBA pixels with explicit dimensions.
///
/// Pixels are stored in row-major order: index `y * width + x`. Both the
/// decoded source image and every derived image use this representation.
/// Stages never mutate a grid they receive; they build a new one.
///
/// # Example
///
/// ```
/// use palette_layers::{PixelGrid, Rgba};
///
/// let bytes = [18, 7, 10, 255, 255, 255, 255, 0];
/// let grid = PixelGrid::from_rgba_bytes(&bytes, 2, 1).unwrap();
///
/// assert_eq!(grid.get(1, 0), Rgba::new(255, 255, 255, 0));
/// assert_eq!(grid.coords().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    /// Wrap a pixel vector.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgba>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            width * height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from a flat `[R, G, B, A, ...]` buffer.
    ///
    /// # Errors
    ///
    /// - [`GridError::DimensionsOverflow`] if the byte count overflows `usize`
    /// - [`GridError::BufferSizeMismatch`] unless the buffer holds exactly
    ///   `width * height * 4` bytes
    pub fn from_rgba_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, GridError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(GridError::DimensionsOverflow { width, height })?;
        if bytes.len() != expected {
            return Err(GridError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();

        Ok(Self::new(pixels, width, height))
    }

    /// A grid of the given size where every pixel is fully transparent.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self::new(vec![Rgba::TRANSPARENT; width * height], width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, pixel: Rgba) {
        self.pixels[y * self.width + x] = pixel;
    }

    /// Lazy `(x, y, pixel)` records in row-major order.
    ///
    /// The iterator borrows the grid, so calling `coords()` again restarts
    /// the scan from `(0, 0)`.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &px)| (i % width, i / width, px))
    }

    /// Flatten to `[R, G, B, A, ...]` bytes, the layout PNG encoders expect.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let grid = PixelGrid::from_rgba_bytes(&bytes, 3, 1).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.get(0, 0), Rgba::new(1, 2, 3, 4));
        assert_eq!(grid.get(2, 0), Rgba::new(9, 10, 11, 12));
        assert_eq!(grid.to_rgba_bytes(), bytes.to_vec());
    }

    #[test]
    fn test_from_rgba_bytes_size_mismatch() {
        let result = PixelGrid::from_rgba_bytes(&[0; 7], 1, 2);
        assert_eq!(
            result,
            Err(GridError::BufferSizeMismatch {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_from_rgba_bytes_overflowing_dimensions() {
        let result = PixelGrid::from_rgba_bytes(&[], usize::MAX / 2, 3);
        assert_eq!(
            result,
            Err(GridError::DimensionsOverflow {
                width: usize::MAX / 2,
                height: 3
            })
        );

        // wraps to a small value without the check
        let result = PixelGrid::from_rgba_bytes(&[], usize::MAX / 4 + 1, 1);
        assert!(matches!(result, Err(GridError::DimensionsOverflow { .. })));
    }

    #[test]
    fn test_row_major_layout() {
        // 2x2: index = y * width + x
        let bytes: Vec<u8> = (0..4u8).flat_map(|i| [i, 0, 0, 255]).collect();
        let grid = PixelGrid::from_rgba_bytes(&bytes, 2, 2).unwrap();

        assert_eq!(grid.get(1, 0).r, 1);
        assert_eq!(grid.get(0, 1).r, 2);
        assert_eq!(grid.get(1, 1).r, 3);
    }

    #[test]
    fn test_coords_order_and_restart() {
        let grid = PixelGrid::transparent(3, 2);
        let first: Vec<(usize, usize)> = grid.coords().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(first, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);

        let second: Vec<(usize, usize)> = grid.coords().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_transparent_grid() {
        let grid = PixelGrid::transparent(4, 3);
        assert_eq!(grid.pixels().len(), 12);
        assert!(grid.pixels().iter().all(|px| px.is_transparent()));
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_empty_dimensions() {
        assert!(PixelGrid::transparent(0, 5).is_empty());
        assert!(PixelGrid::transparent(5, 0).is_empty());
        assert_eq!(PixelGrid::transparent(0, 5).coords().count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        PixelGrid::transparent(2, 2).get(2, 0);
    }
}
