use std::path::Path;

use palette_layers::PixelGrid;

use crate::error::PipelineError;

/// Decode an image file into an RGBA pixel grid.
///
/// Any format the `image` crate is built with is accepted; the pixels are
/// converted to 8-bit RGBA, so images without alpha come out fully opaque.
pub fn load_rgba(path: &Path) -> Result<PixelGrid, PipelineError> {
    let decoded = image::open(path).map_err(|source| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    if width == 0 || height == 0 {
        return Err(PipelineError::UnsupportedDimensions { width, height });
    }

    tracing::debug!(path = %path.display(), width, height, "Decoded input image");

    PixelGrid::from_rgba_bytes(rgba.as_raw(), width, height)
        .map_err(|e| PipelineError::Internal(e.to_string()))
}
