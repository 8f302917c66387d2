//! PNG output for quantized images and raster layers.

use std::io::Cursor;
use std::path::Path;

use palette_layers::PixelGrid;

use crate::error::RenderError;

/// Encode a pixel grid as an 8-bit RGBA PNG.
///
/// With `optimize` set the result is re-compressed with oxipng. Pixel data
/// is never altered; if oxipng fails the plain encoding is returned.
pub fn encode_rgba_png(grid: &PixelGrid, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let width = u32::try_from(grid.width())
        .map_err(|_| RenderError::PngEncode(format!("width {} too large", grid.width())))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| RenderError::PngEncode(format!("height {} too large", grid.height())))?;

    let data = grid.to_rgba_bytes();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(if optimize {
            png::Compression::Fast
        } else {
            png::Compression::Default
        });
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    // Alpha must survive untouched, so no alpha optimization
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Write bytes to `path`, replacing any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    std::fs::write(path, bytes)?;
    Ok(())
}
