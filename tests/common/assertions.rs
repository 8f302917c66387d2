//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Decode a PNG from disk into raw RGBA bytes plus its size.
pub fn read_rgba(path: &Path) -> (u32, u32, Vec<u8>) {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("Expected decodable PNG at {}: {e}", path.display()))
        .to_rgba8();
    (img.width(), img.height(), img.into_raw())
}

/// Assert a file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected file {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the SVG at `path` holds exactly `expected` circles.
pub fn assert_circle_count(path: &Path, expected: usize) {
    let svg = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected file {}: {e}", path.display()));
    assert!(svg.contains("<svg"), "Not an SVG document: {}", path.display());
    assert_eq!(
        svg.matches("<circle").count(),
        expected,
        "Circle count in {}",
        path.display()
    );
}

/// Pixel at (x, y) of a decoded RGBA buffer
pub fn pixel_at(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}
