//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use logosplit::models::{AppConfig, OutputConfig};

/// Brand colors as raw RGBA
pub mod colors {
    pub const BLACK: [u8; 4] = [0x12, 0x07, 0x0a, 255];
    pub const YELLOW: [u8; 4] = [0xea, 0xb4, 0x2e, 255];
    pub const RED: [u8; 4] = [0xbf, 0x29, 0x2b, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const CLEAR: [u8; 4] = [0, 0, 0, 0];
}

/// Write an RGBA PNG built from row-major pixels.
pub fn write_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 4]]) {
    assert_eq!(pixels.len(), (width * height) as usize, "fixture size");
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();

    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&data).unwrap();
}

/// The 2x1 logo: one black pixel, one white pixel.
pub fn two_pixel_logo(dir: &Path) -> PathBuf {
    let path = dir.join("logo.png");
    write_png(&path, 2, 1, &[colors::BLACK, colors::WHITE]);
    path
}

/// A 4x3 logo with off-brand shades, transparency and all three colors.
pub fn noisy_logo(dir: &Path) -> PathBuf {
    let path = dir.join("brand.png");
    write_png(
        &path,
        4,
        3,
        &[
            [20, 10, 12, 255],
            [230, 178, 50, 255],
            [190, 40, 40, 255],
            colors::CLEAR,
            colors::WHITE,
            [250, 250, 250, 255],
            [0, 0, 0, 255],
            [200, 30, 30, 128],
            colors::YELLOW,
            colors::RED,
            colors::BLACK,
            [240, 190, 60, 0],
        ],
    );
    path
}

/// Default brand config writing into `dir`.
pub fn config_into(dir: &Path) -> AppConfig {
    AppConfig {
        output: OutputConfig {
            directory: Some(dir.to_path_buf()),
            ..Default::default()
        },
        ..Default::default()
    }
}
