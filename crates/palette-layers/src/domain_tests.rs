//! Domain-critical regression tests for palette-layers.
//!
//! These tests exercise the whole quantize-then-split path on small
//! hand-built images and on a deterministic pseudo-random image. Each test
//! documents the regression it guards against.

use crate::api::LogoSeparator;
use crate::color::{Rgb, Rgba};
use crate::grid::PixelGrid;
use crate::layers::PointMark;
use crate::palette::Palette;
use crate::quantize::{is_quantized_color, Class};

fn brand_palette() -> Palette {
    Palette::from_hex(&[("black", "12070a"), ("yellow", "eab42e"), ("red", "bf292b")]).unwrap()
}

/// Deterministic xorshift noise image; every channel including alpha is
/// random, with a sprinkle of exact white and exact transparent pixels.
fn noise_image(width: usize, height: usize, seed: u32) -> PixelGrid {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let pixels = (0..width * height)
        .map(|_| {
            let v = next();
            match v % 16 {
                0 => Rgba::new(255, 255, 255, (v >> 8) as u8),
                1 => Rgba::new((v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8, 0),
                _ => Rgba::new((v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8, (v >> 4) as u8),
            }
        })
        .collect();
    PixelGrid::new(pixels, width, height)
}

// ========================================================================
// Reference scenario
// ========================================================================

/// If this breaks, it means: the documented 2x1 example no longer produces
/// the documented output. Pixel (0,0) is exactly brand black; pixel (1,0)
/// is white and fully transparent.
#[test]
fn test_reference_scenario() {
    let source = PixelGrid::new(
        vec![Rgba::new(18, 7, 10, 255), Rgba::new(255, 255, 255, 0)],
        2,
        1,
    );
    let result = LogoSeparator::new(brand_palette()).separate(&source).unwrap();

    assert_eq!(result.quantized.grid().get(0, 0), Rgba::new(18, 7, 10, 255));
    assert_eq!(result.quantized.grid().get(1, 0), Rgba::new(255, 255, 255, 0));

    let marks: Vec<(&str, Vec<PointMark>)> = result
        .layers
        .iter()
        .map(|l| (l.target.name.as_str(), l.vector.marks.clone()))
        .collect();
    assert_eq!(
        marks,
        vec![
            ("black", vec![PointMark { x: 0, y: 0 }]),
            ("yellow", vec![]),
            ("red", vec![]),
            ("white", vec![PointMark { x: 1, y: 0 }]),
        ]
    );
}

// ========================================================================
// Classification invariants
// ========================================================================

/// If this breaks, it means: some pixel left quantization with a color that
/// is neither a palette entry nor white.
#[test]
fn test_exhaustive_classification() {
    let palette = brand_palette();
    let source = noise_image(64, 48, 0x1234_5678);
    let result = LogoSeparator::new(palette.clone()).separate(&source).unwrap();

    for (x, y, px) in result.quantized.grid().coords() {
        assert!(
            is_quantized_color(&palette, px.rgb()),
            "pixel ({x}, {y}) has unclassified color {}",
            px.rgb()
        );
    }
}

/// If this breaks, it means: a pixel landed in zero layers or in several.
/// Summing opacity across all layers must give exactly one at every
/// coordinate.
#[test]
fn test_mutual_exclusivity() {
    let source = noise_image(40, 30, 0xdead_beef);
    let result = LogoSeparator::new(brand_palette()).separate(&source).unwrap();

    for y in 0..source.height() {
        for x in 0..source.width() {
            let opaque = result
                .layers
                .iter()
                .filter(|l| l.raster.get(x, y).a == 255)
                .count();
            assert_eq!(opaque, 1, "pixel ({x}, {y}) is opaque in {opaque} layers");
        }
    }

    let total_marks: usize = result.layers.iter().map(|l| l.mark_count()).sum();
    assert_eq!(total_marks, source.pixels().len());
}

/// If this breaks, it means: quantization altered the alpha channel. Output
/// alpha must be a straight copy of input alpha, background pixels included.
#[test]
fn test_alpha_pass_through() {
    let source = noise_image(32, 32, 42);
    let result = LogoSeparator::new(brand_palette()).separate(&source).unwrap();

    let source_alpha: Vec<u8> = source.pixels().iter().map(|p| p.a).collect();
    let output_alpha: Vec<u8> = result.quantized.grid().pixels().iter().map(|p| p.a).collect();
    assert_eq!(source_alpha, output_alpha);
}

/// If this breaks, it means: the background rule is being combined with,
/// instead of overriding, the nearest-color match. A transparent pixel that
/// is numerically identical to a palette color must still become white.
#[test]
fn test_background_rule_precedence() {
    let palette = brand_palette();
    let pixels: Vec<Rgba> = palette.iter().map(|e| e.color.with_alpha(0)).collect();
    let source = PixelGrid::new(pixels, palette.len(), 1);

    let result = LogoSeparator::new(palette).separate(&source).unwrap();
    assert!(result
        .quantized
        .classes()
        .iter()
        .all(|c| *c == Class::Background));
    assert!(result
        .quantized
        .grid()
        .pixels()
        .iter()
        .all(|p| p.rgb() == Rgb::WHITE && p.a == 0));
}

/// If this breaks, it means: equidistant pixels are no longer resolved by
/// palette order, or a pixel got assigned to both tied entries.
#[test]
fn test_tie_break_single_assignment() {
    // (100, 0, 0) is 100 away from both (0,0,0) and (200,0,0)
    let palette = Palette::new([("left", Rgb::new(0, 0, 0)), ("right", Rgb::new(200, 0, 0))])
        .unwrap();
    let source = PixelGrid::new(vec![Rgba::new(100, 0, 0, 255); 4], 2, 2);

    let result = LogoSeparator::new(palette).separate(&source).unwrap();
    assert_eq!(result.layers[0].mark_count(), 4);
    assert_eq!(result.layers[1].mark_count(), 0);
}

// ========================================================================
// Determinism and boundaries
// ========================================================================

/// If this breaks, it means: output depends on something other than input
/// and configuration (iteration order of a hash map, for example).
#[test]
fn test_determinism() {
    let source = noise_image(50, 20, 7);
    let separator = LogoSeparator::new(brand_palette());

    let a = separator.separate(&source).unwrap();
    let b = separator.separate(&source).unwrap();

    assert_eq!(a.quantized.grid().to_rgba_bytes(), b.quantized.grid().to_rgba_bytes());
    for (la, lb) in a.layers.iter().zip(&b.layers) {
        assert_eq!(la.vector.marks, lb.vector.marks);
        assert_eq!(la.raster, lb.raster);
    }
}

/// If this breaks, it means: a single-pixel image no longer yields exactly
/// one mark in one layer and empty documents everywhere else.
#[test]
fn test_single_pixel_image() {
    let source = PixelGrid::new(vec![Rgba::new(191, 41, 43, 255)], 1, 1);
    let result = LogoSeparator::new(brand_palette()).separate(&source).unwrap();

    for layer in &result.layers {
        if layer.target.name == "red" {
            assert_eq!(layer.mark_count(), 1);
            assert_eq!(layer.raster.get(0, 0), Rgba::new(191, 41, 43, 255));
        } else {
            assert_eq!(layer.mark_count(), 0);
            assert!(layer.raster.get(0, 0).is_transparent());
        }
    }
}
