//! Ordered, named palette with nearest-color matching.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// One named palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Symbolic name, e.g. `"black"`. Unique within a palette.
    pub name: String,
    pub color: Rgb,
}

/// An ordered mapping from symbolic names to reference colors.
///
/// The palette is an explicit value handed to the quantizer, never global
/// state, so several palettes can be used side by side.
///
/// Entry order matters: it is the tie-break order for
/// [`find_nearest()`](Palette::find_nearest) and the order of the emitted
/// layers.
///
/// # Example
///
/// ```
/// use palette_layers::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&[("black", "12070a"), ("red", "bf292b")]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(1), Rgb::new(191, 41, 43));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from named colors, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::DuplicateColor`] if two entries share a color
    /// - [`PaletteError::DuplicateName`] if two entries share a name
    pub fn new<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        let entries: Vec<PaletteEntry> = entries
            .into_iter()
            .map(|(name, color)| PaletteEntry {
                name: name.into(),
                color,
            })
            .collect();

        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut colors = HashSet::new();
        let mut names = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !colors.insert(entry.color) {
                return Err(PaletteError::DuplicateColor { index });
            }
            if !names.insert(entry.name.as_str()) {
                return Err(PaletteError::DuplicateName {
                    index,
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Create a palette from `(name, hex)` pairs.
    ///
    /// Every color is parsed before validation, so a malformed hex string is
    /// reported as [`PaletteError::ParseColor`] naming the offending entry.
    pub fn from_hex(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let parsed = entries
            .iter()
            .map(|&(name, hex)| {
                Rgb::from_str(hex)
                    .map(|color| (name, color))
                    .map_err(|source| PaletteError::ParseColor {
                        name: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.entries[idx].color
    }

    #[inline]
    pub fn name(&self, idx: usize) -> &str {
        &self.entries[idx].name
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Index of the entry whose color is exactly `color`, if any.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.entries.iter().position(|e| e.color == color)
    }

    /// Find the nearest palette color by Euclidean RGB distance.
    ///
    /// Returns `(index, distance_squared)`. Squared integer distances are
    /// compared, which gives the same winner as comparing `sqrt` distances
    /// but with exact ties.
    ///
    /// Ties go to the entry that comes first in palette order: the scan only
    /// replaces the current best on a strictly smaller distance.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_layers::{Palette, Rgb};
    ///
    /// let palette = Palette::new([
    ///     ("low", Rgb::new(0, 0, 0)),
    ///     ("high", Rgb::new(20, 0, 0)),
    /// ]).unwrap();
    ///
    /// // Exactly halfway: the first entry wins
    /// let (idx, dist) = palette.find_nearest(Rgb::new(10, 0, 0));
    /// assert_eq!(idx, 0);
    /// assert_eq!(dist, 100);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        // Linear scan - palettes are a handful of brand colors
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
