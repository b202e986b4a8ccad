//! Palette: ordered, index-addressable color table.
//!
//! Cells store palette indices; the presenter resolves them to [`Rgb`]
//! through the active palette. The palette is replaced wholesale, never
//! edited per-entry, so a frame is always painted against a consistent table.

use super::cell::Rgb;
use crate::actor::ConfigError;

/// The default 16-entry color table.
///
/// Index 0 (white) doubles as the fallback for out-of-range indices.
const DEFAULT_COLORS: [u32; 16] = [
    0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0x00FFFF, 0xFF00FF, 0xC0C0C0, 0x808080,
    0x800000, 0xC0C000, 0x008000, 0x800080, 0x008080, 0x000080, 0x333333,
];

/// An ordered color table addressed by cell color index.
///
/// # Out-of-range policy
///
/// A cell may carry any `u8` index; validity is never checked when drawing.
/// [`Palette::color`] resolves an index past the end of the table to entry 0,
/// uniformly, so presentation can never panic on a stray index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a color list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPalette`] if the list is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Resolve a cell color index to a color.
    ///
    /// Indices past the end of the table fall back to entry 0.
    #[inline]
    pub fn color(&self, index: u8) -> Rgb {
        self.colors
            .get(index as usize)
            .copied()
            .unwrap_or(self.colors[0])
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette is never empty; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The full color list in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Palette {
    /// The stock 16-color table.
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|&c| Rgb::from_u32(c)).collect(),
        }
    }
}
