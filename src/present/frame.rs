//! Frame: the owned snapshot handed to the presentation consumer.

use crate::grid::Grid;

/// A finished frame: two equal-length row-major sequences, characters and
/// palette indices, cloned from the read grid immediately after a swap.
///
/// Owning the data keeps the presenter fully decoupled from the buffer set —
/// it can paint at its own pace while the render loop composes the next
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Width in characters.
    pub width: u16,
    /// Height in characters.
    pub height: u16,
    /// Characters, row-major, `width * height` entries.
    pub chars: Vec<char>,
    /// Palette indices, row-major, `width * height` entries.
    pub colors: Vec<u8>,
}

impl Frame {
    /// Snapshot a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            chars: grid.cells().iter().map(|c| c.ch).collect(),
            colors: grid.cells().iter().map(|c| c.color).collect(),
        }
    }

    /// The character at (x, y).
    ///
    /// Returns `None` out of bounds.
    #[inline]
    pub fn char_at(&self, x: u16, y: u16) -> Option<char> {
        self.index_of(x, y).map(|i| self.chars[i])
    }

    /// The palette index at (x, y).
    ///
    /// Returns `None` out of bounds.
    #[inline]
    pub fn color_at(&self, x: u16, y: u16) -> Option<u8> {
        self.index_of(x, y).map(|i| self.colors[i])
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }
}
