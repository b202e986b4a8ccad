//! Canvas: the stateful drawing surface over the write grid.
//!
//! A [`Canvas`] is handed to the application's render callback each
//! iteration. It pairs the persistent brush state with clipped primitive
//! operations that mutate the grid currently in WRITE role. Every primitive
//! fetches the write grid fresh from the [`BufferSet`] — references are never
//! cached across calls, so a swap can never leave a primitive writing into
//! the grid the presenter is reading.

use crate::grid::{BufferSet, Cell};
use unicode_width::UnicodeWidthChar;

/// Horizontal edge glyph used by [`Canvas::draw_perimeter`].
pub const PERIMETER_H: char = '═';
/// Vertical edge glyph used by [`Canvas::draw_perimeter`].
pub const PERIMETER_V: char = '║';
/// Top-left corner glyph used by [`Canvas::draw_perimeter`].
pub const PERIMETER_TL: char = '╔';
/// Top-right corner glyph used by [`Canvas::draw_perimeter`].
pub const PERIMETER_TR: char = '╗';
/// Bottom-left corner glyph used by [`Canvas::draw_perimeter`].
pub const PERIMETER_BL: char = '╚';
/// Bottom-right corner glyph used by [`Canvas::draw_perimeter`].
pub const PERIMETER_BR: char = '╝';

/// The persistent brush: current draw character and palette index.
///
/// Lives in the render actor for the life of the engine — it is not
/// buffer-scoped and survives across draw calls and swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawState {
    /// Character written by the primitives.
    pub brush: char,
    /// Palette index written by the primitives. Not validated at set time;
    /// out-of-range indices resolve to palette entry 0 at presentation.
    pub color: u8,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            brush: ' ',
            color: 0,
        }
    }
}

/// The drawing surface handed to `Game::on_render`.
///
/// Coordinates are signed so shapes can start off-grid; every cell write is
/// clipped independently to `[0, width) × [0, height)`. Out-of-bounds writes
/// are dropped silently — clipping is never an error.
pub struct Canvas<'a> {
    buffers: &'a mut BufferSet,
    state: &'a mut DrawState,
}

impl<'a> Canvas<'a> {
    /// Wrap the buffer set and brush state for one render iteration.
    pub fn new(buffers: &'a mut BufferSet, state: &'a mut DrawState) -> Self {
        Self { buffers, state }
    }

    /// Canvas width in characters.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.buffers.width()
    }

    /// Canvas height in characters.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.buffers.height()
    }

    /// Set the palette index for subsequent draws.
    ///
    /// No validation happens here; a stray index surfaces as palette entry 0
    /// at presentation time.
    #[inline]
    pub fn set_color(&mut self, color: u8) {
        self.state.color = color;
    }

    /// Set the brush character for subsequent draws.
    #[inline]
    pub fn set_brush(&mut self, brush: char) {
        self.state.brush = brush;
    }

    /// The current brush character.
    #[inline]
    pub fn brush(&self) -> char {
        self.state.brush
    }

    /// The current palette index.
    #[inline]
    pub fn color(&self) -> u8 {
        self.state.color
    }

    /// Wipe the write grid to all-default cells.
    ///
    /// Normally called at the start of every frame; the read grid (the frame
    /// the presenter is showing) is untouched.
    pub fn clear(&mut self) {
        self.buffers.clear();
    }

    /// Copy the write grid into the read grid so incremental drawing
    /// persists across the swap.
    ///
    /// Only for applications that do *not* call [`clear`](Self::clear) every
    /// frame; call at most once per iteration, at the end of the draw
    /// callback. A full-grid copy — and a tearing risk if the presenter is
    /// mid-read, which is why it belongs at the end of the draw callback and
    /// nowhere else.
    pub fn sync_buffer(&mut self) {
        self.buffers.sync_buffer();
    }

    /// Paint a single cell with the brush settings. Clipped.
    #[inline]
    pub fn point(&mut self, x: i32, y: i32) {
        let cell = Cell::new(self.state.brush, self.state.color);
        Self::put(self.buffers, x, y, cell);
    }

    /// Draw a horizontal or vertical line of `len` cells from (x, y),
    /// extending toward +x or +y. Each cell is clipped independently, so a
    /// line that starts or ends off-grid draws only its visible portion
    /// without shifting the remainder.
    pub fn line(&mut self, x: i32, y: i32, len: i32, vertical: bool) {
        let cell = Cell::new(self.state.brush, self.state.color);
        for i in 0..len.max(0) {
            if vertical {
                Self::put(self.buffers, x, y + i, cell);
            } else {
                Self::put(self.buffers, x + i, y, cell);
            }
        }
    }

    /// Draw a rectangle with the brush settings.
    ///
    /// Filled: every cell in the region, clipped per cell. Outline: the four
    /// edges as line draws — the corner cells are written twice, which is
    /// harmless because writing the same brush and color is idempotent.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        if filled {
            let cell = Cell::new(self.state.brush, self.state.color);
            for iy in 0..h {
                for ix in 0..w {
                    Self::put(self.buffers, x + ix, y + iy, cell);
                }
            }
        } else {
            self.line(x, y, w, false);
            self.line(x, y + h - 1, w, false);
            self.line(x, y, h, true);
            self.line(x + w - 1, y, h, true);
        }
    }

    /// Draw a double-ruled box outline in the current color.
    ///
    /// Horizontal edges use `═`, vertical edges `║`, and the four corners
    /// `╔ ╗ ╚ ╝`. Corners are written after the edges, so they win at the
    /// corner cells. For degenerate boxes (`w < 2` or `h < 2`) the edge runs
    /// are empty and the corners are still written, in the fixed order
    /// top-left, top-right, bottom-left, bottom-right — at overlapping cells
    /// the last corner in that order is what remains.
    ///
    /// The brush character is saved on entry and restored on exit; the color
    /// is whatever the caller last set and is used for all parts.
    pub fn draw_perimeter(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let saved_brush = self.state.brush;

        self.set_brush(PERIMETER_H);
        self.line(x + 1, y, w - 2, false);
        self.line(x + 1, y + h - 1, w - 2, false);

        self.set_brush(PERIMETER_V);
        self.line(x, y + 1, h - 2, true);
        self.line(x + w - 1, y + 1, h - 2, true);

        self.set_brush(PERIMETER_TL);
        self.point(x, y);
        self.set_brush(PERIMETER_TR);
        self.point(x + w - 1, y);
        self.set_brush(PERIMETER_BL);
        self.point(x, y + h - 1);
        self.set_brush(PERIMETER_BR);
        self.point(x + w - 1, y + h - 1);

        self.state.brush = saved_brush;
    }

    /// Write a string left-to-right starting at (x, y), in the current
    /// color, advancing by display width. Zero-width characters are skipped;
    /// each written cell is clipped independently. Returns the number of
    /// columns advanced.
    pub fn text(&mut self, x: i32, y: i32, text: &str) -> i32 {
        let mut col = x;
        for ch in text.chars() {
            let Some(width) = ch.width().filter(|&w| w > 0) else {
                continue;
            };
            let cell = Cell::new(ch, self.state.color);
            Self::put(self.buffers, col, y, cell);
            col += i32::try_from(width).unwrap_or(1);
        }
        col - x
    }

    // The one place a cell write happens: refetch the write grid, clip, put.
    #[inline]
    fn put(buffers: &mut BufferSet, x: i32, y: i32, cell: Cell) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        buffers.write_grid_mut().set(x, y, cell);
    }
}
