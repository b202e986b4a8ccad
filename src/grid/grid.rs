//! Grid: a fixed-size array of cells in row-major order.
//!
//! Cells live in one contiguous `Vec` for cache efficiency. Dimensions are
//! fixed at construction; the engine never resizes a grid.

use super::cell::Cell;

/// A fixed W×H grid of [`Cell`]s.
///
/// Access is row-major: `index = y * width + x`. All coordinate access is
/// bounds-checked; out-of-range writes are dropped, never an error.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in characters.
    width: u16,
    /// Height in characters.
    height: u16,
}

impl Grid {
    /// Create a grid with every cell set to [`Cell::EMPTY`].
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Engine construction validates
    /// dimensions before this is reached; direct callers get the same
    /// fail-fast behavior.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be non-zero");
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Width in characters.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in characters.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false after construction; kept for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The underlying cell slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) to a linear index.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get the cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell at (x, y).
    ///
    /// Returns `false` if the coordinates were out of bounds (the write is
    /// silently dropped — clipping, not an error).
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Copy the full contents of another grid into this one.
    ///
    /// The grids must have identical dimensions; the engine only ever pairs
    /// grids created together.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.width, other.width);
        debug_assert_eq!(self.height, other.height);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Iterate over rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_is_all_default() {
        for (w, h) in [(1, 1), (96, 54), (3, 7)] {
            let grid = Grid::new(w, h);
            assert_eq!(grid.len(), usize::from(w) * usize::from(h));
            assert!(grid.cells().iter().all(|&c| c == Cell::EMPTY));
        }
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_grid_zero_width_panics() {
        Grid::new(0, 24);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_grid_zero_height_panics() {
        Grid::new(80, 0);
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(96, 54);
        assert!(grid.set(5, 10, Cell::new('X', 3)));
        assert_eq!(grid.get(5, 10), Some(&Cell::new('X', 3)));
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new(96, 54);
        assert!(grid.get(95, 53).is_some());
        assert!(grid.get(96, 53).is_none());
        assert!(grid.get(95, 54).is_none());
        assert!(!grid.set(96, 0, Cell::new('X', 0)));
    }

    #[test]
    fn test_grid_index_row_major() {
        let grid = Grid::new(96, 54);
        assert_eq!(grid.index_of(5, 10), Some(10 * 96 + 5));
        assert_eq!(grid.index_of(0, 0), Some(0));
    }

    #[test]
    fn test_grid_clear() {
        let mut grid = Grid::new(10, 10);
        grid.set(3, 3, Cell::new('X', 1));
        grid.clear();
        assert_eq!(grid.get(3, 3), Some(&Cell::EMPTY));
    }

    #[test]
    fn test_grid_copy_from() {
        let mut a = Grid::new(10, 10);
        let mut b = Grid::new(10, 10);
        b.set(2, 2, Cell::new('B', 5));
        a.copy_from(&b);
        assert_eq!(a.get(2, 2), Some(&Cell::new('B', 5)));
    }

    #[test]
    fn test_grid_rows() {
        let grid = Grid::new(8, 4);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 8));
    }
}
