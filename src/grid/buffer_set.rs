//! `BufferSet`: the double buffer at the heart of the engine.
//!
//! One value owns both grids and the role assignment. At any moment exactly
//! one grid is in WRITE role (the canvas draws into it) and one is in READ
//! role (the presenter samples it). Roles flip only inside [`BufferSet::swap`],
//! which the render loop calls exactly once per iteration after the draw
//! callback returns. Because draw calls and presentation always target
//! different grids, the role split is the engine's sole concurrency-safety
//! mechanism — there are no locks anywhere in the draw path.

use super::grid::Grid;

/// Which physical grid currently holds the front (READ) role.
///
/// An explicit tag instead of a raw boolean so the two assignments are
/// self-documenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Grid A is front (READ); grid B is back (WRITE).
    FrontIsA,
    /// Grid B is front (READ); grid A is back (WRITE).
    FrontIsB,
}

impl Role {
    /// The flipped assignment.
    #[inline]
    const fn flipped(self) -> Self {
        match self {
            Self::FrontIsA => Self::FrontIsB,
            Self::FrontIsB => Self::FrontIsA,
        }
    }
}

/// Owner of the two grids plus the WRITE/READ role assignment.
#[derive(Debug, Clone)]
pub struct BufferSet {
    grid_a: Grid,
    grid_b: Grid,
    role: Role,
}

impl BufferSet {
    /// Create a buffer set with two fresh grids of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero (see [`Grid::new`]).
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid_a: Grid::new(width, height),
            grid_b: Grid::new(width, height),
            role: Role::FrontIsA,
        }
    }

    /// Grid width in characters.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.grid_a.width()
    }

    /// Grid height in characters.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.grid_a.height()
    }

    /// The current role assignment.
    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The grid currently in READ role.
    ///
    /// The reference is only meaningful until the next [`swap`](Self::swap);
    /// consumers must refetch rather than cache across a swap boundary.
    #[inline]
    pub const fn read_grid(&self) -> &Grid {
        match self.role {
            Role::FrontIsA => &self.grid_a,
            Role::FrontIsB => &self.grid_b,
        }
    }

    /// The grid currently in WRITE role.
    #[inline]
    pub const fn write_grid(&self) -> &Grid {
        match self.role {
            Role::FrontIsA => &self.grid_b,
            Role::FrontIsB => &self.grid_a,
        }
    }

    /// Mutable access to the grid currently in WRITE role.
    #[inline]
    pub const fn write_grid_mut(&mut self) -> &mut Grid {
        match self.role {
            Role::FrontIsA => &mut self.grid_b,
            Role::FrontIsB => &mut self.grid_a,
        }
    }

    /// Flip the WRITE/READ roles. O(1).
    ///
    /// Called exactly once per render iteration, after all draw calls for
    /// that iteration have completed and before the frame is published.
    /// Applied twice it restores the original assignment.
    #[inline]
    pub fn swap(&mut self) {
        self.role = self.role.flipped();
    }

    /// Reset the WRITE grid to all-default cells.
    ///
    /// The READ grid is untouched, so a consumer still sees the prior frame
    /// while the next one is being composed.
    pub fn clear(&mut self) {
        self.write_grid_mut().clear();
    }

    /// Copy the full WRITE grid contents into the READ grid.
    ///
    /// Used when the application does not clear every frame but wants
    /// incremental drawing to persist across the swap. Full-grid copy, not a
    /// diff. Contract: call only from the context that owns the write grid,
    /// at most once per iteration, immediately before [`swap`](Self::swap) —
    /// a concurrent presenter read of the grid being overwritten is a tear.
    pub fn sync_buffer(&mut self) {
        match self.role {
            Role::FrontIsA => self.grid_a.copy_from(&self.grid_b),
            Role::FrontIsB => self.grid_b.copy_from(&self.grid_a),
        }
    }
}
