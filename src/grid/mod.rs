//! Grid module: the double-buffered cell storage.
//!
//! This module contains:
//! - [`Cell`]: one character plus one palette index
//! - [`Grid`]: a fixed-size row-major array of cells
//! - [`BufferSet`]: owner of two grids and the WRITE/READ role assignment
//! - [`Palette`]: the index-addressable color table
//! - [`Rgb`]: true-color value used by palettes

mod buffer_set;
mod cell;
#[allow(clippy::module_inception)]
mod grid;
mod palette;

pub use buffer_set::{BufferSet, Role};
pub use cell::{Cell, Rgb};
pub use grid::Grid;
pub use palette::Palette;
