//! Draw module: the brush-stateful primitive set over the write grid.

mod canvas;

pub use canvas::{
    Canvas, DrawState, PERIMETER_BL, PERIMETER_BR, PERIMETER_H, PERIMETER_TL, PERIMETER_TR,
    PERIMETER_V,
};
