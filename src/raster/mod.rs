//! Rasterization of shapes into caller-owned pixel and voxel grids.
//!
//! A cell `(x, y[, z])` is filled when its sample point `(x + 0.5, y + 0.5[, z + 0.5])` lies
//! inside of the shape, boundary included. Cells are visited slice by slice, row by row, and
//! cells outside of the shape are never written.

pub use self::cell_range::{CellRange2, CellRange3};
pub use self::fill::{
    fill_2d, fill_3d, fill_shape_2d, fill_shape_3d, rasterize_2d, rasterize_3d, FillStats,
    ScanStrategy,
};
#[cfg(feature = "parallel")]
pub use self::fill_parallel::fill_shape_3d_par;
pub use self::grid::{DenseGrid2, DenseGrid3, Grid2, Grid3};

mod cell_range;
mod fill;
#[cfg(feature = "parallel")]
mod fill_parallel;
mod grid;
