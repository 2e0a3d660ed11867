use crate::math::{Real, CELL_CENTER_OFFSET};
use crate::raster::fill::shape_range_3d;
use crate::raster::{DenseGrid3, FillStats, Grid3, ScanStrategy};
use crate::shape::Shape3d;
use rayon::prelude::*;

/// Writes `value` into every cell of `grid` whose center lies inside of `shape`, processing
/// `xy` slices in parallel.
///
/// Writes exactly the same cells as [`fill_shape_3d`](crate::raster::fill_shape_3d).
pub fn fill_shape_3d_par<T, S>(
    grid: &mut DenseGrid3<T>,
    shape: &S,
    value: T,
    strategy: ScanStrategy,
) -> FillStats
where
    T: Copy + Send + Sync,
    S: Shape3d + Sync + ?Sized,
{
    let width = grid.width();
    let range = shape_range_3d(shape, width, grid.height(), grid.depth(), strategy);

    if range.is_empty() {
        return FillStats::default();
    }

    let slice_len = grid.slice_len();
    let stats = grid
        .as_mut_slice()
        .par_chunks_mut(slice_len)
        .enumerate()
        .filter(|(z, _)| range.z.contains(z))
        .map(|(z, slice)| {
            let mut stats = FillStats::default();
            let pz = z as Real + CELL_CENTER_OFFSET;

            for y in range.y.clone() {
                let py = y as Real + CELL_CENTER_OFFSET;

                for x in range.x.clone() {
                    stats.visited += 1;

                    if shape.contains(x as Real + CELL_CENTER_OFFSET, py, pz) {
                        slice[x + y * width] = value;
                        stats.filled += 1;
                    }
                }
            }

            stats
        })
        .reduce(FillStats::default, |a, b| a + b);

    log::debug!(
        "{:?} ({strategy:?} parallel scan): filled {} of {} visited cells",
        shape.shape_type(),
        stats.filled,
        stats.visited
    );
    stats
}
