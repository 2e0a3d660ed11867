use crate::math::{Real, CELL_CENTER_OFFSET};
use crate::raster::{CellRange2, CellRange3, DenseGrid2, DenseGrid3, Grid2, Grid3};
use crate::shape::{Shape2d, Shape3d};
use core::ops::{Add, AddAssign};
use num::Zero;

/// Selects which cells of a grid are tested against a shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(rename_all = "snake_case"))]
pub enum ScanStrategy {
    /// Test every cell of the grid.
    Full,
    /// Test only the cells covered by the shape's AABB, clamped to the grid.
    #[default]
    Bounded,
}

/// Counters reported by a fill.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FillStats {
    /// The number of cells whose sample point was tested.
    pub visited: usize,
    /// The number of cells that were written.
    pub filled: usize,
}

impl Add for FillStats {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            visited: self.visited + rhs.visited,
            filled: self.filled + rhs.filled,
        }
    }
}

impl AddAssign for FillStats {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[inline]
fn sample(i: usize) -> Real {
    i as Real + CELL_CENTER_OFFSET
}

fn fill_range_2d<G, F>(
    grid: &mut G,
    range: &CellRange2,
    mut predicate: F,
    value: G::Sample,
) -> FillStats
where
    G: Grid2 + ?Sized,
    F: FnMut(usize, usize) -> bool,
{
    let mut stats = FillStats::default();

    for y in range.y.clone() {
        for x in range.x.clone() {
            stats.visited += 1;

            if predicate(x, y) {
                grid.set(x, y, value);
                stats.filled += 1;
            }
        }
    }

    stats
}

pub(crate) fn fill_range_3d<G, F>(
    grid: &mut G,
    range: &CellRange3,
    mut predicate: F,
    value: G::Sample,
) -> FillStats
where
    G: Grid3 + ?Sized,
    F: FnMut(usize, usize, usize) -> bool,
{
    let mut stats = FillStats::default();

    for z in range.z.clone() {
        for y in range.y.clone() {
            for x in range.x.clone() {
                stats.visited += 1;

                if predicate(x, y, z) {
                    grid.set(x, y, z, value);
                    stats.filled += 1;
                }
            }
        }
    }

    stats
}

/// Sets every cell `(x, y)` of `grid` for which `predicate(x, y)` holds to `value`.
///
/// Every cell is visited, row by row. Cells failing the predicate are left untouched.
pub fn fill_2d<G, F>(grid: &mut G, predicate: F, value: G::Sample) -> FillStats
where
    G: Grid2 + ?Sized,
    F: FnMut(usize, usize) -> bool,
{
    let range = CellRange2::full(grid.width(), grid.height());
    fill_range_2d(grid, &range, predicate, value)
}

/// Sets every cell `(x, y, z)` of `grid` for which `predicate(x, y, z)` holds to `value`.
///
/// Every cell is visited, slice by slice, then row by row. Cells failing the predicate are left
/// untouched.
pub fn fill_3d<G, F>(grid: &mut G, predicate: F, value: G::Sample) -> FillStats
where
    G: Grid3 + ?Sized,
    F: FnMut(usize, usize, usize) -> bool,
{
    let range = CellRange3::full(grid.width(), grid.height(), grid.depth());
    fill_range_3d(grid, &range, predicate, value)
}

/// Writes `value` into every cell of `grid` whose center lies inside of `shape`.
///
/// The center of the cell `(x, y)` is the point `(x + 0.5, y + 0.5)`. With
/// [`ScanStrategy::Bounded`], only the cells overlapping the shape's AABB are tested; both
/// strategies write exactly the same cells.
pub fn fill_shape_2d<G, S>(
    grid: &mut G,
    shape: &S,
    value: G::Sample,
    strategy: ScanStrategy,
) -> FillStats
where
    G: Grid2 + ?Sized,
    S: Shape2d + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());
    let range = match strategy {
        ScanStrategy::Full => CellRange2::full(width, height),
        ScanStrategy::Bounded => CellRange2::from_aabb(&shape.aabb(), width, height),
    };

    if range.is_empty() {
        log::trace!(
            "{:?} does not overlap the {width}x{height} grid",
            shape.shape_type()
        );
    }

    let stats = fill_range_2d(
        grid,
        &range,
        |x, y| shape.contains(sample(x), sample(y)),
        value,
    );

    log::debug!(
        "{:?} ({strategy:?} scan): filled {} of {} visited cells",
        shape.shape_type(),
        stats.filled,
        stats.visited
    );
    stats
}

/// Writes `value` into every cell of `grid` whose center lies inside of `shape`.
///
/// See [`fill_shape_2d`].
pub fn fill_shape_3d<G, S>(
    grid: &mut G,
    shape: &S,
    value: G::Sample,
    strategy: ScanStrategy,
) -> FillStats
where
    G: Grid3 + ?Sized,
    S: Shape3d + ?Sized,
{
    let range = shape_range_3d(shape, grid.width(), grid.height(), grid.depth(), strategy);

    let stats = fill_range_3d(
        grid,
        &range,
        |x, y, z| shape.contains(sample(x), sample(y), sample(z)),
        value,
    );

    log::debug!(
        "{:?} ({strategy:?} scan): filled {} of {} visited cells",
        shape.shape_type(),
        stats.filled,
        stats.visited
    );
    stats
}

pub(crate) fn shape_range_3d<S: Shape3d + ?Sized>(
    shape: &S,
    width: usize,
    height: usize,
    depth: usize,
    strategy: ScanStrategy,
) -> CellRange3 {
    let range = match strategy {
        ScanStrategy::Full => CellRange3::full(width, height, depth),
        ScanStrategy::Bounded => CellRange3::from_aabb(&shape.aabb(), width, height, depth),
    };

    if range.is_empty() {
        log::trace!(
            "{:?} does not overlap the {width}x{height}x{depth} grid",
            shape.shape_type()
        );
    }

    range
}

/// Allocates a zeroed `width x height` grid and fills `shape` into it.
pub fn rasterize_2d<T, S>(width: usize, height: usize, shape: &S, fill: T) -> DenseGrid2<T>
where
    T: Copy + Zero,
    S: Shape2d + ?Sized,
{
    let mut grid = DenseGrid2::zeros(width, height);
    let _ = fill_shape_2d(&mut grid, shape, fill, ScanStrategy::Bounded);
    grid
}

/// Allocates a zeroed `width x height x depth` grid and fills `shape` into it.
pub fn rasterize_3d<T, S>(
    width: usize,
    height: usize,
    depth: usize,
    shape: &S,
    fill: T,
) -> DenseGrid3<T>
where
    T: Copy + Zero,
    S: Shape3d + ?Sized,
{
    let mut grid = DenseGrid3::zeros(width, height, depth);
    let _ = fill_shape_3d(&mut grid, shape, fill, ScanStrategy::Bounded);
    grid
}
