use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::Real;
use core::ops::Range;

/// The range of cell indices, along one axis of extent `extent`, that may have their sample
/// point within `[min, max]`.
///
/// Bounds are rounded outward and clamped to `[0, extent - 1]`. A NaN bound leaves that side
/// unrestricted.
fn axis_range(min: Real, max: Real, extent: usize) -> Range<usize> {
    if extent == 0 {
        return 0..0;
    }

    let lo = min.floor().max(0.0);
    let hi = max.ceil().min((extent - 1) as Real);

    if hi < lo {
        0..0
    } else {
        lo as usize..hi as usize + 1
    }
}

/// A rectangular block of cells of a 2D grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRange2 {
    /// The column indices.
    pub x: Range<usize>,
    /// The row indices.
    pub y: Range<usize>,
}

impl CellRange2 {
    /// All the cells of a grid of the given extents.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            x: 0..width,
            y: 0..height,
        }
    }

    /// The cells of a grid of the given extents whose sample point may lie within `aabb`.
    pub fn from_aabb(aabb: &Aabb2, width: usize, height: usize) -> Self {
        Self {
            x: axis_range(aabb.mins.x, aabb.maxs.x, width),
            y: axis_range(aabb.mins.y, aabb.maxs.y, height),
        }
    }

    /// Does this block contain no cell at all?
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// The number of cells in this block.
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }
}

/// A box-shaped block of cells of a 3D grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRange3 {
    /// The column indices.
    pub x: Range<usize>,
    /// The row indices.
    pub y: Range<usize>,
    /// The slice indices.
    pub z: Range<usize>,
}

impl CellRange3 {
    /// All the cells of a grid of the given extents.
    pub fn full(width: usize, height: usize, depth: usize) -> Self {
        Self {
            x: 0..width,
            y: 0..height,
            z: 0..depth,
        }
    }

    /// The cells of a grid of the given extents whose sample point may lie within `aabb`.
    pub fn from_aabb(aabb: &Aabb3, width: usize, height: usize, depth: usize) -> Self {
        Self {
            x: axis_range(aabb.mins.x, aabb.maxs.x, width),
            y: axis_range(aabb.mins.y, aabb.maxs.y, height),
            z: axis_range(aabb.mins.z, aabb.maxs.z, depth),
        }
    }

    /// Does this block contain no cell at all?
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// The number of cells in this block.
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }
}

#[cfg(test)]
mod test {
    use super::{axis_range, CellRange2, CellRange3};
    use crate::bounding_volume::{Aabb2, Aabb3};
    use crate::math::{Point2, Point3, Real};

    #[test]
    fn bounds_are_rounded_outward_and_clamped() {
        assert_eq!(axis_range(2.7, 5.2, 10), 2..7);
        assert_eq!(axis_range(-3.0, 4.0, 10), 0..5);
        assert_eq!(axis_range(7.5, 40.0, 10), 7..10);
        assert_eq!(axis_range(3.0, 3.0, 10), 3..4);
    }

    #[test]
    fn out_of_grid_bounds_give_empty_ranges() {
        assert!(axis_range(12.0, 15.0, 10).is_empty());
        assert!(axis_range(-5.0, -1.5, 10).is_empty());
        assert!(axis_range(0.0, 5.0, 0).is_empty());
        assert!(axis_range(Real::INFINITY, Real::INFINITY, 10).is_empty());
    }

    #[test]
    fn nan_bounds_fall_back_to_the_full_axis() {
        assert_eq!(axis_range(Real::NAN, Real::NAN, 10), 0..10);
        assert_eq!(axis_range(Real::NEG_INFINITY, Real::INFINITY, 10), 0..10);
    }

    #[test]
    fn ranges_from_aabbs() {
        let aabb = Aabb2::new(Point2::new(1.2, -4.0), Point2::new(3.8, 2.5));
        let range = CellRange2::from_aabb(&aabb, 100, 100);
        assert_eq!(range, CellRange2 { x: 1..5, y: 0..4 });
        assert_eq!(range.len(), 16);
        assert_eq!(CellRange2::full(3, 7).len(), 21);

        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 50.0), Point3::new(2.0, 2.0, 60.0));
        assert!(CellRange3::from_aabb(&aabb, 10, 10, 10).is_empty());
        assert!(!CellRange3::full(1, 1, 1).is_empty());
    }
}
