//! Axis Aligned Bounding Box in space.

use crate::math::{Point3, Real, Vector3};
use approx::{AbsDiffEq, RelativeEq};

/// An Axis-Aligned Bounding Box (AABB) of the 3D space.
///
/// The box is described by its two extremal corners. Every shape of this crate can compute a
/// conservative world-space `Aabb3` of itself, i.e., a box enclosing every point the shape
/// contains, although not necessarily the smallest one. Rasterization uses it to restrict the
/// cells it visits.
///
/// ```
/// use digishapes::bounding_volume::Aabb3;
/// use digishapes::math::Point3;
///
/// let aabb = Aabb3::new(Point3::new(-1.0, 2.0, 0.0), Point3::new(3.0, 4.0, 8.0));
/// assert!(aabb.contains_local_point(&Point3::new(0.0, 3.0, 8.0)));
/// assert_eq!(aabb.center(), Point3::new(1.0, 3.0, 4.0));
/// assert_eq!(aabb.extents().z, 8.0);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb3 {
    /// The corner with the smallest coordinates.
    pub mins: Point3,
    /// The corner with the largest coordinates.
    pub maxs: Point3,
}

impl Aabb3 {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point3, maxs: Point3) -> Self {
        Self { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point3, half_extents: Vector3<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point3 {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector3<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// Does this AABB contain the given point, boundary included?
    #[inline]
    pub fn contains_local_point(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }
}

impl AbsDiffEq for Aabb3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}

impl RelativeEq for Aabb3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.mins.relative_eq(&other.mins, epsilon, max_relative)
            && self.maxs.relative_eq(&other.maxs, epsilon, max_relative)
    }
}
