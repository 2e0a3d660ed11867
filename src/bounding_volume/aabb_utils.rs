use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::{Point2, Point3, Real, Vector2, Vector3};

/// The AABB of all the points within `radius` of the segment `[a, b]`.
#[inline]
pub(crate) fn swept_disk_aabb(a: &Point2, b: &Point2, radius: Real) -> Aabb2 {
    let mins = a.coords.inf(&b.coords) - Vector2::repeat(radius);
    let maxs = a.coords.sup(&b.coords) + Vector2::repeat(radius);
    Aabb2::new(mins.into(), maxs.into())
}

/// The AABB of all the points within `radius` of the segment `[a, b]`.
#[inline]
pub(crate) fn swept_ball_aabb(a: &Point3, b: &Point3, radius: Real) -> Aabb3 {
    let mins = a.coords.inf(&b.coords) - Vector3::repeat(radius);
    let maxs = a.coords.sup(&b.coords) + Vector3::repeat(radius);
    Aabb3::new(mins.into(), maxs.into())
}
