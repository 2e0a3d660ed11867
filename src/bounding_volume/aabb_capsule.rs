use crate::bounding_volume::aabb_utils::{swept_ball_aabb, swept_disk_aabb};
use crate::bounding_volume::{Aabb2, Aabb3};
use crate::shape::{Capsule2d, Capsule3d, CenteredCylinder, Cylinder};

impl Capsule2d {
    /// The axis-aligned bounding box of this capsule.
    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        swept_disk_aabb(&self.point1, &self.point2, self.radius)
    }
}

impl Capsule3d {
    /// The axis-aligned bounding box of this capsule.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        swept_ball_aabb(&self.point1, &self.point2, self.radius)
    }
}

impl CenteredCylinder {
    /// The axis-aligned bounding box of this cylinder.
    ///
    /// This is the bounding box of the capsule with the same axis and radius, so it is not tight
    /// along the cylinder axis.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        swept_ball_aabb(&self.point1, &self.point2, self.radius)
    }
}

impl Cylinder {
    /// The axis-aligned bounding box of this cylinder.
    ///
    /// See [`CenteredCylinder::aabb`].
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        swept_ball_aabb(&self.point1, &self.point2, self.radius)
    }
}
