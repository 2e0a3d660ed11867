use crate::math::Point3;
use crate::shape::{CenteredCylinder, Cylinder};

impl Cylinder {
    /// Tests if the given point, expressed in the canonical frame, is inside of the unit cylinder
    /// spanning `0 <= z <= 1`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point3) -> bool {
        pt.x.hypot(pt.y) <= 1.0 && pt.z >= 0.0 && pt.z <= 1.0
    }

    /// Tests if the given world-space point is inside of this cylinder.
    #[inline]
    pub fn contains_point(&self, pt: &Point3) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}

impl CenteredCylinder {
    /// Tests if the given point, expressed in the canonical frame, is inside of the unit cylinder
    /// spanning `-0.5 <= z <= 0.5`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point3) -> bool {
        pt.x.hypot(pt.y) <= 1.0 && pt.z.abs() <= 0.5
    }

    /// Tests if the given world-space point is inside of this cylinder.
    #[inline]
    pub fn contains_point(&self, pt: &Point3) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}
