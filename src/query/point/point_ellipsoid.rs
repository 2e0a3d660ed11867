use crate::math::{Point2, Point3};
use crate::shape::{Ellipse, Ellipsoid};

impl Ellipse {
    /// Tests if the given point, expressed in the canonical frame, is inside of the unit disk.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point2) -> bool {
        pt.coords.norm_squared() <= 1.0
    }

    /// Tests if the given world-space point is inside of this ellipse.
    #[inline]
    pub fn contains_point(&self, pt: &Point2) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}

impl Ellipsoid {
    /// Tests if the given point, expressed in the canonical frame, is inside of the unit ball.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point3) -> bool {
        pt.coords.norm_squared() <= 1.0
    }

    /// Tests if the given world-space point is inside of this ellipsoid.
    #[inline]
    pub fn contains_point(&self, pt: &Point3) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}
