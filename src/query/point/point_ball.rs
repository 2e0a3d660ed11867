use crate::math::{Point2, Point3};
use crate::shape::{Ball, Disk};

impl Disk {
    /// Tests if the given point, expressed in the canonical frame, is inside of the unit disk.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point2) -> bool {
        pt.coords.norm_squared() <= 1.0
    }

    /// Tests if the given world-space point is inside of this disk.
    #[inline]
    pub fn contains_point(&self, pt: &Point2) -> bool {
        na::distance_squared(pt, &self.center) <= self.radius * self.radius
    }
}

impl Ball {
    /// Tests if the given point, expressed in the canonical frame, is inside of the unit ball.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point3) -> bool {
        pt.coords.norm_squared() <= 1.0
    }

    /// Tests if the given world-space point is inside of this ball.
    #[inline]
    pub fn contains_point(&self, pt: &Point3) -> bool {
        na::distance_squared(pt, &self.center) <= self.radius * self.radius
    }
}
