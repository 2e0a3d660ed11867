use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::{Vector2, Vector3};
use crate::shape::{Ball, Disk};

impl Disk {
    /// Computes the world-space AABB of this disk.
    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_half_extents(self.center, Vector2::repeat(self.radius))
    }
}

impl Ball {
    /// Computes the world-space AABB of this ball.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::from_half_extents(self.center, Vector3::repeat(self.radius))
    }
}
