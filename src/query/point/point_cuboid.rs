use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::{Point2, Point3};
use crate::shape::{Cube, Cuboid, OrientedBox};

#[inline]
fn unit_square() -> Aabb2 {
    Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0))
}

#[inline]
fn unit_cube() -> Aabb3 {
    Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
}

impl OrientedBox {
    /// Tests if the given point, expressed in the canonical frame, is inside of `[-1, 1]²`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point2) -> bool {
        unit_square().contains_local_point(pt)
    }

    /// Tests if the given world-space point is inside of this box.
    #[inline]
    pub fn contains_point(&self, pt: &Point2) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}

impl Cube {
    /// Tests if the given point, expressed in the canonical frame, is inside of `[-1, 1]³`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point3) -> bool {
        unit_cube().contains_local_point(pt)
    }

    /// Tests if the given world-space point is inside of this cube.
    #[inline]
    pub fn contains_point(&self, pt: &Point3) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}

impl Cuboid {
    /// Tests if the given point, expressed in the canonical frame, is inside of `[-1, 1]³`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point3) -> bool {
        unit_cube().contains_local_point(pt)
    }

    /// Tests if the given world-space point is inside of this cuboid.
    #[inline]
    pub fn contains_point(&self, pt: &Point3) -> bool {
        self.contains_local_point(&self.global_to_local.transform_point(pt))
    }
}
