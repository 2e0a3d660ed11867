use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::{Point2, Point3, Vector2, Vector3};
use crate::shape::{Ellipse, Ellipsoid};

// The image of the unit ball under a linear map `L` extends, along axis `i`, up to the norm of
// the i-th row of `L`.

impl Ellipse {
    /// Computes the world-space AABB of this ellipse.
    ///
    /// This is the smallest AABB enclosing the ellipse.
    pub fn aabb(&self) -> Aabb2 {
        let m = &self.local_to_global;
        let l = m.linear_part();
        let half_extents = Vector2::new(l.row(0).norm(), l.row(1).norm());

        Aabb2::from_half_extents(Point2::from(*m.translation_part()), half_extents)
    }
}

impl Ellipsoid {
    /// Computes the world-space AABB of this ellipsoid.
    ///
    /// This is the smallest AABB enclosing the ellipsoid.
    pub fn aabb(&self) -> Aabb3 {
        let m = &self.local_to_global;
        let l = m.linear_part();
        let half_extents = Vector3::new(l.row(0).norm(), l.row(1).norm(), l.row(2).norm());

        Aabb3::from_half_extents(Point3::from(*m.translation_part()), half_extents)
    }
}
