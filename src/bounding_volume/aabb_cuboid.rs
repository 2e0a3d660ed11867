use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::{Point2, Point3, Vector2, Vector3};
use crate::shape::{Cube, Cuboid, OrientedBox};

// The canonical box is `[-1, 1]^n`, so its transformed half extents are the row sums of the
// absolute linear part.

impl OrientedBox {
    /// Computes the world-space AABB of this box.
    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        let m = &self.local_to_global;
        let center = Point2::from(*m.translation_part());
        let ws_half_extents = m.absolute_transform_vector(&Vector2::repeat(1.0));

        Aabb2::from_half_extents(center, ws_half_extents)
    }
}

impl Cube {
    /// Computes the world-space AABB of this cube.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        let m = &self.local_to_global;
        let center = Point3::from(*m.translation_part());
        let ws_half_extents = m.absolute_transform_vector(&Vector3::repeat(1.0));

        Aabb3::from_half_extents(center, ws_half_extents)
    }
}

impl Cuboid {
    /// Computes the world-space AABB of this cuboid.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        let m = &self.local_to_global;
        let center = Point3::from(*m.translation_part());
        let ws_half_extents = m.absolute_transform_vector(&Vector3::repeat(1.0));

        Aabb3::from_half_extents(center, ws_half_extents)
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::Aabb3;
    use crate::math::{Point3, Real, Vector3};
    use crate::shape::Cuboid;
    use crate::transform::EulerAngles;

    #[test]
    fn rotated_cuboid_aabb_is_the_corner_aabb() {
        let cuboid = Cuboid::try_new(
            Point3::new(5.0, -2.0, 1.0),
            Vector3::new(6.0, 2.0, 3.0),
            EulerAngles::new(25.0, 40.0, -70.0),
        )
        .unwrap();

        let corners = (0..8).map(|i| {
            let local = Point3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            cuboid.local_to_global.transform_point(&local)
        });
        let empty = Aabb3::new(
            Point3::from(Vector3::repeat(Real::MAX)),
            Point3::from(Vector3::repeat(Real::MIN)),
        );
        let expected = corners.fold(empty, |aabb, pt| {
            Aabb3::new(aabb.mins.inf(&pt), aabb.maxs.sup(&pt))
        });

        assert_relative_eq!(cuboid.aabb(), expected, epsilon = 1.0e-12);
    }
}
