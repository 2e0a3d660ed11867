use crate::math::{Point2, Point3};
use crate::shape::{Capsule2d, Capsule3d};

// The caps are disks (or balls) in world space, but ellipses once mapped to the anisotropic
// canonical frame. So only the body is tested in canonical space.

impl Capsule2d {
    /// Tests if the given world-space point is inside of this capsule.
    pub fn contains_point(&self, pt: &Point2) -> bool {
        let local = self.global_to_local.transform_point(pt);

        if local.y.abs() > 1.0 {
            return false;
        }

        if local.x >= -0.5 && local.x <= 0.5 {
            return true;
        }

        na::distance(pt, &self.point1) <= self.radius
            || na::distance(pt, &self.point2) <= self.radius
    }
}

impl Capsule3d {
    /// Tests if the given world-space point is inside of this capsule.
    pub fn contains_point(&self, pt: &Point3) -> bool {
        let local = self.global_to_local.transform_point(pt);

        if local.x.hypot(local.y) > 1.0 {
            return false;
        }

        if local.z >= -0.5 && local.z <= 0.5 {
            return true;
        }

        na::distance(pt, &self.point1) <= self.radius
            || na::distance(pt, &self.point2) <= self.radius
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point2, Point3};
    use crate::shape::{Capsule2d, Capsule3d};
    use crate::transform::EulerAngles;

    #[test]
    fn capsule2d_body_and_caps() {
        let capsule = Capsule2d::try_new(Point2::new(0.0, 0.0), 10.0, 2.0, 0.0).unwrap();

        assert!(capsule.contains_point(&Point2::new(5.0, 0.0)));
        assert!(capsule.contains_point(&Point2::new(6.0, 0.0)));
        assert!(!capsule.contains_point(&Point2::new(8.0, 0.0)));

        assert!(capsule.contains_point(&Point2::new(0.0, 2.0)));
        assert!(!capsule.contains_point(&Point2::new(0.0, 2.1)));
        // Inside the bounding rectangle of the caps, but outside the rounded corner.
        assert!(!capsule.contains_point(&Point2::new(6.8, 1.8)));
    }

    #[test]
    fn capsule3d_rounded_ends() {
        let capsule = Capsule3d::try_new(
            Point3::new(0.0, 0.0, 0.0),
            10.0,
            2.0,
            EulerAngles::new(0.0, 90.0, 0.0),
        )
        .unwrap();

        assert!(capsule.contains_point(&Point3::new(6.9, 0.0, 0.0)));
        assert!(capsule.contains_point(&Point3::new(-6.9, 0.0, 0.0)));
        assert!(!capsule.contains_point(&Point3::new(7.1, 0.0, 0.0)));
        assert!(capsule.contains_point(&Point3::new(0.0, 1.9, 0.0)));
        assert!(!capsule.contains_point(&Point3::new(6.5, 1.5, 0.0)));
    }
}
