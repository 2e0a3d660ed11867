use crate::math::{Point3, Real, Rotation3, Vector3};
use crate::shape::checks;
use crate::transform::{AffineTransform3, EulerAngles};
use crate::GeometryError;

/// A 3D capsule: a cylindrical body with a hemispherical cap at each end.
///
/// The canonical frame follows [`CenteredCylinder`](crate::shape::CenteredCylinder): the body
/// axis is `z`, scaled by the full `length`, and the two transverse axes are scaled by `radius`.
/// The caps are balls of radius `radius` centered at [`point1`](Self::point1) and
/// [`point2`](Self::point2).
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule3d {
    pub(crate) center: Point3,
    pub(crate) length: Real,
    pub(crate) radius: Real,
    pub(crate) angles: EulerAngles,
    pub(crate) point1: Point3,
    pub(crate) point2: Point3,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl Capsule3d {
    /// Creates a new capsule centered at `center`, with a body of length `length`.
    pub fn try_new(
        center: Point3,
        length: Real,
        radius: Real,
        angles: EulerAngles,
    ) -> Result<Self, GeometryError> {
        checks::finite_point3("center", &center)?;
        let length = checks::positive("length", length)?;
        let radius = checks::positive("radius", radius)?;
        checks::finite_angles("angles", &angles)?;

        let local_to_global = AffineTransform3::from_trs(
            &center,
            &angles.to_rotation(),
            &Vector3::new(radius, radius, length),
        );
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            length,
            radius,
            angles,
            point1: local_to_global.transform_point(&Point3::new(0.0, 0.0, -0.5)),
            point2: local_to_global.transform_point(&Point3::new(0.0, 0.0, 0.5)),
            local_to_global,
            global_to_local,
        })
    }

    /// Creates a capsule whose body axis is parallel to `z`.
    pub fn axis_aligned(center: Point3, length: Real, radius: Real) -> Result<Self, GeometryError> {
        Self::try_new(center, length, radius, EulerAngles::ZERO)
    }

    /// The center of this capsule.
    #[inline]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The length of the body of this capsule, caps excluded.
    #[inline]
    pub fn length(&self) -> Real {
        self.length
    }

    /// The radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The Euler angles, in degrees, describing the orientation of this capsule.
    #[inline]
    pub fn euler_angles(&self) -> &EulerAngles {
        &self.angles
    }

    /// The rotation described by [`Self::euler_angles`].
    #[inline]
    pub fn orientation(&self) -> Rotation3<Real> {
        self.angles.to_rotation()
    }

    /// The center of the first cap.
    #[inline]
    pub fn point1(&self) -> Point3 {
        self.point1
    }

    /// The center of the second cap.
    #[inline]
    pub fn point2(&self) -> Point3 {
        self.point2
    }
}

#[cfg(test)]
mod test {
    use super::Capsule3d;
    use crate::math::Point3;

    #[test]
    fn axis_aligned_end_points() {
        let capsule = Capsule3d::axis_aligned(Point3::new(1.0, 2.0, 3.0), 6.0, 1.0).unwrap();
        assert_eq!(capsule.point1(), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(capsule.point2(), Point3::new(1.0, 2.0, 6.0));
    }
}
