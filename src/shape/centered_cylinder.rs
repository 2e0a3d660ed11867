use crate::math::{Point3, Real, Rotation3, Vector3};
use crate::shape::checks;
use crate::transform::{AffineTransform3, EulerAngles};
use crate::GeometryError;

/// A cylinder given by its center, its length, its radius, and its orientation.
///
/// The canonical cylinder has unit radius, its axis along `z`, and spans `-0.5 <= z <= 0.5`:
/// the `z` axis is scaled by the full `length` while the two other axes are scaled by `radius`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct CenteredCylinder {
    pub(crate) center: Point3,
    pub(crate) length: Real,
    pub(crate) radius: Real,
    pub(crate) angles: EulerAngles,
    pub(crate) point1: Point3,
    pub(crate) point2: Point3,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl CenteredCylinder {
    /// Creates a new cylinder centered at `center`.
    ///
    /// With zero Euler angles, the cylinder axis is parallel to `z`.
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

    /// Creates a cylinder whose axis is parallel to `z`.
    pub fn axis_aligned(center: Point3, length: Real, radius: Real) -> Result<Self, GeometryError> {
        Self::try_new(center, length, radius, EulerAngles::ZERO)
    }

    /// The center of this cylinder.
    #[inline]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The distance between the two end disks.
    #[inline]
    pub fn length(&self) -> Real {
        self.length
    }

    /// The radius of this cylinder.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The Euler angles, in degrees, describing the orientation of this cylinder.
    #[inline]
    pub fn euler_angles(&self) -> &EulerAngles {
        &self.angles
    }

    /// The rotation described by [`Self::euler_angles`].
    #[inline]
    pub fn orientation(&self) -> Rotation3<Real> {
        self.angles.to_rotation()
    }

    /// The center of the first end disk.
    #[inline]
    pub fn point1(&self) -> Point3 {
        self.point1
    }

    /// The center of the second end disk.
    #[inline]
    pub fn point2(&self) -> Point3 {
        self.point2
    }
}
