use crate::math::{Point3, Real, Rotation3, Vector3};
use crate::shape::checks;
use crate::transform::{AffineTransform3, EulerAngles};
use crate::GeometryError;

/// An ellipsoid given by its center, its three semi-axis lengths, and its orientation.
///
/// In canonical space, the ellipsoid is the unit ball: a point `(x, y, z)` is inside if
/// `x² + y² + z² <= 1`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    pub(crate) center: Point3,
    pub(crate) radii: Vector3<Real>,
    pub(crate) angles: EulerAngles,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl Ellipsoid {
    /// Creates a new ellipsoid.
    ///
    /// The `radii` are the semi-axis lengths along the three axes of the ellipsoid, before
    /// rotation.
    pub fn try_new(
        center: Point3,
        radii: Vector3<Real>,
        angles: EulerAngles,
    ) -> Result<Self, GeometryError> {
        checks::finite_point3("center", &center)?;
        let radii = Vector3::new(
            checks::positive("radius1", radii.x)?,
            checks::positive("radius2", radii.y)?,
            checks::positive("radius3", radii.z)?,
        );
        checks::finite_angles("angles", &angles)?;

        let local_to_global = AffineTransform3::from_trs(&center, &angles.to_rotation(), &radii);
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            radii,
            angles,
            local_to_global,
            global_to_local,
        })
    }

    /// The center of this ellipsoid.
    #[inline]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The three semi-axis lengths of this ellipsoid.
    #[inline]
    pub fn radii(&self) -> &Vector3<Real> {
        &self.radii
    }

    /// The Euler angles, in degrees, describing the orientation of this ellipsoid.
    #[inline]
    pub fn euler_angles(&self) -> &EulerAngles {
        &self.angles
    }

    /// The rotation described by [`Self::euler_angles`].
    #[inline]
    pub fn orientation(&self) -> Rotation3<Real> {
        self.angles.to_rotation()
    }
}
