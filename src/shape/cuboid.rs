use crate::math::{Point3, Real, Rotation3, Vector3};
use crate::shape::checks;
use crate::transform::{AffineTransform3, EulerAngles};
use crate::GeometryError;

/// A rectangular box of the space, rotated about its center.
///
/// The canonical shape is `[-1, 1]³`, scaled by half the three side lengths, then rotated by the
/// Euler angles.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    pub(crate) center: Point3,
    pub(crate) sizes: Vector3<Real>,
    pub(crate) angles: EulerAngles,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl Cuboid {
    /// Creates a new cuboid.
    ///
    /// The `sizes` are the full side lengths along the three axes of the box, before rotation.
    pub fn try_new(
        center: Point3,
        sizes: Vector3<Real>,
        angles: EulerAngles,
    ) -> Result<Self, GeometryError> {
        checks::finite_point3("center", &center)?;
        let sizes = Vector3::new(
            checks::positive("size1", sizes.x)?,
            checks::positive("size2", sizes.y)?,
            checks::positive("size3", sizes.z)?,
        );
        checks::finite_angles("angles", &angles)?;

        let local_to_global =
            AffineTransform3::from_trs(&center, &angles.to_rotation(), &(sizes * 0.5));
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            sizes,
            angles,
            local_to_global,
            global_to_local,
        })
    }

    /// Creates a cuboid whose faces are parallel to the coordinate planes.
    pub fn axis_aligned(center: Point3, sizes: Vector3<Real>) -> Result<Self, GeometryError> {
        Self::try_new(center, sizes, EulerAngles::ZERO)
    }

    /// The center of this cuboid.
    #[inline]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The three side lengths of this cuboid.
    #[inline]
    pub fn sizes(&self) -> &Vector3<Real> {
        &self.sizes
    }

    /// The half side lengths of this cuboid.
    #[inline]
    pub fn half_extents(&self) -> Vector3<Real> {
        self.sizes * 0.5
    }

    /// The Euler angles, in degrees, describing the orientation of this cuboid.
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
