use crate::math::{Point3, Real, Rotation3, Vector3};
use crate::shape::checks;
use crate::transform::{AffineTransform3, EulerAngles};
use crate::GeometryError;

/// A cube, rotated about its center.
///
/// The canonical shape is `[-1, 1]³`, scaled by half the side length.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cube {
    pub(crate) center: Point3,
    pub(crate) side: Real,
    pub(crate) angles: EulerAngles,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl Cube {
    /// Creates a new cube with the given center, side length, and orientation.
    pub fn try_new(center: Point3, side: Real, angles: EulerAngles) -> Result<Self, GeometryError> {
        checks::finite_point3("center", &center)?;
        let side = checks::positive("side", side)?;
        checks::finite_angles("angles", &angles)?;

        let local_to_global = AffineTransform3::from_trs(
            &center,
            &angles.to_rotation(),
            &Vector3::repeat(side * 0.5),
        );
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            side,
            angles,
            local_to_global,
            global_to_local,
        })
    }

    /// Creates a cube whose faces are parallel to the coordinate planes.
    pub fn axis_aligned(center: Point3, side: Real) -> Result<Self, GeometryError> {
        Self::try_new(center, side, EulerAngles::ZERO)
    }

    /// The center of this cube.
    #[inline]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The side length of this cube.
    #[inline]
    pub fn side(&self) -> Real {
        self.side
    }

    /// The Euler angles, in degrees, describing the orientation of this cube.
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

#[cfg(test)]
mod test {
    use super::Cube;
    use crate::math::{Point3, Vector3};
    use crate::transform::EulerAngles;

    #[test]
    fn rotated_cube_corner() {
        let cube = Cube::try_new(Point3::origin(), 2.0, EulerAngles::new(0.0, 0.0, 45.0)).unwrap();
        let corner = cube.local_to_global.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(
            corner,
            Point3::new(0.0, 2.0f64.sqrt(), 1.0),
            epsilon = 1.0e-12
        );
        assert_relative_eq!(
            cube.local_to_global.linear_part().column(2).into_owned(),
            Vector3::z()
        );
    }
}
