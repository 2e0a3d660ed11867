use crate::math::{Point3, Real, Vector3};
use crate::shape::checks;
use crate::transform::AffineTransform3;
use crate::GeometryError;
use na::RealField;

/// A cylinder with flat ends, given by the centers of its two end disks and its radius.
///
/// The canonical cylinder has unit radius, its axis along `z`, and spans `0 <= z <= 1`. The
/// local-to-global transform is `translate(point1) ∘ Rz(phi) ∘ Ry(theta) ∘ scale(r, r, h)` where
/// `h` is the distance between the two end points, `theta` the inclination of the axis from the
/// `z` axis, and `phi` its azimuth around the `z` axis.
///
/// When the axis is parallel to `z`, the azimuth is undefined and set to zero.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    pub(crate) point1: Point3,
    pub(crate) point2: Point3,
    pub(crate) radius: Real,
    pub(crate) height: Real,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl Cylinder {
    /// Creates a new cylinder whose axis goes from `point1` to `point2`.
    ///
    /// Fails with [`GeometryError::DegenerateTransform`] if the two end points coincide.
    pub fn try_new(point1: Point3, point2: Point3, radius: Real) -> Result<Self, GeometryError> {
        checks::finite_point3("point1", &point1)?;
        checks::finite_point3("point2", &point2)?;
        let radius = checks::positive("radius", radius)?;

        let axis = point2 - point1;
        let height = axis.norm();
        let (theta, phi) = inclination_and_azimuth(&axis);

        let local_to_global = AffineTransform3::translation_to(&point1)
            .concatenate(&AffineTransform3::rotation_z(phi))
            .concatenate(&AffineTransform3::rotation_y(theta))
            .concatenate(&AffineTransform3::scaling_nonuniform(&Vector3::new(
                radius, radius, height,
            )));
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            point1,
            point2,
            radius,
            height,
            local_to_global,
            global_to_local,
        })
    }

    /// The center of the first end disk.
    #[inline]
    pub fn point1(&self) -> &Point3 {
        &self.point1
    }

    /// The center of the second end disk.
    #[inline]
    pub fn point2(&self) -> &Point3 {
        &self.point2
    }

    /// The radius of this cylinder.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The distance between the two end points.
    #[inline]
    pub fn height(&self) -> Real {
        self.height
    }
}

/// The angles `(theta, phi)`, in radians, of the rotation `Rz(phi) * Ry(theta)` sending the `z`
/// axis onto the direction of `axis`.
fn inclination_and_azimuth(axis: &Vector3<Real>) -> (Real, Real) {
    let hxy = axis.x.hypot(axis.y);
    let theta = Real::frac_pi_2() - axis.z.atan2(hxy);

    let phi = if hxy == 0.0 {
        log::debug!("cylinder axis is parallel to z, using a zero azimuth");
        0.0
    } else {
        axis.y.atan2(axis.x)
    };

    (theta, phi)
}
