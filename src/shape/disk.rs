use crate::math::{Point2, Real};
use crate::shape::checks;
use crate::transform::AffineTransform2;
use crate::GeometryError;

/// A disk, i.e., the set of points of the plane within `radius` of `center`.
///
/// Containment is tested directly in world space. The local-to-global transform maps the unit
/// disk centered at the origin onto this disk.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Disk {
    pub(crate) center: Point2,
    pub(crate) radius: Real,
    pub(crate) local_to_global: AffineTransform2,
    pub(crate) global_to_local: AffineTransform2,
}

impl Disk {
    /// Creates a new disk with the given center and radius.
    pub fn try_new(center: Point2, radius: Real) -> Result<Self, GeometryError> {
        checks::finite_point2("center", &center)?;
        let radius = checks::positive("radius", radius)?;

        let local_to_global = AffineTransform2::translation_to(&center)
            .concatenate(&AffineTransform2::scaling(radius));
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            radius,
            local_to_global,
            global_to_local,
        })
    }

    /// The center of this disk.
    #[inline]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// The radius of this disk.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }
}
