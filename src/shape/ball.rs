use crate::math::{Point3, Real};
use crate::shape::checks;
use crate::transform::AffineTransform3;
use crate::GeometryError;

/// A ball, i.e., the set of points of the space within `radius` of `center`.
///
/// Like [`Disk`](crate::shape::Disk), containment is tested directly in world space with the
/// squared distance to the center.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    pub(crate) center: Point3,
    pub(crate) radius: Real,
    pub(crate) local_to_global: AffineTransform3,
    pub(crate) global_to_local: AffineTransform3,
}

impl Ball {
    /// Creates a new ball with the given center and radius.
    pub fn try_new(center: Point3, radius: Real) -> Result<Self, GeometryError> {
        checks::finite_point3("center", &center)?;
        let radius = checks::positive("radius", radius)?;

        let local_to_global = AffineTransform3::translation_to(&center)
            .concatenate(&AffineTransform3::scaling(radius));
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            radius,
            local_to_global,
            global_to_local,
        })
    }

    /// The center of this ball.
    #[inline]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The radius of this ball.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }
}
