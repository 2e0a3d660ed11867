use crate::math::{Point2, Real, Vector2};
use crate::shape::checks;
use crate::transform::AffineTransform2;
use crate::GeometryError;

/// An ellipse of the plane, given by its center, its two semi-axis lengths, and the angle of its
/// first axis with the `x` axis.
///
/// In canonical space, the ellipse is the unit disk: a point `(x, y)` is inside if
/// `x² + y² <= 1`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipse {
    pub(crate) center: Point2,
    pub(crate) semi_axes: Vector2<Real>,
    pub(crate) orientation: Real,
    pub(crate) local_to_global: AffineTransform2,
    pub(crate) global_to_local: AffineTransform2,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// The `orientation` is the counterclockwise angle, in degrees, between the `x` axis and
    /// the axis of length `2 * semi_axis1`.
    pub fn try_new(
        center: Point2,
        semi_axis1: Real,
        semi_axis2: Real,
        orientation: Real,
    ) -> Result<Self, GeometryError> {
        checks::finite_point2("center", &center)?;
        let semi_axes = Vector2::new(
            checks::positive("semi_axis1", semi_axis1)?,
            checks::positive("semi_axis2", semi_axis2)?,
        );
        let orientation = checks::finite("orientation", orientation)?;

        let local_to_global =
            AffineTransform2::from_trs(&center, orientation.to_radians(), &semi_axes);
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            semi_axes,
            orientation,
            local_to_global,
            global_to_local,
        })
    }

    /// The center of this ellipse.
    #[inline]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// The two semi-axis lengths of this ellipse.
    #[inline]
    pub fn semi_axes(&self) -> &Vector2<Real> {
        &self.semi_axes
    }

    /// The orientation of the first axis, in degrees.
    #[inline]
    pub fn orientation(&self) -> Real {
        self.orientation
    }
}
