use crate::math::{Point2, Real, Vector2};
use crate::shape::checks;
use crate::transform::AffineTransform2;
use crate::GeometryError;

/// A rectangle of the plane, rotated about its center.
///
/// The canonical shape is the square `[-1, 1]²`, scaled by half the length along `x` and half the
/// width along `y`, then rotated by `orientation` degrees.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedBox {
    pub(crate) center: Point2,
    pub(crate) length: Real,
    pub(crate) width: Real,
    pub(crate) orientation: Real,
    pub(crate) local_to_global: AffineTransform2,
    pub(crate) global_to_local: AffineTransform2,
}

impl OrientedBox {
    /// Creates a new oriented box.
    ///
    /// The side of size `length` makes an angle of `orientation` degrees, counterclockwise, with
    /// the `x` axis.
    pub fn try_new(
        center: Point2,
        length: Real,
        width: Real,
        orientation: Real,
    ) -> Result<Self, GeometryError> {
        checks::finite_point2("center", &center)?;
        let length = checks::positive("length", length)?;
        let width = checks::positive("width", width)?;
        let orientation = checks::finite("orientation", orientation)?;

        let half_extents = Vector2::new(length, width) * 0.5;
        let local_to_global =
            AffineTransform2::from_trs(&center, orientation.to_radians(), &half_extents);
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            length,
            width,
            orientation,
            local_to_global,
            global_to_local,
        })
    }

    /// Creates a square with the given side length, rotated by `orientation` degrees.
    pub fn square(center: Point2, side: Real, orientation: Real) -> Result<Self, GeometryError> {
        Self::try_new(center, side, side, orientation)
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// The size of this box along its main axis.
    #[inline]
    pub fn length(&self) -> Real {
        self.length
    }

    /// The size of this box across its main axis.
    #[inline]
    pub fn width(&self) -> Real {
        self.width
    }

    /// The angle between the main axis of this box and the `x` axis, in degrees.
    #[inline]
    pub fn orientation(&self) -> Real {
        self.orientation
    }

    /// The half-lengths of this box along its own axes.
    #[inline]
    pub fn half_extents(&self) -> Vector2<Real> {
        Vector2::new(self.length, self.width) * 0.5
    }
}
