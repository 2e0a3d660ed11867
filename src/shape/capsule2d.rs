use crate::math::{Point2, Real, Vector2};
use crate::shape::checks;
use crate::transform::AffineTransform2;
use crate::GeometryError;

/// A 2D capsule: a rectangular body with a half-disk cap at each end.
///
/// The body spans `length` along the main axis, and `2 * radius` across it. The caps are disks
/// of radius `radius` centered at [`point1`](Self::point1) and [`point2`](Self::point2), the two
/// ends of the body axis.
///
/// The canonical frame scales the main axis by the full `length` (so the body spans
/// `-0.5 <= x <= 0.5`) and the transverse axis by `radius` (so the body spans `-1 <= y <= 1`).
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule2d {
    pub(crate) center: Point2,
    pub(crate) length: Real,
    pub(crate) radius: Real,
    pub(crate) orientation: Real,
    pub(crate) point1: Point2,
    pub(crate) point2: Point2,
    pub(crate) local_to_global: AffineTransform2,
    pub(crate) global_to_local: AffineTransform2,
}

impl Capsule2d {
    /// Creates a new capsule.
    ///
    /// The body axis makes an angle of `orientation` degrees, counterclockwise, with the `x` axis.
    pub fn try_new(
        center: Point2,
        length: Real,
        radius: Real,
        orientation: Real,
    ) -> Result<Self, GeometryError> {
        checks::finite_point2("center", &center)?;
        let length = checks::positive("length", length)?;
        let radius = checks::positive("radius", radius)?;
        let orientation = checks::finite("orientation", orientation)?;

        let local_to_global = AffineTransform2::from_trs(
            &center,
            orientation.to_radians(),
            &Vector2::new(length, radius),
        );
        let global_to_local = local_to_global.try_inverse()?;

        Ok(Self {
            center,
            length,
            radius,
            orientation,
            point1: local_to_global.transform_point(&Point2::new(-0.5, 0.0)),
            point2: local_to_global.transform_point(&Point2::new(0.5, 0.0)),
            local_to_global,
            global_to_local,
        })
    }

    /// Creates a capsule from the full thickness of its body instead of its radius.
    pub fn from_thickness(
        center: Point2,
        length: Real,
        thickness: Real,
        orientation: Real,
    ) -> Result<Self, GeometryError> {
        let thickness = checks::positive("thickness", thickness)?;
        Self::try_new(center, length, thickness * 0.5, orientation)
    }

    /// Creates a capsule whose body axis is aligned with the `x` axis.
    pub fn horizontal(center: Point2, length: Real, radius: Real) -> Result<Self, GeometryError> {
        Self::try_new(center, length, radius, 0.0)
    }

    /// The center of this capsule.
    #[inline]
    pub fn center(&self) -> &Point2 {
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

    /// The orientation of the body axis, in degrees.
    #[inline]
    pub fn orientation(&self) -> Real {
        self.orientation
    }

    /// The center of the first cap.
    #[inline]
    pub fn point1(&self) -> Point2 {
        self.point1
    }

    /// The center of the second cap.
    #[inline]
    pub fn point2(&self) -> Point2 {
        self.point2
    }
}
