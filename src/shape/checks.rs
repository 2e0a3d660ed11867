//! Validation of raw shape parameters.

use crate::math::{Point2, Point3, Real};
use crate::transform::EulerAngles;
use crate::GeometryError;

fn reject(name: &'static str, value: Real, reason: &'static str) -> GeometryError {
    log::debug!("rejected shape parameter `{name}` = {value}: {reason}");
    GeometryError::InvalidParameter {
        name,
        value,
        reason,
    }
}

/// Checks that a size, radius, or length is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: Real) -> Result<Real, GeometryError> {
    if !value.is_finite() {
        Err(reject(name, value, "expected a finite value"))
    } else if value <= 0.0 {
        Err(reject(name, value, "expected a strictly positive value"))
    } else {
        Ok(value)
    }
}

/// Checks that a scalar, e.g., an angle, is finite.
pub(crate) fn finite(name: &'static str, value: Real) -> Result<Real, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(reject(name, value, "expected a finite value"))
    }
}

pub(crate) fn finite_point2(name: &'static str, pt: &Point2) -> Result<(), GeometryError> {
    pt.iter().try_for_each(|x| finite(name, *x).map(|_| ()))
}

pub(crate) fn finite_point3(name: &'static str, pt: &Point3) -> Result<(), GeometryError> {
    pt.iter().try_for_each(|x| finite(name, *x).map(|_| ()))
}

pub(crate) fn finite_angles(name: &'static str, angles: &EulerAngles) -> Result<(), GeometryError> {
    angles
        .to_array()
        .into_iter()
        .try_for_each(|a| finite(name, a).map(|_| ()))
}
