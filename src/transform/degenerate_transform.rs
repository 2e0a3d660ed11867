use crate::math::Real;

/// Error indicating that the linear part of an affine transform is not invertible.
///
/// This happens when one of the scaling factors used to build the transform is zero, or more
/// generally when the determinant of the linear part is zero (or numerically indistinguishable
/// from zero, see [`DEGENERACY_EPSILON`](crate::math::DEGENERACY_EPSILON)), infinite, or NaN.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
#[error("the transform is not invertible (determinant of its linear part: {determinant})")]
pub struct DegenerateTransform {
    /// The determinant of the linear part of the rejected transform.
    pub determinant: Real,
}
