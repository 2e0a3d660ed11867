use crate::math::Real;
use crate::transform::DegenerateTransform;

/// Errors that can occur while building a shape from its parameters.
///
/// Every shape validates its parameters and inverts its local-to-global transform once, at
/// construction time. A shape that was successfully built can therefore be queried for every
/// cell of a grid without any further failure.
///
/// ```
/// use digishapes::math::Point3;
/// use digishapes::shape::Cylinder;
/// use digishapes::GeometryError;
///
/// let p = Point3::new(1.0, 2.0, 3.0);
///
/// match Cylinder::try_new(p, p, 2.0) {
///     Err(GeometryError::DegenerateTransform(err)) => {
///         println!("the two end points coincide: {}", err);
///     }
///     Err(GeometryError::InvalidParameter { name, .. }) => {
///         println!("bad value for `{}`", name);
///     }
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum GeometryError {
    /// A numeric parameter is out of its admissible domain.
    ///
    /// Sizes, radii and lengths must be finite and strictly positive. Center coordinates and
    /// angles must be finite.
    #[error("invalid value {value} for parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Real,
        /// What was expected of the value.
        reason: &'static str,
    },

    /// The local-to-global transform of the shape cannot be inverted.
    #[error(transparent)]
    DegenerateTransform(#[from] DegenerateTransform),
}
