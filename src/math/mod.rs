//! Aliases for the mathematical types used throughout this crate.
//!
//! Planar and spatial shapes live side by side, so every alias carries its dimension in its name.

pub use na::{Matrix2, Matrix3, Rotation2, Rotation3, Vector2, Vector3};

/// The scalar type used throughout this crate.
pub use f64 as Real;

/// A point in the plane.
pub type Point2 = na::Point2<Real>;

/// A point in space.
pub type Point3 = na::Point3<Real>;

/// Linear parts whose determinant magnitude falls at or below this fraction of the product of
/// their column norms are considered non-invertible.
pub const DEGENERACY_EPSILON: Real = 1.0e-12;

/// The offset from a cell's integer coordinates to its sample point.
pub const CELL_CENTER_OFFSET: Real = 0.5;
