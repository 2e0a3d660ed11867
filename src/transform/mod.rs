//! Affine transforms mapping canonical shapes to world space.
//!
//! Transforms are immutable values: composing or inverting one always returns a new transform.
//! Every shape of this crate builds its local-to-global transform in the fixed order
//! `translate ∘ rotate ∘ scale`, so the canonical shape is scaled first, then rotated about the
//! origin, and finally moved to its world-space center.

pub use self::affine2::AffineTransform2;
pub use self::affine3::AffineTransform3;
pub use self::degenerate_transform::DegenerateTransform;
pub use self::euler_angles::EulerAngles;

mod affine2;
mod affine3;
mod degenerate_transform;
mod euler_angles;
