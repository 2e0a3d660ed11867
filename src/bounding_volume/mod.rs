//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb2::Aabb2;
#[doc(inline)]
pub use crate::bounding_volume::aabb3::Aabb3;

#[doc(hidden)]
pub mod aabb2;
#[doc(hidden)]
pub mod aabb3;
mod aabb_ball;
mod aabb_capsule;
mod aabb_cuboid;
mod aabb_ellipsoid;
mod aabb_utils;
