//! Shapes supported by digishapes.
//!
//! Each shape owns its defining parameters and caches its local-to-global transform together
//! with the inverse, both computed once by the fallible constructor. Containment tests and
//! bounding boxes are then infallible.

pub use self::ball::Ball;
pub use self::capsule2d::Capsule2d;
pub use self::capsule3d::Capsule3d;
pub use self::centered_cylinder::CenteredCylinder;
pub use self::cube::Cube;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::disk::Disk;
pub use self::ellipse::Ellipse;
pub use self::ellipsoid::Ellipsoid;
pub use self::oriented_box::OrientedBox;
pub use self::params::{ShapeParams2d, ShapeParams3d};
#[doc(inline)]
pub use self::shape::{Shape2d, Shape3d, ShapeType, TypedShape2d, TypedShape3d};

mod checks;
mod params;
mod shape;

// 2D shapes.
mod capsule2d;
mod disk;
mod ellipse;
mod oriented_box;

// 3D shapes.
mod ball;
mod capsule3d;
mod centered_cylinder;
mod cube;
mod cuboid;
mod cylinder;
mod ellipsoid;
