//! Flat parameter sets, as collected by a host application, and their conversion to shapes.

use crate::math::{Point2, Point3, Real, Vector3};
use crate::shape::{
    Ball, Capsule2d, Capsule3d, CenteredCylinder, Cube, Cuboid, Cylinder, Disk, Ellipse, Ellipsoid,
    OrientedBox, TypedShape2d, TypedShape3d,
};
use crate::transform::EulerAngles;
use crate::GeometryError;

/// The parameters of a shape of the plane.
///
/// All angles are in degrees. With the `serde-serialize` feature, this enum is (de)serialized
/// as an object tagged by a `shape` field:
///
/// ```json
/// { "shape": "capsule", "center": [50.0, 50.0], "length": 40.0, "radius": 10.0, "orientation": 30.0 }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(tag = "shape", rename_all = "snake_case")
)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum ShapeParams2d {
    /// Parameters of a [`Disk`].
    Disk { center: Point2, radius: Real },
    /// Parameters of an [`Ellipse`].
    Ellipse {
        center: Point2,
        semi_axis1: Real,
        semi_axis2: Real,
        orientation: Real,
    },
    /// Parameters of an [`OrientedBox`].
    OrientedBox {
        center: Point2,
        length: Real,
        width: Real,
        orientation: Real,
    },
    /// Parameters of a square, built as an [`OrientedBox`].
    Square {
        center: Point2,
        side: Real,
        orientation: Real,
    },
    /// Parameters of a [`Capsule2d`].
    Capsule {
        center: Point2,
        length: Real,
        radius: Real,
        orientation: Real,
    },
}

impl ShapeParams2d {
    /// Validates these parameters and builds the corresponding shape.
    pub fn to_shape(&self) -> Result<TypedShape2d, GeometryError> {
        Ok(match *self {
            Self::Disk { center, radius } => Disk::try_new(center, radius)?.into(),
            Self::Ellipse {
                center,
                semi_axis1,
                semi_axis2,
                orientation,
            } => Ellipse::try_new(center, semi_axis1, semi_axis2, orientation)?.into(),
            Self::OrientedBox {
                center,
                length,
                width,
                orientation,
            } => OrientedBox::try_new(center, length, width, orientation)?.into(),
            Self::Square {
                center,
                side,
                orientation,
            } => OrientedBox::square(center, side, orientation)?.into(),
            Self::Capsule {
                center,
                length,
                radius,
                orientation,
            } => Capsule2d::try_new(center, length, radius, orientation)?.into(),
        })
    }
}

/// The parameters of a shape of the 3D space.
///
/// Orientations are Euler angles in degrees, and default to zero when deserialized without them.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(tag = "shape", rename_all = "snake_case")
)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum ShapeParams3d {
    /// Parameters of a [`Ball`].
    Ball { center: Point3, radius: Real },
    /// Parameters of a [`Cube`].
    Cube {
        center: Point3,
        side: Real,
        #[cfg_attr(feature = "serde-serialize", serde(default))]
        angles: EulerAngles,
    },
    /// Parameters of a [`Cuboid`].
    Cuboid {
        center: Point3,
        sizes: Vector3<Real>,
        #[cfg_attr(feature = "serde-serialize", serde(default))]
        angles: EulerAngles,
    },
    /// Parameters of a [`Cylinder`].
    Cylinder {
        point1: Point3,
        point2: Point3,
        radius: Real,
    },
    /// Parameters of a [`CenteredCylinder`].
    CenteredCylinder {
        center: Point3,
        length: Real,
        radius: Real,
        #[cfg_attr(feature = "serde-serialize", serde(default))]
        angles: EulerAngles,
    },
    /// Parameters of a [`Capsule3d`].
    Capsule {
        center: Point3,
        length: Real,
        radius: Real,
        #[cfg_attr(feature = "serde-serialize", serde(default))]
        angles: EulerAngles,
    },
    /// Parameters of an [`Ellipsoid`].
    Ellipsoid {
        center: Point3,
        radii: Vector3<Real>,
        #[cfg_attr(feature = "serde-serialize", serde(default))]
        angles: EulerAngles,
    },
}

impl ShapeParams3d {
    /// Validates these parameters and builds the corresponding shape.
    pub fn to_shape(&self) -> Result<TypedShape3d, GeometryError> {
        Ok(match *self {
            Self::Ball { center, radius } => Ball::try_new(center, radius)?.into(),
            Self::Cube {
                center,
                side,
                angles,
            } => Cube::try_new(center, side, angles)?.into(),
            Self::Cuboid {
                center,
                sizes,
                angles,
            } => Cuboid::try_new(center, sizes, angles)?.into(),
            Self::Cylinder {
                point1,
                point2,
                radius,
            } => Cylinder::try_new(point1, point2, radius)?.into(),
            Self::CenteredCylinder {
                center,
                length,
                radius,
                angles,
            } => CenteredCylinder::try_new(center, length, radius, angles)?.into(),
            Self::Capsule {
                center,
                length,
                radius,
                angles,
            } => Capsule3d::try_new(center, length, radius, angles)?.into(),
            Self::Ellipsoid {
                center,
                radii,
                angles,
            } => Ellipsoid::try_new(center, radii, angles)?.into(),
        })
    }
}
