use crate::bounding_volume::{Aabb2, Aabb3};
use crate::math::{Point2, Point3, Real};
use crate::shape::{
    Ball, Capsule2d, Capsule3d, CenteredCylinder, Cube, Cuboid, Cylinder, Disk, Ellipse, Ellipsoid,
    OrientedBox,
};
use crate::transform::{AffineTransform2, AffineTransform3};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A disk.
    Disk,
    /// An ellipse.
    Ellipse,
    /// A rotated rectangle.
    OrientedBox,
    /// A 2D capsule.
    Capsule2d,
    /// A ball.
    Ball,
    /// A rotated cube.
    Cube,
    /// A rotated rectangular box.
    Cuboid,
    /// A cylinder given by its two end points.
    Cylinder,
    /// A cylinder given by its center and orientation.
    CenteredCylinder,
    /// A 3D capsule.
    Capsule3d,
    /// A rotated ellipsoid.
    Ellipsoid,
}

/// Trait implemented by all the shapes of the plane.
///
/// This is the only capability the rasterization engine relies on.
pub trait Shape2d {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// The transform mapping the canonical form of this shape to world space.
    fn local_to_global(&self) -> &AffineTransform2;

    /// The inverse of [`Self::local_to_global`].
    fn global_to_local(&self) -> &AffineTransform2;

    /// Tests if the given world-space point is inside of this shape, boundary included.
    fn contains_point(&self, pt: &Point2) -> bool;

    /// A conservative world-space bounding box of this shape.
    fn aabb(&self) -> Aabb2;

    /// Tests if the point `(x, y)` is inside of this shape.
    #[inline]
    fn contains(&self, x: Real, y: Real) -> bool {
        self.contains_point(&Point2::new(x, y))
    }
}

/// Trait implemented by all the shapes of the 3D space.
///
/// See [`Shape2d`] for the meaning of each method.
pub trait Shape3d {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// The transform mapping the canonical form of this shape to world space.
    fn local_to_global(&self) -> &AffineTransform3;

    /// The inverse of [`Self::local_to_global`].
    fn global_to_local(&self) -> &AffineTransform3;

    /// Tests if the given world-space point is inside of this shape, boundary included.
    fn contains_point(&self, pt: &Point3) -> bool;

    /// A conservative world-space bounding box of this shape.
    fn aabb(&self) -> Aabb3;

    /// Tests if the point `(x, y, z)` is inside of this shape.
    #[inline]
    fn contains(&self, x: Real, y: Real, z: Real) -> bool {
        self.contains_point(&Point3::new(x, y, z))
    }
}

macro_rules! impl_shape(
    ($Trait: ident, $Transform: ty, $Point: ty, $Aabb: ty; $($S: ty, $Tag: ident);*) => {$(
        impl $Trait for $S {
            #[inline]
            fn shape_type(&self) -> ShapeType {
                ShapeType::$Tag
            }

            #[inline]
            fn local_to_global(&self) -> &$Transform {
                &self.local_to_global
            }

            #[inline]
            fn global_to_local(&self) -> &$Transform {
                &self.global_to_local
            }

            #[inline]
            fn contains_point(&self, pt: &$Point) -> bool {
                <$S>::contains_point(self, pt)
            }

            #[inline]
            fn aabb(&self) -> $Aabb {
                <$S>::aabb(self)
            }
        }
    )*}
);

impl_shape!(
    Shape2d, AffineTransform2, Point2, Aabb2;
    Disk, Disk;
    Ellipse, Ellipse;
    OrientedBox, OrientedBox;
    Capsule2d, Capsule2d
);

impl_shape!(
    Shape3d, AffineTransform3, Point3, Aabb3;
    Ball, Ball;
    Cube, Cube;
    Cuboid, Cuboid;
    Cylinder, Cylinder;
    CenteredCylinder, CenteredCylinder;
    Capsule3d, Capsule3d;
    Ellipsoid, Ellipsoid
);

#[derive(Copy, Clone, Debug, PartialEq)]
/// Enum holding any shape of the plane with its actual type.
pub enum TypedShape2d {
    /// A disk.
    Disk(Disk),
    /// An ellipse.
    Ellipse(Ellipse),
    /// A rotated rectangle.
    OrientedBox(OrientedBox),
    /// A 2D capsule.
    Capsule(Capsule2d),
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Enum holding any shape of the 3D space with its actual type.
pub enum TypedShape3d {
    /// A ball.
    Ball(Ball),
    /// A rotated cube.
    Cube(Cube),
    /// A rotated rectangular box.
    Cuboid(Cuboid),
    /// A cylinder given by its two end points.
    Cylinder(Cylinder),
    /// A cylinder given by its center and orientation.
    CenteredCylinder(CenteredCylinder),
    /// A 3D capsule.
    Capsule(Capsule3d),
    /// A rotated ellipsoid.
    Ellipsoid(Ellipsoid),
}

macro_rules! dispatch(
    ($Enum: ident, $self: ident, $s: ident => $e: expr; $($Variant: ident),*) => {
        match $self {
            $($Enum::$Variant($s) => $e,)*
        }
    }
);

impl Shape2d for TypedShape2d {
    fn shape_type(&self) -> ShapeType {
        dispatch!(TypedShape2d, self, s => s.shape_type(); Disk, Ellipse, OrientedBox, Capsule)
    }

    fn local_to_global(&self) -> &AffineTransform2 {
        dispatch!(TypedShape2d, self, s => &s.local_to_global; Disk, Ellipse, OrientedBox, Capsule)
    }

    fn global_to_local(&self) -> &AffineTransform2 {
        dispatch!(TypedShape2d, self, s => &s.global_to_local; Disk, Ellipse, OrientedBox, Capsule)
    }

    fn contains_point(&self, pt: &Point2) -> bool {
        dispatch!(TypedShape2d, self, s => s.contains_point(pt); Disk, Ellipse, OrientedBox, Capsule)
    }

    fn aabb(&self) -> Aabb2 {
        dispatch!(TypedShape2d, self, s => s.aabb(); Disk, Ellipse, OrientedBox, Capsule)
    }
}

impl Shape3d for TypedShape3d {
    fn shape_type(&self) -> ShapeType {
        dispatch!(TypedShape3d, self, s => s.shape_type();
            Ball, Cube, Cuboid, Cylinder, CenteredCylinder, Capsule, Ellipsoid)
    }

    fn local_to_global(&self) -> &AffineTransform3 {
        dispatch!(TypedShape3d, self, s => &s.local_to_global;
            Ball, Cube, Cuboid, Cylinder, CenteredCylinder, Capsule, Ellipsoid)
    }

    fn global_to_local(&self) -> &AffineTransform3 {
        dispatch!(TypedShape3d, self, s => &s.global_to_local;
            Ball, Cube, Cuboid, Cylinder, CenteredCylinder, Capsule, Ellipsoid)
    }

    fn contains_point(&self, pt: &Point3) -> bool {
        dispatch!(TypedShape3d, self, s => s.contains_point(pt);
            Ball, Cube, Cuboid, Cylinder, CenteredCylinder, Capsule, Ellipsoid)
    }

    fn aabb(&self) -> Aabb3 {
        dispatch!(TypedShape3d, self, s => s.aabb();
            Ball, Cube, Cuboid, Cylinder, CenteredCylinder, Capsule, Ellipsoid)
    }
}

macro_rules! impl_from(
    ($Enum: ident; $($S: ty, $Variant: ident);*) => {$(
        impl From<$S> for $Enum {
            #[inline]
            fn from(shape: $S) -> Self {
                $Enum::$Variant(shape)
            }
        }
    )*}
);

impl_from!(
    TypedShape2d;
    Disk, Disk;
    Ellipse, Ellipse;
    OrientedBox, OrientedBox;
    Capsule2d, Capsule
);

impl_from!(
    TypedShape3d;
    Ball, Ball;
    Cube, Cube;
    Cuboid, Cuboid;
    Cylinder, Cylinder;
    CenteredCylinder, CenteredCylinder;
    Capsule3d, Capsule;
    Ellipsoid, Ellipsoid
);
