//! Seeded generators of random, well-formed shapes.

use digishapes::math::{Point2, Point3, Real, Vector3};
use digishapes::shape::{ShapeParams2d, ShapeParams3d, TypedShape2d, TypedShape3d};
use digishapes::transform::EulerAngles;
use oorandom::Rand64;

pub struct ShapeSampler {
    rng: Rand64,
}

impl ShapeSampler {
    pub fn new(seed: u128) -> Self {
        Self {
            rng: Rand64::new(seed),
        }
    }

    pub fn range(&mut self, lo: Real, hi: Real) -> Real {
        lo + (hi - lo) * self.rng.rand_float()
    }

    pub fn point2(&mut self, lo: Real, hi: Real) -> Point2 {
        Point2::new(self.range(lo, hi), self.range(lo, hi))
    }

    pub fn point3(&mut self, lo: Real, hi: Real) -> Point3 {
        Point3::new(self.range(lo, hi), self.range(lo, hi), self.range(lo, hi))
    }

    pub fn angles(&mut self) -> EulerAngles {
        EulerAngles::new(
            self.range(-180.0, 180.0),
            self.range(-180.0, 180.0),
            self.range(-180.0, 180.0),
        )
    }

    /// Parameters of a random shape centered in `[lo, hi]^2`, with sizes in `[0.5, max_size]`.
    pub fn params2d(&mut self, lo: Real, hi: Real, max_size: Real) -> ShapeParams2d {
        let center = self.point2(lo, hi);
        let orientation = self.range(-360.0, 360.0);

        match self.rng.rand_range(0..5) {
            0 => ShapeParams2d::Disk {
                center,
                radius: self.range(0.5, max_size),
            },
            1 => ShapeParams2d::Ellipse {
                center,
                semi_axis1: self.range(0.5, max_size),
                semi_axis2: self.range(0.5, max_size),
                orientation,
            },
            2 => ShapeParams2d::OrientedBox {
                center,
                length: self.range(0.5, max_size),
                width: self.range(0.5, max_size),
                orientation,
            },
            3 => ShapeParams2d::Square {
                center,
                side: self.range(0.5, max_size),
                orientation,
            },
            _ => ShapeParams2d::Capsule {
                center,
                length: self.range(0.5, max_size),
                radius: self.range(0.5, max_size * 0.5),
                orientation,
            },
        }
    }

    /// Parameters of a random shape centered in `[lo, hi]^3`, with sizes in `[0.5, max_size]`.
    pub fn params3d(&mut self, lo: Real, hi: Real, max_size: Real) -> ShapeParams3d {
        let center = self.point3(lo, hi);
        let angles = self.angles();

        match self.rng.rand_range(0..7) {
            0 => ShapeParams3d::Ball {
                center,
                radius: self.range(0.5, max_size),
            },
            1 => ShapeParams3d::Cube {
                center,
                side: self.range(0.5, max_size),
                angles,
            },
            2 => ShapeParams3d::Cuboid {
                center,
                sizes: Vector3::new(
                    self.range(0.5, max_size),
                    self.range(0.5, max_size),
                    self.range(0.5, max_size),
                ),
                angles,
            },
            3 => {
                let span = max_size * 0.5;
                ShapeParams3d::Cylinder {
                    point1: center,
                    point2: center + self.point3(-span, span).coords,
                    radius: self.range(0.5, max_size * 0.5),
                }
            }
            4 => ShapeParams3d::CenteredCylinder {
                center,
                length: self.range(0.5, max_size),
                radius: self.range(0.5, max_size * 0.5),
                angles,
            },
            5 => ShapeParams3d::Capsule {
                center,
                length: self.range(0.5, max_size),
                radius: self.range(0.5, max_size * 0.5),
                angles,
            },
            _ => ShapeParams3d::Ellipsoid {
                center,
                radii: Vector3::new(
                    self.range(0.5, max_size),
                    self.range(0.5, max_size),
                    self.range(0.5, max_size),
                ),
                angles,
            },
        }
    }

    pub fn shape2d(&mut self, lo: Real, hi: Real, max_size: Real) -> TypedShape2d {
        self.params2d(lo, hi, max_size).to_shape().unwrap()
    }

    pub fn shape3d(&mut self, lo: Real, hi: Real, max_size: Real) -> TypedShape3d {
        // A random cylinder axis can, in principle, be too short to invert.
        loop {
            if let Ok(shape) = self.params3d(lo, hi, max_size).to_shape() {
                return shape;
            }
        }
    }
}
