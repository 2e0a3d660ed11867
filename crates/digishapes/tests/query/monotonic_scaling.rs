use crate::common::ShapeSampler;
use digishapes::math::{Point2, Point3, Real};
use digishapes::shape::{Shape2d, Shape3d, ShapeParams2d, ShapeParams3d};

const GROWTH: Real = 1.5;

/// Every variant of `params` obtained by growing a single size parameter.
fn grown_2d(params: &ShapeParams2d) -> Vec<ShapeParams2d> {
    let k = GROWTH;

    match *params {
        ShapeParams2d::Disk { center, radius } => vec![ShapeParams2d::Disk {
            center,
            radius: radius * k,
        }],
        ShapeParams2d::Ellipse {
            center,
            semi_axis1,
            semi_axis2,
            orientation,
        } => vec![
            ShapeParams2d::Ellipse {
                center,
                semi_axis1: semi_axis1 * k,
                semi_axis2,
                orientation,
            },
            ShapeParams2d::Ellipse {
                center,
                semi_axis1,
                semi_axis2: semi_axis2 * k,
                orientation,
            },
        ],
        ShapeParams2d::OrientedBox {
            center,
            length,
            width,
            orientation,
        } => vec![
            ShapeParams2d::OrientedBox {
                center,
                length: length * k,
                width,
                orientation,
            },
            ShapeParams2d::OrientedBox {
                center,
                length,
                width: width * k,
                orientation,
            },
        ],
        ShapeParams2d::Square {
            center,
            side,
            orientation,
        } => vec![ShapeParams2d::Square {
            center,
            side: side * k,
            orientation,
        }],
        ShapeParams2d::Capsule {
            center,
            length,
            radius,
            orientation,
        } => vec![
            ShapeParams2d::Capsule {
                center,
                length: length * k,
                radius,
                orientation,
            },
            ShapeParams2d::Capsule {
                center,
                length,
                radius: radius * k,
                orientation,
            },
        ],
    }
}

fn grown_3d(params: &ShapeParams3d) -> Vec<ShapeParams3d> {
    let k = GROWTH;

    match *params {
        ShapeParams3d::Ball { center, radius } => vec![ShapeParams3d::Ball {
            center,
            radius: radius * k,
        }],
        ShapeParams3d::Cube {
            center,
            side,
            angles,
        } => vec![ShapeParams3d::Cube {
            center,
            side: side * k,
            angles,
        }],
        ShapeParams3d::Cuboid {
            center,
            sizes,
            angles,
        } => (0..3)
            .map(|i| {
                let mut sizes = sizes;
                sizes[i] *= k;
                ShapeParams3d::Cuboid {
                    center,
                    sizes,
                    angles,
                }
            })
            .collect(),
        ShapeParams3d::Cylinder {
            point1,
            point2,
            radius,
        } => vec![ShapeParams3d::Cylinder {
            point1,
            point2,
            radius: radius * k,
        }],
        ShapeParams3d::CenteredCylinder {
            center,
            length,
            radius,
            angles,
        } => vec![
            ShapeParams3d::CenteredCylinder {
                center,
                length: length * k,
                radius,
                angles,
            },
            ShapeParams3d::CenteredCylinder {
                center,
                length,
                radius: radius * k,
                angles,
            },
        ],
        ShapeParams3d::Capsule {
            center,
            length,
            radius,
            angles,
        } => vec![
            ShapeParams3d::Capsule {
                center,
                length: length * k,
                radius,
                angles,
            },
            ShapeParams3d::Capsule {
                center,
                length,
                radius: radius * k,
                angles,
            },
        ],
        ShapeParams3d::Ellipsoid {
            center,
            radii,
            angles,
        } => (0..3)
            .map(|i| {
                let mut radii = radii;
                radii[i] *= k;
                ShapeParams3d::Ellipsoid {
                    center,
                    radii,
                    angles,
                }
            })
            .collect(),
    }
}

#[test]
fn growing_a_size_never_removes_points_2d() {
    let mut sampler = ShapeSampler::new(99);

    for _ in 0..100 {
        let params = sampler.params2d(-10.0, 10.0, 8.0);
        let small = params.to_shape().unwrap();

        for grown in grown_2d(&params) {
            let big = grown.to_shape().unwrap();
            let aabb = small.aabb();

            for _ in 0..300 {
                let p = Point2::new(
                    sampler.range(aabb.mins.x, aabb.maxs.x),
                    sampler.range(aabb.mins.y, aabb.maxs.y),
                );
                assert!(!small.contains_point(&p) || big.contains_point(&p), "{grown:?} at {p}");
            }
        }
    }
}

#[test]
fn growing_a_size_never_removes_points_3d() {
    let mut sampler = ShapeSampler::new(100);

    for _ in 0..100 {
        let params = sampler.params3d(-10.0, 10.0, 8.0);
        let Ok(small) = params.to_shape() else {
            continue;
        };

        for grown in grown_3d(&params) {
            let big = grown.to_shape().unwrap();
            let aabb = small.aabb();

            for _ in 0..300 {
                let p = Point3::new(
                    sampler.range(aabb.mins.x, aabb.maxs.x),
                    sampler.range(aabb.mins.y, aabb.maxs.y),
                    sampler.range(aabb.mins.z, aabb.maxs.z),
                );
                assert!(!small.contains_point(&p) || big.contains_point(&p), "{grown:?} at {p}");
            }
        }
    }
}
