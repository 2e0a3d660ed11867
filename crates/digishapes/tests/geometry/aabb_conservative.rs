use crate::common::ShapeSampler;
use digishapes::bounding_volume::{Aabb2, Aabb3};
use digishapes::math::{Point2, Point3, Real};
use digishapes::shape::{Shape2d, Shape3d};

fn loosened2(aabb: &Aabb2, margin: Real) -> Aabb2 {
    Aabb2::from_half_extents(aabb.center(), aabb.half_extents().add_scalar(margin))
}

fn loosened3(aabb: &Aabb3, margin: Real) -> Aabb3 {
    Aabb3::from_half_extents(aabb.center(), aabb.half_extents().add_scalar(margin))
}

#[test]
fn aabb_contains_every_inside_point_2d() {
    let mut sampler = ShapeSampler::new(7);

    for _ in 0..100 {
        let shape = sampler.shape2d(-20.0, 20.0, 10.0);
        let aabb = shape.aabb();
        let window = loosened2(&aabb, 5.0);

        for _ in 0..500 {
            let p = Point2::new(
                sampler.range(window.mins.x, window.maxs.x),
                sampler.range(window.mins.y, window.maxs.y),
            );

            if shape.contains_point(&p) {
                assert!(aabb.contains_local_point(&p), "{shape:?} leaks out at {p}");
            }
        }

        let center = shape.local_to_global().transform_point(&Point2::origin());
        assert!(shape.contains_point(&center) && aabb.contains_local_point(&center));
    }
}

#[test]
fn aabb_contains_every_inside_point_3d() {
    let mut sampler = ShapeSampler::new(11);

    for _ in 0..100 {
        let shape = sampler.shape3d(-20.0, 20.0, 10.0);
        let aabb = shape.aabb();
        let window = loosened3(&aabb, 2.0);

        for _ in 0..1000 {
            let p = Point3::new(
                sampler.range(window.mins.x, window.maxs.x),
                sampler.range(window.mins.y, window.maxs.y),
                sampler.range(window.mins.z, window.maxs.z),
            );

            if shape.contains_point(&p) {
                assert!(aabb.contains_local_point(&p), "{shape:?} leaks out at {p}");
            }
        }

        // Strictly inside of every canonical shape, two-point cylinders included.
        let inner = shape
            .local_to_global()
            .transform_point(&Point3::new(0.0, 0.0, 0.25));
        assert!(shape.contains_point(&inner) && aabb.contains_local_point(&inner));
    }
}
