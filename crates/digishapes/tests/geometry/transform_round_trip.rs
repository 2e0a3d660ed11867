use crate::common::ShapeSampler;
use approx::assert_relative_eq;
use digishapes::math::{Point2, Point3};
use digishapes::shape::{Shape2d, Shape3d};
use digishapes::transform::{AffineTransform3, EulerAngles};

#[test]
fn canonical_points_survive_a_round_trip_2d() {
    let mut sampler = ShapeSampler::new(0x2d);

    for _ in 0..200 {
        let shape = sampler.shape2d(-100.0, 100.0, 30.0);
        let (to_world, to_local) = (shape.local_to_global(), shape.global_to_local());

        for _ in 0..10 {
            let p: Point2 = sampler.point2(-1.0, 1.0);
            let back = to_local.transform_point(&to_world.transform_point(&p));
            assert_relative_eq!(back, p, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn canonical_points_survive_a_round_trip_3d() {
    let mut sampler = ShapeSampler::new(0x3d);

    for _ in 0..200 {
        let shape = sampler.shape3d(-100.0, 100.0, 30.0);
        let (to_world, to_local) = (shape.local_to_global(), shape.global_to_local());

        for _ in 0..10 {
            let p: Point3 = sampler.point3(-1.0, 1.0);
            let back = to_local.transform_point(&to_world.transform_point(&p));
            assert_relative_eq!(back, p, epsilon = 1.0e-9);
        }
    }
}

#[test]
fn composition_order_is_translate_rotate_scale() {
    let center = Point3::new(4.0, -1.0, 2.0);
    let rotation = EulerAngles::new(0.0, 0.0, 90.0).to_rotation();
    let factors = digishapes::math::Vector3::new(3.0, 1.0, 1.0);
    let trs = AffineTransform3::from_trs(&center, &rotation, &factors);

    // The canonical x axis is stretched first, then turned onto y.
    let tip = trs.transform_point(&Point3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(tip, Point3::new(4.0, 2.0, 2.0), epsilon = 1.0e-12);

    let manual = AffineTransform3::translation_to(&center)
        .concatenate(&AffineTransform3::rotation(&rotation))
        .concatenate(&AffineTransform3::scaling_nonuniform(&factors));
    assert_relative_eq!(trs, manual, epsilon = 1.0e-12);
}
