use approx::assert_relative_eq;
use digishapes::math::{Point2, Point3, Real, Vector3};
use digishapes::shape::{
    Capsule2d, Cube, Cuboid, Cylinder, Disk, Ellipse, Ellipsoid, Shape2d, Shape3d,
};
use digishapes::transform::{AffineTransform2, AffineTransform3, EulerAngles};
use digishapes::GeometryError;

#[test]
fn non_positive_sizes_are_invalid_parameters() {
    let center = Point2::new(1.0, 1.0);

    assert!(matches!(
        Disk::try_new(center, -1.0),
        Err(GeometryError::InvalidParameter { name: "radius", .. })
    ));
    assert!(matches!(
        Ellipse::try_new(center, 3.0, 0.0, 10.0),
        Err(GeometryError::InvalidParameter { name: "semi_axis2", .. })
    ));
    assert!(matches!(
        Capsule2d::try_new(center, 10.0, 2.0, Real::NAN),
        Err(GeometryError::InvalidParameter { name: "orientation", .. })
    ));
    assert!(matches!(
        Cuboid::try_new(
            Point3::origin(),
            Vector3::new(1.0, 2.0, 0.0),
            EulerAngles::ZERO
        ),
        Err(GeometryError::InvalidParameter { name: "size3", .. })
    ));
    assert!(Cube::try_new(Point3::new(0.0, Real::INFINITY, 0.0), 1.0, EulerAngles::ZERO).is_err());
}

#[test]
fn coincident_end_points_are_degenerate() {
    let p = Point3::new(2.0, 2.0, 2.0);
    assert!(matches!(
        Cylinder::try_new(p, p, 1.0),
        Err(GeometryError::DegenerateTransform(_))
    ));
}

#[test]
fn small_and_flat_shapes_remain_valid() {
    let center = Point3::new(0.5, 0.5, 0.5);
    let cube = Cube::try_new(center, 2.0e-4, EulerAngles::ZERO).unwrap();
    assert!(cube.contains_point(&center));
    assert!(cube.contains(0.5 + 0.9e-4, 0.5, 0.5));
    assert!(!cube.contains(0.5 + 1.1e-4, 0.5, 0.5));

    let disk = Disk::try_new(Point2::origin(), 1.0e-7).unwrap();
    assert!(disk.contains(0.0, 0.9e-7));

    let pancake = Ellipsoid::try_new(
        Point3::origin(),
        Vector3::new(100.0, 100.0, 1.0e-7),
        EulerAngles::new(30.0, 0.0, 0.0),
    )
    .unwrap();
    let local_to_global = pancake.local_to_global();
    let round_trip = pancake
        .global_to_local()
        .transform_point(&local_to_global.transform_point(&Point3::new(0.3, -0.2, 0.5)));
    assert_relative_eq!(round_trip, Point3::new(0.3, -0.2, 0.5), epsilon = 1.0e-6);
    assert!(pancake.contains(50.0, 0.0, 0.0));
    assert!(!pancake.contains(0.0, 0.0, 1.0e-3));
}

#[test]
fn zero_scale_factors_cannot_be_inverted() {
    let flat = AffineTransform2::scaling_nonuniform(&digishapes::math::Vector2::new(4.0, 0.0));
    let err = flat.try_inverse().unwrap_err();
    assert_eq!(err.determinant, 0.0);

    let flat = AffineTransform3::scaling_nonuniform(&Vector3::new(1.0, 0.0, 1.0));
    assert!(flat.try_inverse().is_err());
    assert!(AffineTransform3::scaling(2.0).try_inverse().is_ok());
}
