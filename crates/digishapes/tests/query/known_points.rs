use digishapes::math::{Point2, Point3};
use digishapes::shape::{Capsule2d, Cube, Cylinder, Disk, Shape2d, Shape3d};
use digishapes::transform::EulerAngles;

#[test]
fn cube_of_side_two() {
    let cube = Cube::try_new(Point3::origin(), 2.0, EulerAngles::ZERO).unwrap();

    assert!(cube.contains(0.0, 0.0, 0.0));
    assert!(!cube.contains(1.5, 0.0, 0.0));
    assert!(cube.contains(1.0, 0.0, 0.0));
}

#[test]
fn disk_of_radius_five() {
    let disk = Disk::try_new(Point2::new(10.0, 10.0), 5.0).unwrap();

    assert!(disk.contains(10.0, 10.0));
    assert!(!disk.contains(15.1, 10.0));
    assert!(disk.contains(15.0, 10.0));
}

#[test]
fn vertical_two_point_cylinder() {
    let cylinder =
        Cylinder::try_new(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 2.0).unwrap();

    assert!(cylinder.contains(0.0, 0.0, 5.0));
    assert!(!cylinder.contains(3.0, 0.0, 5.0));
    assert!(!cylinder.contains(0.0, 0.0, -0.1));
    assert!(cylinder.contains(0.0, 0.0, 10.0));
}

#[test]
fn horizontal_capsule() {
    let capsule = Capsule2d::try_new(Point2::origin(), 10.0, 2.0, 0.0).unwrap();

    assert!(capsule.contains(5.0, 0.0));
    assert!(capsule.contains(6.0, 0.0));
    assert!(!capsule.contains(8.0, 0.0));
}

#[test]
fn equivalent_parameters_give_the_same_shape() {
    let a = Cube::try_new(Point3::new(3.0, 3.0, 3.0), 2.0, EulerAngles::new(0.0, 0.0, 90.0)).unwrap();
    let b = Cube::axis_aligned(Point3::new(3.0, 3.0, 3.0), 2.0).unwrap();

    // A quarter turn maps the cube onto itself.
    for (x, y, z) in [
        (3.0, 3.0, 3.0),
        (3.9, 2.2, 3.5),
        (4.2, 3.0, 3.0),
        (3.0, 1.7, 3.0),
        (2.5, 2.5, 4.5),
    ] {
        assert_eq!(a.contains(x, y, z), b.contains(x, y, z), "({x}, {y}, {z})");
    }
}
