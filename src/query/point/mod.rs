mod point_ball;
mod point_capsule;
mod point_cuboid;
mod point_cylinder;
mod point_ellipsoid;
