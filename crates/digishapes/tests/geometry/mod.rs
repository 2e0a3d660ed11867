mod aabb_conservative;
mod degenerate_shapes;
mod transform_round_trip;
