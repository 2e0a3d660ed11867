mod fill_strategies;
mod known_points;
mod monotonic_scaling;
