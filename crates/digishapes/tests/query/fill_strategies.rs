use crate::common::ShapeSampler;
use digishapes::raster::{fill_shape_2d, fill_shape_3d, DenseGrid2, DenseGrid3, ScanStrategy};

#[test]
fn bounded_and_full_scans_fill_the_same_pixels() {
    let mut sampler = ShapeSampler::new(1234);

    for _ in 0..150 {
        // Some shapes straddle or miss the grid entirely.
        let shape = sampler.shape2d(-10.0, 60.0, 20.0);
        let mut full = DenseGrid2::<u8>::zeros(48, 40);
        let mut bounded = DenseGrid2::<u8>::zeros(48, 40);

        let full_stats = fill_shape_2d(&mut full, &shape, 255, ScanStrategy::Full);
        let bounded_stats = fill_shape_2d(&mut bounded, &shape, 255, ScanStrategy::Bounded);

        assert_eq!(full, bounded, "{shape:?}");
        assert_eq!(full_stats.filled, bounded_stats.filled);
        assert_eq!(full_stats.visited, 48 * 40);
        assert!(bounded_stats.visited <= full_stats.visited);
    }
}

#[test]
fn bounded_and_full_scans_fill_the_same_voxels() {
    let mut sampler = ShapeSampler::new(4321);

    for _ in 0..60 {
        let shape = sampler.shape3d(-5.0, 30.0, 12.0);
        let mut full = DenseGrid3::new(24, 20, 16, 0.0f32);
        let mut bounded = full.clone();

        let full_stats = fill_shape_3d(&mut full, &shape, 1.0, ScanStrategy::Full);
        let bounded_stats = fill_shape_3d(&mut bounded, &shape, 1.0, ScanStrategy::Bounded);

        assert_eq!(full, bounded, "{shape:?}");
        assert_eq!(full_stats.filled, bounded_stats.filled);
        assert!(bounded_stats.visited <= full_stats.visited);
    }
}
