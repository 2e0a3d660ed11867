use digishapes::math::Point2;
use digishapes::raster::{fill_shape_2d, DenseGrid2, Grid2, ScanStrategy};
use digishapes::shape::{Capsule2d, Disk};

fn print_grid(grid: &DenseGrid2<u8>) {
    for y in (0..grid.height()).rev() {
        let row: String = (0..grid.width())
            .map(|x| match grid.get(x, y) {
                0 => '.',
                1 => '#',
                _ => 'o',
            })
            .collect();
        println!("{row}");
    }
}

fn main() -> Result<(), digishapes::GeometryError> {
    /*
     * Initialize the shapes.
     */
    let capsule = Capsule2d::from_thickness(Point2::new(30.0, 12.0), 30.0, 8.0, 20.0)?;
    let disk = Disk::try_new(Point2::new(52.0, 16.0), 5.5)?;

    /*
     * Rasterize them into the same image.
     */
    let mut image = DenseGrid2::<u8>::zeros(64, 28);
    let capsule_stats = fill_shape_2d(&mut image, &capsule, 1, ScanStrategy::Bounded);
    let disk_stats = fill_shape_2d(&mut image, &disk, 2, ScanStrategy::Bounded);

    print_grid(&image);

    println!(
        "capsule: {} pixels filled, {} tested ({} for a full scan)",
        capsule_stats.filled,
        capsule_stats.visited,
        image.width() * image.height()
    );
    println!(
        "disk: {} pixels filled, {} tested",
        disk_stats.filled, disk_stats.visited
    );
    println!(
        "caps centered at {} and {}, capsule bounds {:?}",
        capsule.point1(),
        capsule.point2(),
        capsule.aabb()
    );

    Ok(())
}
