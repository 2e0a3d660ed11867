use digishapes::math::Point3;
use digishapes::raster::{fill_shape_3d, DenseGrid3, Grid3, ScanStrategy};
use digishapes::shape::Cylinder;

fn main() -> Result<(), digishapes::GeometryError> {
    /*
     * A slanted cylinder crossing a small voxel stack.
     */
    let cylinder = Cylinder::try_new(
        Point3::new(4.0, 4.0, 2.0),
        Point3::new(20.0, 14.0, 13.0),
        3.0,
    )?;

    let mut voxels = DenseGrid3::<u16>::zeros(24, 18, 16);
    let stats = fill_shape_3d(&mut voxels, &cylinder, 1000, ScanStrategy::Bounded);

    /*
     * Print every other z slice.
     */
    for z in (0..voxels.depth()).step_by(2) {
        println!("z = {z}");

        for y in (0..voxels.height()).rev() {
            let row: String = (0..voxels.width())
                .map(|x| if voxels.get(x, y, z) > 0 { '#' } else { '.' })
                .collect();
            println!("  {row}");
        }
    }

    println!(
        "height {:.2}, {} voxels filled out of {} tested, bounds {:?}",
        cylinder.height(),
        stats.filled,
        stats.visited,
        cylinder.aabb()
    );

    Ok(())
}
