/*!
digishapes
==========

**digishapes** rasterizes parametric 2D and 3D geometric primitives (disks, ellipses, oriented
boxes, capsules, cubes, cuboids, cylinders, ellipsoids, balls) into pixel and voxel grids.

Every shape is described by a canonical form (centered at the origin, axis-aligned, unit-sized)
and an affine transform mapping that canonical form to world space. A grid cell is filled when
its center, mapped back into canonical space, satisfies the shape's canonical predicate.

```
use digishapes::math::Point2;
use digishapes::raster::{fill_shape_2d, DenseGrid2, ScanStrategy};
use digishapes::shape::{Capsule2d, Shape2d};

let capsule = Capsule2d::try_new(Point2::new(50.0, 50.0), 40.0, 10.0, 30.0)?;
assert!(capsule.contains(50.0, 50.0));

let mut image = DenseGrid2::<u8>::zeros(100, 100);
let stats = fill_shape_2d(&mut image, &capsule, 255, ScanStrategy::Bounded);
assert!(stats.filled > 0);
# Ok::<(), digishapes::GeometryError>(())
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Shape constructors take flat parameter lists.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
mod error;
pub mod math;
mod query;
pub mod raster;
pub mod shape;
pub mod transform;

pub use self::error::GeometryError;
