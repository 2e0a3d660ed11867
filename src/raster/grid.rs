use num::Zero;

/// A 2D grid of samples, e.g., an image, owned by the caller.
///
/// The rasterization engine only reads the extents of the grid and writes individual cells; it
/// never resizes it. Coordinates passed to `get` and `set` are always within the extents.
pub trait Grid2 {
    /// The type of the values stored in each cell.
    type Sample: Copy;

    /// The number of cells along `x`.
    fn width(&self) -> usize;
    /// The number of cells along `y`.
    fn height(&self) -> usize;
    /// The value of the cell `(x, y)`.
    fn get(&self, x: usize, y: usize) -> Self::Sample;
    /// Overwrites the value of the cell `(x, y)`.
    fn set(&mut self, x: usize, y: usize, value: Self::Sample);
}

/// A 3D grid of samples, e.g., a voxel stack, owned by the caller.
///
/// See [`Grid2`].
pub trait Grid3 {
    /// The type of the values stored in each cell.
    type Sample: Copy;

    /// The number of cells along `x`.
    fn width(&self) -> usize;
    /// The number of cells along `y`.
    fn height(&self) -> usize;
    /// The number of cells along `z`.
    fn depth(&self) -> usize;
    /// The value of the cell `(x, y, z)`.
    fn get(&self, x: usize, y: usize, z: usize) -> Self::Sample;
    /// Overwrites the value of the cell `(x, y, z)`.
    fn set(&mut self, x: usize, y: usize, z: usize, value: Self::Sample);
}

/// A dense 2D grid stored row by row in a single buffer.
///
/// The cell `(x, y)` is stored at index `x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGrid2<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> DenseGrid2<T> {
    /// Creates a new grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            data: vec![fill; width * height],
            width,
            height,
        }
    }
}

impl<T: Clone + Zero> DenseGrid2<T> {
    /// Creates a new grid with every cell set to zero.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, T::zero())
    }
}

impl<T> DenseGrid2<T> {
    /// Wraps an existing buffer, stored row by row.
    ///
    /// Returns `None` if the buffer length is not `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        (width.checked_mul(height)? == data.len()).then_some(Self {
            data,
            width,
            height,
        })
    }

    /// The linear index of the cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// The cells of this grid, row by row.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The cells of this grid, row by row.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over all cells with their coordinates `(x, y)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i % width, i / width), v))
    }
}

impl<T: Copy> Grid2 for DenseGrid2<T> {
    type Sample = T;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> T {
        self.data[self.index(x, y)]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.index(x, y);
        self.data[i] = value;
    }
}

/// A dense 3D grid stored slice by slice, then row by row, in a single buffer.
///
/// The cell `(x, y, z)` is stored at index `x + y * width + z * width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGrid3<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
    depth: usize,
}

impl<T: Clone> DenseGrid3<T> {
    /// Creates a new grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, depth: usize, fill: T) -> Self {
        Self {
            data: vec![fill; width * height * depth],
            width,
            height,
            depth,
        }
    }
}

impl<T: Clone + Zero> DenseGrid3<T> {
    /// Creates a new grid with every cell set to zero.
    pub fn zeros(width: usize, height: usize, depth: usize) -> Self {
        Self::new(width, height, depth, T::zero())
    }
}

impl<T> DenseGrid3<T> {
    /// Wraps an existing buffer, stored slice by slice.
    ///
    /// Returns `None` if the buffer length is not `width * height * depth`.
    pub fn from_vec(width: usize, height: usize, depth: usize, data: Vec<T>) -> Option<Self> {
        let len = width.checked_mul(height)?.checked_mul(depth)?;
        (len == data.len()).then_some(Self {
            data,
            width,
            height,
            depth,
        })
    }

    /// The linear index of the cell `(x, y, z)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + (y + z * self.height) * self.width
    }

    /// The number of cells of one `xy` slice.
    #[inline]
    pub fn slice_len(&self) -> usize {
        self.width * self.height
    }

    /// The cells of this grid, slice by slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The cells of this grid, slice by slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over all cells with their coordinates `(x, y, z)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize, usize), &T)> {
        let width = self.width.max(1);
        let height = self.height.max(1);
        self.data.iter().enumerate().map(move |(i, v)| {
            let x = i % width;
            let y = (i / width) % height;
            let z = i / (width * height);
            ((x, y, z), v)
        })
    }
}

impl<T: Copy> Grid3 for DenseGrid3<T> {
    type Sample = T;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    fn get(&self, x: usize, y: usize, z: usize) -> T {
        self.data[self.index(x, y, z)]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        let i = self.index(x, y, z);
        self.data[i] = value;
    }
}
