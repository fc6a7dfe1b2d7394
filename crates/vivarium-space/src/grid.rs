//! Dense row-major 2D grid.

use crate::error::SpaceError;
use std::iter::FusedIterator;
use vivarium_core::Coord;

/// A `width × height` array of optional values addressed by [`Coord`].
///
/// Storage is linearised as `x + width * y`. Each cell holds zero or one
/// value. The grid never resizes after construction.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Largest allowed dimension: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an empty grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let n = (width as usize) * (height as usize);
        let mut cells = Vec::with_capacity(n);
        cells.resize_with(n, || None);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, empty or not.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// `true` iff `0 <= c.x < width` and `0 <= c.y < height`.
    pub fn is_inside(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    /// Linear storage index of `c`, or `None` outside the grid.
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if !self.is_inside(c) {
            return None;
        }
        Some(c.x as usize + self.width as usize * c.y as usize)
    }

    /// Coordinate of linear storage index `i`.
    pub fn coord_of(&self, i: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((i % w) as i32, (i / w) as i32)
    }

    fn out_of_bounds(&self, coord: Coord) -> SpaceError {
        SpaceError::CoordOutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    /// The value at `c`.
    ///
    /// `None` both for an empty cell and for a coordinate outside the grid;
    /// use [`is_inside`](Self::is_inside) to tell the two apart.
    pub fn get(&self, c: Coord) -> Option<&T> {
        self.index_of(c).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable access to the value at `c`.
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        let i = self.index_of(c)?;
        self.cells[i].as_mut()
    }

    /// Remove and return the value at `c`, leaving the cell empty.
    ///
    /// `None` if the cell was already empty or `c` is outside the grid.
    pub fn take(&mut self, c: Coord) -> Option<T> {
        let i = self.index_of(c)?;
        self.cells[i].take()
    }

    /// Overwrite the cell at `c`, returning its previous content.
    ///
    /// No occupancy check is made here.
    pub fn set(&mut self, c: Coord, value: Option<T>) -> Result<Option<T>, SpaceError> {
        let i = self.index_of(c).ok_or_else(|| self.out_of_bounds(c))?;
        Ok(std::mem::replace(&mut self.cells[i], value))
    }

    /// Remove and return the value at linear index `i`.
    ///
    /// # Panics
    ///
    /// If `i >= cell_count()`. Obtain `i` from [`index_of`](Self::index_of).
    pub fn take_index(&mut self, i: usize) -> Option<T> {
        self.cells[i].take()
    }

    /// Write `value` at linear index `i`, returning the previous content.
    ///
    /// # Panics
    ///
    /// If `i >= cell_count()`. Obtain `i` from [`index_of`](Self::index_of).
    pub fn place(&mut self, i: usize, value: T) -> Option<T> {
        self.cells[i].replace(value)
    }

    /// Every coordinate of this grid in row-major order.
    ///
    /// The iterator copies the dimensions and does not borrow the grid, so
    /// a caller may mutate the grid while walking it.
    pub fn coords(&self) -> RowMajor {
        RowMajor::new(self.width, self.height)
    }

    /// Call `f(value, coord)` for every non-empty cell, in row-major order.
    pub fn for_each_occupied<F>(&self, mut f: F)
    where
        F: FnMut(&T, Coord),
    {
        for (c, v) in self.iter_occupied() {
            f(v, c);
        }
    }

    /// Iterate over non-empty cells in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords()
            .zip(self.cells.iter())
            .filter_map(|(c, v)| v.as_ref().map(|v| (c, v)))
    }
}

/// Row-major coordinate walk: `(0,0), (1,0), ..., (w-1,0), (0,1), ...`.
#[derive(Clone, Debug)]
pub struct RowMajor {
    width: u32,
    height: u32,
    next: u64,
}

impl RowMajor {
    /// Walk a `width × height` rectangle.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            next: 0,
        }
    }

    fn total(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Iterator for RowMajor {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.total() {
            return None;
        }
        let w = u64::from(self.width);
        let c = Coord::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total().saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RowMajor {}

impl FusedIterator for RowMajor {}
