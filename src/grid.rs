//! Row-major 2D storage shared by the noise fields

use std::ops::Index;

/// Dense 2D grid stored row-major with explicit dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid filled with `value`
    #[cfg(test)]
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` for every cell, row by row
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Grid { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Value at column `x`, row `y`, or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.offset(x, y).map(|i| &self.data[i])
    }

    /// Overwrite the value at column `x`, row `y`; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = value;
        }
    }

    /// Cells in row-major order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }
}

/// Indexing by `(x, y)` panics when either coordinate is out of bounds
impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        match self.get(x, y) {
            Some(value) => value,
            None => panic!(
                "grid index ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }
}

impl Grid<f64> {
    /// Smallest and largest value, `None` for an empty grid
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| y * 10 + x);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        let values: Vec<usize> = grid.values().copied().collect();
        assert_eq!(values, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.get(2, 1), Some(&12));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(2, 2, 0.0f64);
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 2).is_none());

        grid.set(5, 5, 1.0);
        assert!(grid.values().all(|&v| v == 0.0));

        grid.set(1, 0, 1.0);
        assert_eq!(grid.get(1, 0), Some(&1.0));
    }

    #[test]
    fn test_index_by_column_and_row() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(grid[(2, 0)], (2, 0));
        assert_eq!(grid[(0, 1)], (0, 1));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_past_row_end_panics() {
        // (3, 0) must not wrap onto the next row
        let grid = Grid::from_fn(3, 2, |x, y| y * 3 + x);
        let _ = grid[(3, 0)];
    }

    #[test]
    fn test_range() {
        let grid = Grid::from_fn(4, 1, |x, _| x as f64 - 1.5);
        assert_eq!(grid.range(), Some((-1.5, 1.5)));

        let empty: Grid<f64> = Grid::new(0, 0, 0.0);
        assert_eq!(empty.range(), None);
    }
}
