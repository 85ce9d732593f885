//! Rotations, flips and transposition.
//!
//! Every transform is total and returns a fresh grid. `rotate_90`,
//! `rotate_270` and `transpose` swap width and height; the rest preserve
//! dimensions. Rotations are clockwise.

use crate::grid::{Grid, Row};

impl<T: Clone> Grid<T> {
    /// Build a `width x height` grid by pulling each cell from `self`.
    ///
    /// `source(x, y)` returns the `(column, row)` in `self` that lands at
    /// `(x, y)` in the result.
    fn remap<F>(&self, width: usize, height: usize, source: F) -> Self
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let rows = self.shared_rows();
        let out: Vec<Row<T>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let (sx, sy) = source(x, y);
                        rows[sy][sx].clone()
                    })
                    .collect::<Vec<T>>()
                    .into()
            })
            .collect();
        Self::from_shared_rows(out, width)
    }

    /// Rotate a quarter turn clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessel_grid::Grid;
    ///
    /// let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']]).unwrap();
    /// let r = g.rotate_90();
    /// assert_eq!(r.dimensions(), (3, 2));
    /// assert_eq!(r.to_vec(), vec![vec!['e', 'c', 'a'], vec!['f', 'd', 'b']]);
    /// ```
    pub fn rotate_90(&self) -> Self {
        let h = self.height();
        self.remap(h, self.width(), |x, y| (y, h - 1 - x))
    }

    /// Rotate a half turn.
    pub fn rotate_180(&self) -> Self {
        let (w, h) = self.dimensions();
        self.remap(w, h, |x, y| (w - 1 - x, h - 1 - y))
    }

    /// Rotate three quarter turns clockwise (one counter-clockwise).
    pub fn rotate_270(&self) -> Self {
        let w = self.width();
        self.remap(self.height(), w, |x, y| (w - 1 - y, x))
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&self) -> Self {
        let (w, h) = self.dimensions();
        self.remap(w, h, |x, y| (w - 1 - x, y))
    }

    /// Swap rows with columns: the cell at `(x, y)` moves to `(y, x)`.
    pub fn transpose(&self) -> Self {
        self.remap(self.height(), self.width(), |x, y| (y, x))
    }
}

impl<T> Grid<T> {
    /// Mirror top to bottom.
    ///
    /// Rows are reordered, not rebuilt, so the result shares every row
    /// with `self`.
    pub fn flip_vertical(&self) -> Self {
        let rows: Vec<Row<T>> = self.shared_rows().iter().rev().cloned().collect();
        Self::from_shared_rows(rows, self.width())
    }
}
