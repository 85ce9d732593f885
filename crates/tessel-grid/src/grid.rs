//! The immutable [`Grid`] store.

use crate::index::ValueIndex;
use indexmap::IndexMap;
use smallvec::smallvec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use tessel_core::{Direction, GridError, Position, PositionList};

/// A shared, immutable row of cells.
pub(crate) type Row<T> = Arc<[T]>;

/// An immutable rectangular grid of cells.
///
/// Rows are stored as reference-counted slices. Every update ([`set`],
/// [`bulk_set`], the transforms) returns a new grid; rows that the update
/// does not touch are shared with the original by pointer rather than
/// copied, so a single-cell update costs one row copy plus one pointer per
/// row.
///
/// Equality and hashing are structural: two grids with the same dimensions
/// and the same cells compare equal regardless of which rows they share.
///
/// Each instance lazily builds its own value index on the first lookup
/// (see [`find`](Grid::find)). The index is never carried over to derived
/// grids or clones.
///
/// # Examples
///
/// ```
/// use tessel_grid::Grid;
///
/// let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// let updated = grid.set(1, 1, 50).unwrap();
///
/// assert_eq!(*grid.at(1, 1).unwrap(), 5);
/// assert_eq!(*updated.at(1, 1).unwrap(), 50);
/// // Row 0 was not touched, so both grids hold the same allocation.
/// assert!(grid.shares_row_with(&updated, 0));
/// ```
///
/// [`set`]: Grid::set
/// [`bulk_set`]: Grid::bulk_set
pub struct Grid<T> {
    rows: Vec<Row<T>>,
    width: usize,
    height: usize,
    pub(crate) index: OnceLock<ValueIndex<T>>,
}

impl<T> Grid<T> {
    /// Largest supported width or height: positions use `i32`, so each axis
    /// must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a grid from a row-major matrix.
    ///
    /// Returns [`GridError::MalformedGrid`] if the matrix has no rows, the
    /// rows are empty, the rows differ in length, or either dimension
    /// exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::malformed("matrix has no rows"));
        };
        let width = first.len();
        if width == 0 {
            return Err(GridError::malformed("rows have no cells"));
        }
        if width > Self::MAX_DIM || rows.len() > Self::MAX_DIM {
            return Err(GridError::malformed(format!(
                "dimensions {width}x{} exceed the maximum of {}",
                rows.len(),
                Self::MAX_DIM
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::malformed(format!(
                "row {y} has length {}, expected {width}",
                row.len()
            )));
        }
        let rows: Vec<Row<T>> = rows.into_iter().map(Arc::from).collect();
        Ok(Self::from_shared_rows(rows, width))
    }

    /// Assemble a grid from rows already known to be rectangular.
    pub(crate) fn from_shared_rows(rows: Vec<Row<T>>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        let height = rows.len();
        Self {
            rows,
            width,
            height,
            index: OnceLock::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.locate(i64::from(pos.x), i64::from(pos.y)).is_some()
    }

    /// Check `pos` and return its `(column, row)` indices.
    pub(crate) fn check_bounds(&self, pos: Position) -> Result<(usize, usize), GridError> {
        self.locate(i64::from(pos.x), i64::from(pos.y))
            .ok_or(GridError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
    }

    /// Bounds check in widened arithmetic so offsets cannot overflow.
    fn locate(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    fn position_at(&self, x: i64, y: i64) -> Option<Position> {
        let (x, y) = self.locate(x, y)?;
        // Both fit in i32: dimensions are capped at MAX_DIM.
        Some(Position::new(x as i32, y as i32))
    }

    /// The cell at column `x`, row `y`.
    ///
    /// Returns [`GridError::OutOfBounds`] outside the grid.
    pub fn at(&self, x: i32, y: i32) -> Result<&T, GridError> {
        let (cx, cy) = self.check_bounds(Position::new(x, y))?;
        Ok(&self.rows[cy][cx])
    }

    /// The cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<&T> {
        let (x, y) = self.locate(i64::from(pos.x), i64::from(pos.y))?;
        Some(&self.rows[y][x])
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        self.rows.get(y).map(|r| &r[..])
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.rows.iter().map(|r| &r[..])
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, v)| (Position::new(x as i32, y as i32), v))
        })
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.cell_count()).map(move |i| Position::new((i % width) as i32, (i / width) as i32))
    }

    /// Row-major flat index of an in-bounds position.
    pub fn flat_index(&self, pos: Position) -> Option<usize> {
        let (x, y) = self.locate(i64::from(pos.x), i64::from(pos.y))?;
        Some(y * self.width + x)
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.cell_count())
            .then(|| Position::new((index % self.width) as i32, (index / self.width) as i32))
    }

    /// The position `steps` cells from `pos` in `direction`.
    ///
    /// Returns `None` when that position is off the grid. Walking off the
    /// edge is an ordinary outcome for traversal, not an error.
    pub fn neighbor(&self, pos: Position, direction: Direction, steps: i32) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let steps = i64::from(steps);
        self.position_at(
            i64::from(pos.x) + i64::from(dx) * steps,
            i64::from(pos.y) + i64::from(dy) * steps,
        )
    }

    /// In-bounds positions at exactly `ring` distance from `pos`.
    ///
    /// Distance is Chebyshev. With `include_diagonals` the whole square ring
    /// is returned; without, only the ring cells on the four cardinal axes,
    /// so `ring = 1` yields the four cardinal neighbours. Results are in
    /// row-major order. `ring = 0` yields `pos` itself when it is in bounds.
    pub fn neighbors(&self, pos: Position, ring: u32, include_diagonals: bool) -> PositionList {
        let r = i64::from(ring);
        let (cx, cy) = (i64::from(pos.x), i64::from(pos.y));
        if r == 0 {
            return match self.position_at(cx, cy) {
                Some(p) => smallvec![p],
                None => PositionList::new(),
            };
        }

        let mut out = PositionList::new();
        // Only rows that can hold in-bounds cells.
        let dy_lo = (-r).max(-cy);
        let dy_hi = r.min(self.height as i64 - 1 - cy);
        for dy in dy_lo..=dy_hi {
            let y = cy + dy;
            if include_diagonals {
                if dy.abs() == r {
                    let x_lo = (cx - r).max(0);
                    let x_hi = (cx + r).min(self.width as i64 - 1);
                    for x in x_lo..=x_hi {
                        out.extend(self.position_at(x, y));
                    }
                } else {
                    out.extend(self.position_at(cx - r, y));
                    out.extend(self.position_at(cx + r, y));
                }
            } else if dy.abs() == r {
                out.extend(self.position_at(cx, y));
            } else if dy == 0 {
                out.extend(self.position_at(cx - r, y));
                out.extend(self.position_at(cx + r, y));
            }
        }
        out
    }

    /// Positions whose cell satisfies `predicate`, in row-major order.
    pub fn filter_positions<F>(&self, mut predicate: F) -> Vec<Position>
    where
        F: FnMut(Position, &T) -> bool,
    {
        self.iter()
            .filter(|(pos, v)| predicate(*pos, v))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// A new grid with `f` applied to every cell.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        let rows: Vec<Row<U>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(&mut f).collect::<Vec<U>>().into())
            .collect();
        Grid::from_shared_rows(rows, self.width)
    }

    /// Whether row `y` of `self` and `other` is the same allocation.
    ///
    /// Pointer identity, not content equality: two equal rows built
    /// independently are not shared.
    pub fn shares_row_with(&self, other: &Self, y: usize) -> bool {
        match (self.rows.get(y), other.rows.get(y)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of row indices at which `self` and `other` share storage.
    pub fn shared_row_count(&self, other: &Self) -> usize {
        self.rows
            .iter()
            .zip(&other.rows)
            .filter(|(a, b)| Arc::ptr_eq(a, b))
            .count()
    }

    pub(crate) fn shared_rows(&self) -> &[Row<T>] {
        &self.rows
    }
}

impl<T: Clone> Grid<T> {
    /// A `width x height` grid with every cell set to `value`.
    ///
    /// All rows share a single allocation until they are updated.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::malformed(format!(
                "dimensions {width}x{height} must both be non-zero"
            )));
        }
        if width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(GridError::malformed(format!(
                "dimensions {width}x{height} exceed the maximum of {}",
                Self::MAX_DIM
            )));
        }
        let row: Row<T> = vec![value; width].into();
        Ok(Self::from_shared_rows(vec![row; height], width))
    }

    /// A new grid identical to `self` except at `(x, y)`.
    ///
    /// Only the containing row is copied; every other row is shared.
    /// Returns [`GridError::OutOfBounds`] outside the grid.
    pub fn set(&self, x: i32, y: i32, value: T) -> Result<Self, GridError> {
        let (cx, cy) = self.check_bounds(Position::new(x, y))?;
        let mut rows = self.rows.clone();
        let mut row = rows[cy].to_vec();
        row[cx] = value;
        rows[cy] = row.into();
        Ok(Self::from_shared_rows(rows, self.width))
    }

    /// Apply many cell changes at once.
    ///
    /// Changes are grouped by row so each affected row is copied exactly
    /// once; untouched rows are shared. When a position appears more than
    /// once the last value wins. Every position is validated before any
    /// row is copied, so an out-of-bounds change leaves nothing half-built.
    pub fn bulk_set<I>(&self, changes: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Position, T)>,
    {
        let mut by_row: IndexMap<usize, Vec<(usize, T)>> = IndexMap::new();
        let mut change_count = 0usize;
        for (pos, value) in changes {
            let (x, y) = self.check_bounds(pos)?;
            by_row.entry(y).or_default().push((x, value));
            change_count += 1;
        }

        let mut rows = self.rows.clone();
        for (&y, edits) in by_row.iter_mut() {
            let mut row = rows[y].to_vec();
            for (x, value) in edits.drain(..) {
                row[x] = value;
            }
            rows[y] = row.into();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            changes = change_count,
            rows_copied = by_row.len(),
            rows_shared = self.height - by_row.len(),
            "bulk_set"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = change_count;

        Ok(Self::from_shared_rows(rows, self.width))
    }

    /// Copy the cells out into an owned row-major matrix.
    pub fn to_vec(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|r| r.to_vec()).collect()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Number of cells equal to `value`, by linear scan.
    ///
    /// Use [`count_of`](Self::count_of) for repeated lookups on hashable
    /// cell types.
    pub fn count(&self, value: &T) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|v| *v == value).count())
            .sum()
    }
}

impl<T> Clone for Grid<T> {
    /// Shares every row. The clone starts without a value index.
    fn clone(&self) -> Self {
        Self::from_shared_rows(self.rows.clone(), self.width)
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a[..] == b[..])
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: Hash> Hash for Grid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        for row in &self.rows {
            row[..].hash(state);
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rows", &self.rows)
            .finish()
    }
}

/// Renders a header `Grid[<cell type>](WxH)` followed by one line per row.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid[{}]({}x{})",
            short_type_name::<T>(),
            self.width,
            self.height
        )?;
        for row in &self.rows {
            writeln!(f)?;
            for cell in row.iter() {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Last path segment of a type name, e.g. `String` for
/// `alloc::string::String`. Generic types are left as they are.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}
