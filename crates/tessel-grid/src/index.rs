//! Lazy value-to-positions lookup.
//!
//! The index for a grid is built on the first lookup and kept for the
//! lifetime of that grid instance. Grids are immutable, so it never needs
//! invalidating; derived grids start without one.

use crate::grid::Grid;
use indexmap::IndexMap;
use std::hash::Hash;
use tessel_core::Position;

/// Positions of every distinct cell value, in row-major order.
///
/// Keys are kept in first-seen order so [`Grid::distinct_values`] is
/// deterministic.
#[derive(Debug)]
pub(crate) struct ValueIndex<T> {
    positions: IndexMap<T, Vec<Position>>,
}

impl<T: Eq + Hash + Clone> ValueIndex<T> {
    fn build(grid: &Grid<T>) -> Self {
        let mut positions: IndexMap<T, Vec<Position>> = IndexMap::new();
        for (pos, value) in grid.iter() {
            match positions.get_mut(value) {
                Some(list) => list.push(pos),
                None => {
                    positions.insert(value.clone(), vec![pos]);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            distinct = positions.len(),
            "built value index"
        );

        Self { positions }
    }
}

impl<T: Eq + Hash + Clone> Grid<T> {
    fn value_index(&self) -> &ValueIndex<T> {
        self.index.get_or_init(|| ValueIndex::build(self))
    }

    /// Every position holding `value`, in row-major order.
    ///
    /// The first call on a grid builds the index in one pass over the
    /// cells; later calls are hash lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessel_core::Position;
    /// use tessel_grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['b', 'a']]).unwrap();
    /// assert_eq!(grid.find(&'b'), &[Position::new(1, 0), Position::new(0, 1)]);
    /// assert!(grid.find(&'z').is_empty());
    /// ```
    pub fn find(&self, value: &T) -> &[Position] {
        self.value_index()
            .positions
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first position holding `value` in row-major order.
    pub fn find_first(&self, value: &T) -> Option<Position> {
        self.find(value).first().copied()
    }

    /// Number of cells holding `value`.
    pub fn count_of(&self, value: &T) -> usize {
        self.find(value).len()
    }

    /// Distinct cell values in the order they are first met scanning
    /// row-major.
    pub fn distinct_values(&self) -> impl Iterator<Item = &T> + '_ {
        self.value_index().positions.keys()
    }

    /// Whether this instance has built its index yet.
    pub fn is_index_built(&self) -> bool {
        self.index.get().is_some()
    }
}
