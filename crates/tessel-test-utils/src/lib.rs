//! Test fixtures for Tessel development.
//!
//! Builds grids from compact string literals so tests can state scenarios
//! the way puzzle inputs look, plus seeded obstacle fields for benchmarks
//! and larger property checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand::rngs::ChaCha8Rng;
use tessel_core::Position;
use tessel_grid::Grid;

/// A grid of characters, one string per row.
///
/// # Panics
///
/// Panics if the rows are empty or ragged; fixtures are expected to be
/// well formed.
pub fn char_grid(rows: &[&str]) -> Grid<char> {
    Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect())
        .unwrap_or_else(|e| panic!("bad char fixture {rows:?}: {e}"))
}

/// A grid of single decimal digits, one string per row.
///
/// # Panics
///
/// Panics on non-digit characters or malformed rows.
pub fn digit_grid(rows: &[&str]) -> Grid<u8> {
    let cells = rows
        .iter()
        .map(|r| {
            r.chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => d as u8,
                    None => panic!("non-digit {c:?} in fixture row {r:?}"),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(cells).unwrap_or_else(|e| panic!("bad digit fixture {rows:?}: {e}"))
}

/// Small maze with a start `S`, an end `E` and walls `#`.
///
/// Shortest cardinal path from `S` to `E` is 8 steps.
pub fn small_maze() -> Grid<char> {
    char_grid(&["S....", "#.###", ".....", "###..", "...#E"])
}

/// Location of the unique `marker` cell in `grid`.
///
/// # Panics
///
/// Panics if the marker is missing.
pub fn marker(grid: &Grid<char>, marker: char) -> Position {
    grid.find_first(&marker)
        .unwrap_or_else(|| panic!("fixture has no {marker:?} marker"))
}

/// Seeded ChaCha8 generator for fixtures.
///
/// The same seed yields the same stream on every platform.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A `width x height` field of `.` with roughly `walls_per_mille / 1000`
/// of the cells set to `#`.
///
/// The top-left and bottom-right corners are always open so they can
/// serve as search endpoints.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn obstacle_field(width: usize, height: usize, walls_per_mille: u64, seed: u64) -> Grid<char> {
    let mut rng = seeded_rng(seed);
    let mut rows: Vec<Vec<char>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| if rng.random_range(0..1000) < walls_per_mille { '#' } else { '.' })
                .collect()
        })
        .collect();
    if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
        *first = '.';
    }
    if let Some(last) = rows.last_mut().and_then(|r| r.last_mut()) {
        *last = '.';
    }
    Grid::from_rows(rows).unwrap_or_else(|e| panic!("bad obstacle field: {e}"))
}

/// Bottom-right corner of `grid`.
pub fn far_corner<T>(grid: &Grid<T>) -> Position {
    Position::new(grid.width() as i32 - 1, grid.height() as i32 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_grid_dimensions() {
        let g = char_grid(&["abc", "def"]);
        assert_eq!(g.dimensions(), (3, 2));
    }

    #[test]
    fn digit_grid_values() {
        let g = digit_grid(&["123", "456"]);
        assert_eq!(*g.at(2, 1).unwrap(), 6);
    }

    #[test]
    fn small_maze_markers() {
        let maze = small_maze();
        assert_eq!(marker(&maze, 'S'), Position::new(0, 0));
        assert_eq!(marker(&maze, 'E'), Position::new(4, 4));
    }

    #[test]
    fn seeded_rng_repeats_its_stream() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        let xs: Vec<u32> = (0..16).map(|_| a.random_range(0..100)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.random_range(0..100)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 100));
    }

    #[test]
    fn obstacle_field_is_reproducible() {
        let a = obstacle_field(20, 10, 250, 7);
        let b = obstacle_field(20, 10, 250, 7);
        let c = obstacle_field(20, 10, 250, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(*a.at(0, 0).unwrap(), '.');
        assert_eq!(a.get(far_corner(&a)), Some(&'.'));
    }
}
