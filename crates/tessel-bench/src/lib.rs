//! Benchmark profiles for the Tessel grid engine.
//!
//! - [`reference_field`]: 100x100 obstacle field (10K cells)
//! - [`stress_field`]: 316x316 obstacle field (~100K cells)
//! - [`edit_batch`]: deterministic batch of cell edits for `bulk_set`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::RngExt;
use tessel_core::Position;
use tessel_grid::Grid;
use tessel_test_utils::{obstacle_field, seeded_rng};

/// Wall density of the benchmark fields, per mille.
pub const WALLS_PER_MILLE: u64 = 250;

/// 100x100 field with a quarter of the cells walled.
pub fn reference_field(seed: u64) -> Grid<char> {
    obstacle_field(100, 100, WALLS_PER_MILLE, seed)
}

/// 316x316 field, about ten times the cells of [`reference_field`].
pub fn stress_field(seed: u64) -> Grid<char> {
    obstacle_field(316, 316, WALLS_PER_MILLE, seed)
}

/// `count` in-bounds edits on `grid`, each writing `value`.
pub fn edit_batch<T: Clone>(grid: &Grid<T>, count: usize, value: T, seed: u64) -> Vec<(Position, T)> {
    let mut rng = seeded_rng(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..grid.width()) as i32;
            let y = rng.random_range(0..grid.height()) as i32;
            (Position::new(x, y), value.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_have_expected_size() {
        assert_eq!(reference_field(1).cell_count(), 10_000);
        assert_eq!(stress_field(1).dimensions(), (316, 316));
    }

    #[test]
    fn edit_batch_is_in_bounds_and_deterministic() {
        let grid = reference_field(3);
        let a = edit_batch(&grid, 64, '#', 9);
        assert_eq!(a, edit_batch(&grid, 64, '#', 9));
        assert!(a.iter().all(|(p, _)| grid.in_bounds(*p)));
    }
}
