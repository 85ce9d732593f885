//! Grid invariant test helpers.
//!
//! These functions verify the structural guarantees every grid must keep:
//! transform round trips, dimension swaps, and single-cell updates that
//! leave the rest of the grid (and the original) untouched. Reused by the
//! unit and property tests across this crate.

use crate::grid::Grid;
use std::fmt::Debug;
use tessel_core::Position;

/// Assert that four quarter turns return the original grid.
pub fn assert_rotation_cycle<T: Clone + PartialEq + Debug>(grid: &Grid<T>) {
    let mut g = grid.clone();
    for _ in 0..4 {
        g = g.rotate_90();
    }
    assert_eq!(&g, grid, "rotate_90 x4 did not return the original");
    assert_eq!(
        &grid.rotate_90().rotate_270(),
        grid,
        "rotate_270 is not the inverse of rotate_90"
    );
    assert_eq!(&grid.rotate_180().rotate_180(), grid);
}

/// Assert that flips and transpose are involutions.
pub fn assert_involutions<T: Clone + PartialEq + Debug>(grid: &Grid<T>) {
    assert_eq!(&grid.flip_horizontal().flip_horizontal(), grid);
    assert_eq!(&grid.flip_vertical().flip_vertical(), grid);
    assert_eq!(&grid.transpose().transpose(), grid);
}

/// Assert which transforms swap width and height.
pub fn assert_transform_dimensions<T: Clone>(grid: &Grid<T>) {
    let (w, h) = grid.dimensions();
    assert_eq!(grid.rotate_90().dimensions(), (h, w));
    assert_eq!(grid.rotate_270().dimensions(), (h, w));
    assert_eq!(grid.transpose().dimensions(), (h, w));
    assert_eq!(grid.rotate_180().dimensions(), (w, h));
    assert_eq!(grid.flip_horizontal().dimensions(), (w, h));
    assert_eq!(grid.flip_vertical().dimensions(), (w, h));
}

/// Assert that overwriting each cell with a neighbour's value changes that
/// cell only, copies only its row, and leaves the original intact.
pub fn assert_set_is_local<T: Clone + PartialEq + Debug>(grid: &Grid<T>) {
    let before = grid.to_vec();
    let replacement = grid
        .get(Position::ORIGIN)
        .cloned()
        .expect("every grid has an origin cell");
    for (pos, _) in grid.iter() {
        let updated = grid
            .set(pos.x, pos.y, replacement.clone())
            .expect("in-bounds set should succeed");
        assert_eq!(updated.get(pos), Some(&replacement));
        for (other, value) in grid.iter() {
            if other != pos {
                assert_eq!(updated.get(other), Some(value), "set at {pos} changed {other}");
            }
        }
        assert_eq!(
            updated.shared_row_count(grid),
            grid.height() - 1,
            "set at {pos} copied more than one row"
        );
    }
    assert_eq!(grid.to_vec(), before, "set mutated the original grid");
}

/// Run every grid compliance check.
pub fn run_full_compliance<T: Clone + PartialEq + Debug>(grid: &Grid<T>) {
    assert_rotation_cycle(grid);
    assert_involutions(grid);
    assert_transform_dimensions(grid);
    assert_set_is_local(grid);
}
