//! Tessel: an immutable grid engine for puzzle solvers and simulations.
//!
//! This is the facade crate that re-exports the public API of the Tessel
//! sub-crates. Most users only need `tessel` as a dependency.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! let rows = ["S..", ".#.", "..E"];
//! let grid = Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap();
//!
//! let start = grid.find_first(&'S').unwrap();
//! let end = grid.find_first(&'E').unwrap();
//! let path = bfs(&grid, start, end, |_, c| *c != '#', &SearchConfig::default()).unwrap();
//! assert_eq!(path.length(), 4);
//!
//! // Updates return a new grid; the original is untouched.
//! let blocked = grid.set(1, 0, '#').unwrap().set(0, 1, '#').unwrap();
//! assert!(bfs(&blocked, start, end, |_, c| *c != '#', &SearchConfig::default()).is_none());
//! assert_eq!(grid.at(1, 0), Ok(&'.'));
//!
//! let open = find_regions(&grid, &CellMatch::value('.'));
//! assert_eq!(open.len(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `Position`, `Direction`, `GridError` |
//! | [`grid`] | `tessel-grid` | `Grid`, value index, transforms |
//! | [`search`] | `tessel-search` | BFS, Dijkstra, A*, flood fill, regions |
//!
//! # Features
//!
//! `tracing` (default) emits `debug`/`trace` events for index builds, bulk
//! updates, finished searches and region scans.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions, directions and errors (`tessel-core`).
pub use tessel_core as types;

/// The immutable grid store (`tessel-grid`).
///
/// [`grid::Grid`] is also in the [`prelude`].
pub use tessel_grid as grid;

/// Pathfinding and region analysis (`tessel-search`).
///
/// Heuristics for A* live in [`search::heuristic`].
pub use tessel_search as search;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{Direction, GridError, Position};

    // Grid
    pub use tessel_grid::Grid;

    // Search
    pub use tessel_search::{
        astar, bfs, dijkstra, find_regions, flood_fill, manhattan_distance, unit_cost, CellMatch,
        Goal, Path, Region, SearchConfig,
    };
}
