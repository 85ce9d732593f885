//! Traversal over Tessel grids: shortest paths and connected regions.
//!
//! Every algorithm here reads a [`Grid`](tessel_grid::Grid) and returns a
//! fresh result value; none of them modify the grid. "No path" and "no
//! region" are ordinary results (`None`, an empty [`Region`]), never
//! errors.
//!
//! # Path engine
//!
//! | Function | Frontier | Optimal for |
//! |----------|----------|-------------|
//! | [`bfs`] | FIFO queue | step count |
//! | [`dijkstra`] | priority queue on cost | non-negative edge costs |
//! | [`astar`] | priority queue on cost + estimate | same, given an admissible heuristic |
//!
//! Each takes a [`SearchConfig`] naming the moves to try and an optional
//! expansion bound. The `*_with` variants also return [`SearchStats`].
//!
//! # Region analyzer
//!
//! [`flood_fill`] grows one four-connected [`Region`] from a seed;
//! [`find_regions`] partitions every matching cell into regions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;
pub mod config;
pub mod goal;
pub mod heuristic;
pub mod path;
pub mod region;
pub mod weighted;

mod frontier;

pub use bfs::{bfs, bfs_with};
pub use config::SearchConfig;
pub use goal::Goal;
pub use heuristic::{chebyshev_distance, manhattan_distance, octile_distance, zero_heuristic};
pub use path::{Algorithm, Path, SearchOutcome, SearchStats};
pub use region::{find_regions, flood_fill, Bounds, CellMatch, Region};
pub use weighted::{astar, astar_with, dijkstra, dijkstra_with, unit_cost};
