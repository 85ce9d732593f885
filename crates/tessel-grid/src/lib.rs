//! Immutable two-dimensional grids for the Tessel engine.
//!
//! This crate defines [`Grid`], a rectangular container of cells that is
//! never modified in place. Updates return new grids that share every
//! untouched row with the original, so "try a change and compare" loops
//! cost one row per trial rather than a full copy.
//!
//! # Components
//!
//! - Grid store: construction, bounds-checked access, neighbour queries,
//!   single and bulk updates ([`Grid::set`], [`Grid::bulk_set`]).
//! - Value index: lazily built value-to-positions lookup
//!   ([`Grid::find`], [`Grid::find_first`]).
//! - Transforms: rotations, flips and transposition
//!   ([`Grid::rotate_90`], [`Grid::flip_vertical`], ...).
//!
//! # Concurrency
//!
//! A `Grid<T>` is `Send + Sync` whenever `T` is. Many threads can query the
//! same grid, and derive their own variants from it, without locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod index;
pub mod transform;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::Grid;
pub use tessel_core::{Direction, GridError, Position, PositionList};
