//! Search results.

use std::fmt;
use tessel_core::{Direction, Position};

/// An ordered walk from a start position to an end position, inclusive.
///
/// Produced by the search functions and never modified afterwards. A path
/// always holds at least one position; "no path" is `None`, not an empty
/// path.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    positions: Vec<Position>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(positions: Vec<Position>, cost: f64) -> Self {
        debug_assert!(!positions.is_empty());
        Self { positions, cost }
    }

    /// The zero-step path that starts and ends at `pos`.
    pub(crate) fn trivial(pos: Position) -> Self {
        Self::new(vec![pos], 0.0)
    }

    /// Reprice the path at one per step.
    pub(crate) fn with_unit_cost(mut self) -> Self {
        self.cost = self.length() as f64;
        self
    }

    /// Positions from start to end.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of steps: one less than the number of positions.
    pub fn length(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Sum of the edge costs along the path.
    ///
    /// For breadth-first search this equals [`length`](Self::length).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// First position.
    pub fn start(&self) -> Position {
        self.positions[0]
    }

    /// Last position.
    pub fn end(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Whether the path visits `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// The direction of each step, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.positions
            .windows(2)
            .filter_map(|w| Direction::from_delta(w[1].x - w[0].x, w[1].y - w[0].y))
            .collect()
    }

    /// Consume the path, returning its positions.
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path {} -> {} ({} steps, cost {})",
            self.start(),
            self.end(),
            self.length(),
            self.cost
        )
    }
}

/// The algorithm that produced a [`SearchOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Unweighted breadth-first search.
    Bfs,
    /// Uniform-cost search.
    Dijkstra,
    /// Heuristic-guided best-first search.
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "bfs"),
            Self::Dijkstra => write!(f, "dijkstra"),
            Self::AStar => write!(f, "a*"),
        }
    }
}

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Which algorithm ran.
    pub algorithm: Algorithm,
    /// Cells taken off the frontier and expanded.
    pub expanded: usize,
    /// Frontier insertions, including stale duplicates.
    pub pushed: usize,
    /// Whether the search stopped at
    /// [`SearchConfig::max_expanded`](crate::SearchConfig::max_expanded).
    pub limit_reached: bool,
}

impl SearchStats {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            expanded: 0,
            pushed: 0,
            limit_reached: false,
        }
    }
}

/// A path (if any) together with the statistics of the search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// The path found, or `None` when the goal is unreachable or the
    /// expansion bound was hit first.
    pub path: Option<Path>,
    /// Search counters.
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub(crate) fn finish(path: Option<Path>, stats: SearchStats) -> Self {
        #[cfg(feature = "tracing")]
        {
            if stats.limit_reached {
                tracing::warn!(
                    algorithm = %stats.algorithm,
                    expanded = stats.expanded,
                    "search stopped at expansion limit"
                );
            }
            tracing::debug!(
                algorithm = %stats.algorithm,
                expanded = stats.expanded,
                pushed = stats.pushed,
                found = path.is_some(),
                cost = path.as_ref().map(Path::cost),
                "search finished"
            );
        }
        Self { path, stats }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Position of row-major flat index `index` on a grid `width` cells wide.
pub(crate) fn unflatten(width: usize, index: usize) -> Position {
    Position::new((index % width) as i32, (index / width) as i32)
}

/// Rebuild a path by following parent links back from `goal`.
///
/// `parents[i]` is the flat index the search arrived at `i` from, or
/// `None` for the start.
pub(crate) fn reconstruct(parents: &[Option<usize>], goal: usize, width: usize, cost: f64) -> Path {
    let mut reverse = vec![unflatten(width, goal)];
    let mut current = goal;
    while let Some(parent) = parents[current] {
        reverse.push(unflatten(width, parent));
        current = parent;
    }
    reverse.reverse();
    Path::new(reverse, cost)
}
