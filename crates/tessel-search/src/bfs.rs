//! Unweighted breadth-first search.

use std::collections::VecDeque;

use tessel_core::Position;
use tessel_grid::Grid;

use crate::config::SearchConfig;
use crate::goal::Goal;
use crate::path::{reconstruct, unflatten, Algorithm, Path, SearchOutcome, SearchStats};

/// Shortest path by step count from `start` to `goal`.
///
/// Cells are entered only when `is_walkable(pos, value)` holds; the start
/// cell itself is never tested. Among several shortest paths the one whose
/// moves come earliest in [`SearchConfig::moves`] wins. Returns `None` when
/// the goal is unreachable, `start` is off the grid, or the expansion bound
/// is hit first.
///
/// The returned path's cost equals its length.
pub fn bfs<'a, T, W>(
    grid: &Grid<T>,
    start: Position,
    goal: impl Into<Goal<'a, T>>,
    is_walkable: W,
    config: &SearchConfig,
) -> Option<Path>
where
    T: 'a,
    W: FnMut(Position, &T) -> bool,
{
    bfs_with(grid, start, goal, is_walkable, config).path
}

/// [`bfs`], also returning search statistics.
pub fn bfs_with<'a, T, W>(
    grid: &Grid<T>,
    start: Position,
    goal: impl Into<Goal<'a, T>>,
    mut is_walkable: W,
    config: &SearchConfig,
) -> SearchOutcome
where
    T: 'a,
    W: FnMut(Position, &T) -> bool,
{
    let goal = goal.into();
    let mut stats = SearchStats::new(Algorithm::Bfs);

    let (Some(start_index), Some(start_value)) = (grid.flat_index(start), grid.get(start)) else {
        return SearchOutcome::finish(None, stats);
    };
    if goal.is_reached(start, start_value) {
        return SearchOutcome::finish(Some(Path::trivial(start)), stats);
    }
    if let Goal::At(end) = &goal {
        if !grid.in_bounds(*end) {
            return SearchOutcome::finish(None, stats);
        }
    }

    let width = grid.width();
    let mut visited = vec![false; grid.cell_count()];
    let mut parents: Vec<Option<usize>> = vec![None; grid.cell_count()];
    let mut queue = VecDeque::from([start_index]);
    visited[start_index] = true;
    stats.pushed = 1;

    while let Some(index) = queue.pop_front() {
        let pos = unflatten(width, index);
        let Some(value) = grid.get(pos) else {
            continue;
        };
        if goal.is_reached(pos, value) {
            let path = reconstruct(&parents, index, width, 0.0).with_unit_cost();
            return SearchOutcome::finish(Some(path), stats);
        }
        if config.exhausted(stats.expanded) {
            stats.limit_reached = true;
            break;
        }
        stats.expanded += 1;

        for &direction in &config.moves {
            let Some(next) = grid.neighbor(pos, direction, 1) else {
                continue;
            };
            let (Some(next_index), Some(next_value)) = (grid.flat_index(next), grid.get(next)) else {
                continue;
            };
            if visited[next_index] || !is_walkable(next, next_value) {
                continue;
            }
            visited[next_index] = true;
            parents[next_index] = Some(index);
            queue.push_back(next_index);
            stats.pushed += 1;
        }
    }

    SearchOutcome::finish(None, stats)
}
