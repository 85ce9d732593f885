//! Weighted searches: Dijkstra and A*.
//!
//! Both run the same best-first loop over a [`Frontier`] keyed by
//! `cost + estimate`; Dijkstra is the case where the estimate is zero.
//! A cell may sit in the frontier several times. Entries whose cost is
//! worse than the best known cost for their cell are skipped when popped.
//!
//! Edge costs come from a caller-supplied function
//! `cost(from, from_value, to, to_value)`. A cost that is negative, NaN
//! or infinite blocks the move.

use tessel_core::Position;
use tessel_grid::Grid;

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::goal::Goal;
use crate::path::{reconstruct, unflatten, Algorithm, Path, SearchOutcome, SearchStats};

/// Edge cost of one for every move.
pub fn unit_cost<T>(_: Position, _: &T, _: Position, _: &T) -> f64 {
    1.0
}

/// Cheapest path from `start` to `goal` under `cost`.
///
/// Ties between equally cheap frontier entries resolve first-in first-out,
/// so repeated runs return the same path. Returns `None` when the goal is
/// unreachable, `start` is off the grid, or the expansion bound is hit
/// first.
pub fn dijkstra<'a, T, C>(
    grid: &Grid<T>,
    start: Position,
    goal: impl Into<Goal<'a, T>>,
    cost: C,
    config: &SearchConfig,
) -> Option<Path>
where
    T: 'a,
    C: FnMut(Position, &T, Position, &T) -> f64,
{
    dijkstra_with(grid, start, goal, cost, config).path
}

/// [`dijkstra`], also returning search statistics.
pub fn dijkstra_with<'a, T, C>(
    grid: &Grid<T>,
    start: Position,
    goal: impl Into<Goal<'a, T>>,
    cost: C,
    config: &SearchConfig,
) -> SearchOutcome
where
    T: 'a,
    C: FnMut(Position, &T, Position, &T) -> f64,
{
    let goal = goal.into();
    best_first(grid, start, &goal, cost, |_| 0.0, config, Algorithm::Dijkstra)
}

/// Cheapest path from `start` to `end`, guided by `heuristic(pos, end)`.
///
/// With an admissible and consistent heuristic (see
/// [`heuristic`](crate::heuristic)) the result costs the same as
/// [`dijkstra`]'s. An overestimating heuristic still yields a path, but
/// not necessarily a cheapest one; it is not checked.
pub fn astar<T, C, H>(
    grid: &Grid<T>,
    start: Position,
    end: Position,
    cost: C,
    heuristic: H,
    config: &SearchConfig,
) -> Option<Path>
where
    C: FnMut(Position, &T, Position, &T) -> f64,
    H: Fn(Position, Position) -> f64,
{
    astar_with(grid, start, end, cost, heuristic, config).path
}

/// [`astar`], also returning search statistics.
pub fn astar_with<T, C, H>(
    grid: &Grid<T>,
    start: Position,
    end: Position,
    cost: C,
    heuristic: H,
    config: &SearchConfig,
) -> SearchOutcome
where
    C: FnMut(Position, &T, Position, &T) -> f64,
    H: Fn(Position, Position) -> f64,
{
    best_first(
        grid,
        start,
        &Goal::At(end),
        cost,
        |pos| heuristic(pos, end),
        config,
        Algorithm::AStar,
    )
}

fn best_first<T, C, H>(
    grid: &Grid<T>,
    start: Position,
    goal: &Goal<'_, T>,
    mut cost: C,
    estimate: H,
    config: &SearchConfig,
    algorithm: Algorithm,
) -> SearchOutcome
where
    C: FnMut(Position, &T, Position, &T) -> f64,
    H: Fn(Position) -> f64,
{
    let mut stats = SearchStats::new(algorithm);

    let (Some(start_index), Some(start_value)) = (grid.flat_index(start), grid.get(start)) else {
        return SearchOutcome::finish(None, stats);
    };
    if goal.is_reached(start, start_value) {
        return SearchOutcome::finish(Some(Path::trivial(start)), stats);
    }
    if let Goal::At(end) = goal {
        if !grid.in_bounds(*end) {
            return SearchOutcome::finish(None, stats);
        }
    }

    let width = grid.width();
    let mut best = vec![f64::INFINITY; grid.cell_count()];
    let mut parents: Vec<Option<usize>> = vec![None; grid.cell_count()];
    let mut frontier = Frontier::new();
    best[start_index] = 0.0;
    frontier.push(start_index, 0.0, estimate(start));
    stats.pushed = 1;

    while let Some(entry) = frontier.pop() {
        if entry.cost > best[entry.index] {
            continue;
        }
        let pos = unflatten(width, entry.index);
        let Some(value) = grid.get(pos) else {
            continue;
        };
        if goal.is_reached(pos, value) {
            let path = reconstruct(&parents, entry.index, width, entry.cost);
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
            let step = cost(pos, value, next, next_value);
            if !step.is_finite() || step < 0.0 {
                continue;
            }
            let tentative = entry.cost + step;
            if tentative < best[next_index] {
                best[next_index] = tentative;
                parents[next_index] = Some(entry.index);
                frontier.push(next_index, tentative, tentative + estimate(next));
                stats.pushed += 1;
            }
        }
    }

    SearchOutcome::finish(None, stats)
}
