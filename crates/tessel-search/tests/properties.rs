//! Property checks tying the algorithms to each other.

use std::collections::HashSet;

use proptest::prelude::*;
use tessel_core::Position;
use tessel_grid::Grid;
use tessel_search::{
    astar, bfs, chebyshev_distance, dijkstra, find_regions, flood_fill, manhattan_distance,
    CellMatch, SearchConfig,
};

/// Boolean grids, `true` meaning open.
fn arb_terrain() -> impl Strategy<Value = Grid<bool>> {
    (1usize..10, 1usize..10).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(prop::bool::weighted(0.7), w), h)
            .prop_map(|rows| Grid::from_rows(rows).unwrap())
    })
}

fn arb_cell(grid: &Grid<bool>) -> impl Strategy<Value = Position> {
    (0..grid.width() as i32, 0..grid.height() as i32).prop_map(|(x, y)| Position::new(x, y))
}

fn terrain_and_ends() -> impl Strategy<Value = (Grid<bool>, Position, Position)> {
    arb_terrain().prop_flat_map(|g| {
        let cells = (arb_cell(&g), arb_cell(&g));
        (Just(g), cells).prop_map(|(g, (a, b))| (g, a, b))
    })
}

fn walkable(_: Position, open: &bool) -> bool {
    *open
}

fn step_cost(_: Position, _: &bool, _: Position, open: &bool) -> f64 {
    if *open {
        1.0
    } else {
        f64::INFINITY
    }
}

/// Cost 1 on open ground, 3 into cells on odd columns.
fn uneven_cost(_: Position, _: &bool, to: Position, open: &bool) -> f64 {
    match (*open, to.x % 2) {
        (false, _) => f64::INFINITY,
        (true, 0) => 1.0,
        (true, _) => 3.0,
    }
}

proptest! {
    #[test]
    fn bfs_length_matches_unit_dijkstra((grid, start, end) in terrain_and_ends()) {
        let config = SearchConfig::default();
        let b = bfs(&grid, start, end, walkable, &config);
        let d = dijkstra(&grid, start, end, step_cost, &config);
        prop_assert_eq!(b.map(|p| p.length() as f64), d.map(|p| p.cost()));
    }

    #[test]
    fn astar_cost_matches_dijkstra((grid, start, end) in terrain_and_ends()) {
        let config = SearchConfig::default();
        let d = dijkstra(&grid, start, end, uneven_cost, &config);
        let a = astar(&grid, start, end, uneven_cost, manhattan_distance, &config);
        prop_assert_eq!(d.map(|p| p.cost()), a.map(|p| p.cost()));
    }

    #[test]
    fn eight_way_astar_matches_dijkstra((grid, start, end) in terrain_and_ends()) {
        let config = SearchConfig::eight_way();
        let d = dijkstra(&grid, start, end, step_cost, &config);
        let a = astar(&grid, start, end, step_cost, chebyshev_distance, &config);
        prop_assert_eq!(d.map(|p| p.cost()), a.map(|p| p.cost()));
    }

    #[test]
    fn bfs_paths_are_contiguous((grid, start, end) in terrain_and_ends()) {
        if let Some(path) = bfs(&grid, start, end, walkable, &SearchConfig::default()) {
            prop_assert_eq!(path.start(), start);
            prop_assert_eq!(path.end(), end);
            prop_assert_eq!(path.directions().len(), path.length());
            for &pos in &path.positions()[1..] {
                prop_assert_eq!(grid.get(pos), Some(&true));
            }
        }
    }

    #[test]
    fn regions_partition_matching_cells(grid in arb_terrain()) {
        let regions = find_regions(&grid, &CellMatch::value(true));
        let mut seen = HashSet::new();
        for region in &regions {
            prop_assert!(!region.is_empty());
            for pos in region {
                prop_assert!(seen.insert(pos), "{} in two regions", pos);
            }
        }
        let matching: HashSet<Position> = grid.filter_positions(|_, v| *v).into_iter().collect();
        prop_assert_eq!(seen, matching);
    }

    #[test]
    fn flood_fill_is_seed_independent(grid in arb_terrain()) {
        let rule = CellMatch::value(true);
        for region in find_regions(&grid, &rule) {
            for seed in &region {
                prop_assert_eq!(&flood_fill(&grid, seed, &rule), &region);
            }
        }
    }
}
