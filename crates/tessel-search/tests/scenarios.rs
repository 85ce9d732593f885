//! End-to-end searches over fixture grids.

use tessel_core::Position;
use tessel_search::{
    astar, bfs, bfs_with, dijkstra, find_regions, flood_fill, manhattan_distance, unit_cost,
    CellMatch, Goal, SearchConfig,
};
use tessel_test_utils::{char_grid, digit_grid, far_corner, marker, obstacle_field, small_maze};

fn open(_: Position, c: &char) -> bool {
    *c != '#'
}

fn wall_cost(_: Position, _: &char, _: Position, to: &char) -> f64 {
    if *to == '#' {
        f64::INFINITY
    } else {
        1.0
    }
}

#[test]
fn maze_solved_by_all_three() {
    let maze = small_maze();
    let (start, end) = (marker(&maze, 'S'), marker(&maze, 'E'));
    let config = SearchConfig::default();

    let b = bfs(&maze, start, end, open, &config).expect("bfs path");
    let d = dijkstra(&maze, start, end, wall_cost, &config).expect("dijkstra path");
    let a = astar(&maze, start, end, wall_cost, manhattan_distance, &config).expect("a* path");

    assert_eq!(b.length(), 8);
    assert_eq!(d.cost(), 8.0);
    assert_eq!(a.cost(), 8.0);
    for path in [&b, &d, &a] {
        assert_eq!(path.start(), start);
        assert_eq!(path.end(), end);
        assert!(path.positions().iter().all(|&p| maze.get(p) != Some(&'#')));
        assert!(path.directions().iter().all(|d| d.is_cardinal()));
    }
}

#[test]
fn search_leaves_grid_untouched() {
    let maze = small_maze();
    let before = maze.to_vec();
    let _ = bfs(&maze, marker(&maze, 'S'), marker(&maze, 'E'), open, &SearchConfig::default());
    assert_eq!(maze.to_vec(), before);
}

#[test]
fn nearest_exit_by_predicate() {
    let grid = char_grid(&["x....", ".....", "..S..", ".....", "....x"]);
    let start = marker(&grid, 'S');
    let outcome = bfs_with(
        &grid,
        start,
        Goal::matching(|_, c: &char| *c == 'x'),
        open,
        &SearchConfig::default(),
    );
    let path = outcome.path.expect("an exit");
    assert_eq!(path.length(), 4);
    assert_eq!(path.end(), Position::new(0, 0));
    assert!(outcome.stats.expanded > 0);
}

#[test]
fn height_map_climbing() {
    // Each step may climb at most one level.
    let grid = digit_grid(&["0123", "1119", "2345"]);
    let climb = |_: Position, from: &u8, _: Position, to: &u8| {
        if *to <= *from + 1 {
            1.0
        } else {
            f64::INFINITY
        }
    };
    let path = dijkstra(
        &grid,
        Position::new(0, 0),
        Position::new(3, 2),
        climb,
        &SearchConfig::default(),
    )
    .expect("climbable");
    assert!(!path.contains(Position::new(3, 1)));
    assert_eq!(path.cost(), 5.0);
}

#[test]
fn regions_of_open_field() {
    let field = obstacle_field(30, 20, 350, 7);
    let open_cells = field.count(&'.');
    let regions = find_regions(&field, &CellMatch::value('.'));
    assert_eq!(regions.iter().map(|r| r.size()).sum::<usize>(), open_cells);

    let corner = flood_fill(&field, Position::new(0, 0), &CellMatch::value('.'));
    assert_eq!(regions[0], corner);

    let reachable = bfs(
        &field,
        Position::new(0, 0),
        far_corner(&field),
        open,
        &SearchConfig::default(),
    )
    .is_some();
    assert_eq!(reachable, corner.contains(far_corner(&field)));
}

#[test]
fn unit_cost_dijkstra_equals_bfs_on_fields() {
    let config = SearchConfig::default();
    for seed in 0..8 {
        let field = obstacle_field(16, 16, 250, seed);
        let end = far_corner(&field);
        let b = bfs(&field, Position::new(0, 0), end, open, &config);
        let d = dijkstra(&field, Position::new(0, 0), end, wall_cost, &config);
        assert_eq!(b.map(|p| p.length() as f64), d.map(|p| p.cost()), "seed {seed}");
    }
}

#[test]
fn unit_cost_ignores_terrain() {
    let maze = small_maze();
    let path = dijkstra(
        &maze,
        Position::new(0, 0),
        Position::new(0, 4),
        unit_cost,
        &SearchConfig::default(),
    )
    .expect("walls are ignored");
    assert_eq!(path.cost(), 4.0);
}
