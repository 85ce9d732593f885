//! Connected regions of matching cells.
//!
//! Connectivity is always four-way: cells touching only at a corner belong
//! to different regions.

use std::fmt;

use indexmap::IndexSet;
use tessel_core::{Direction, Position};
use tessel_grid::Grid;

/// Which cells belong to a region.
pub enum CellMatch<'a, T> {
    /// Cells equal to this value.
    Value(T),
    /// Cells for which the predicate holds.
    Predicate(Box<dyn Fn(&T) -> bool + 'a>),
}

impl<'a, T> CellMatch<'a, T> {
    /// Match cells equal to `value`.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Match cells for which `predicate` holds.
    pub fn predicate(predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(predicate))
    }
}

impl<T: PartialEq> CellMatch<'_, T> {
    /// Whether `cell` matches.
    pub fn matches(&self, cell: &T) -> bool {
        match self {
            Self::Value(value) => value == cell,
            Self::Predicate(predicate) => predicate(cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CellMatch<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Axis-aligned box enclosing a region, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Smallest column.
    pub min_x: i32,
    /// Smallest row.
    pub min_y: i32,
    /// Largest column.
    pub max_x: i32,
    /// Largest row.
    pub max_y: i32,
}

impl Bounds {
    /// Columns spanned.
    pub fn width(&self) -> u32 {
        self.max_x.abs_diff(self.min_x) + 1
    }

    /// Rows spanned.
    pub fn height(&self) -> u32 {
        self.max_y.abs_diff(self.min_y) + 1
    }

    /// Cells enclosed.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// A set of four-connected positions.
///
/// Positions iterate in discovery order. Equality ignores order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    positions: IndexSet<Position>,
}

impl Region {
    /// Number of cells.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Whether the region has no cells.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether `pos` is part of the region.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Cells in discovery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Enclosing box, or `None` for an empty region.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.iter();
        let first = cells.next()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(cells.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Number of cell edges between the region and anything outside it,
    /// the grid border included.
    pub fn perimeter(&self) -> usize {
        self.iter()
            .map(|pos| {
                Direction::CARDINALS
                    .iter()
                    .filter(|&&d| !self.contains(pos + d))
                    .count()
            })
            .sum()
    }
}

impl<'r> IntoIterator for &'r Region {
    type Item = Position;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'r, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter().copied()
    }
}

/// The region of cells matching `rule` that is four-connected to `start`.
///
/// Empty when `start` is off the grid or does not match.
pub fn flood_fill<T: PartialEq>(grid: &Grid<T>, start: Position, rule: &CellMatch<'_, T>) -> Region {
    let mut visited = vec![false; grid.cell_count()];
    fill(grid, start, rule, &mut visited)
}

/// Every maximal four-connected region of cells matching `rule`.
///
/// Regions come out in the row-major order of their first cell. Each
/// matching cell is in exactly one region.
pub fn find_regions<T: PartialEq>(grid: &Grid<T>, rule: &CellMatch<'_, T>) -> Vec<Region> {
    let mut visited = vec![false; grid.cell_count()];
    let mut regions = Vec::new();
    for (index, (pos, value)) in grid.iter().enumerate() {
        if visited[index] || !rule.matches(value) {
            continue;
        }
        regions.push(fill(grid, pos, rule, &mut visited));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        regions = regions.len(),
        "regions found"
    );
    regions
}

fn fill<T: PartialEq>(
    grid: &Grid<T>,
    start: Position,
    rule: &CellMatch<'_, T>,
    visited: &mut [bool],
) -> Region {
    let mut region = Region::default();
    let (Some(start_index), Some(value)) = (grid.flat_index(start), grid.get(start)) else {
        return region;
    };
    if visited[start_index] || !rule.matches(value) {
        return region;
    }

    let mut stack = vec![start];
    visited[start_index] = true;
    while let Some(current) = stack.pop() {
        region.positions.insert(current);
        for direction in Direction::CARDINALS {
            let Some(next) = grid.neighbor(current, direction, 1) else {
                continue;
            };
            let (Some(index), Some(value)) = (grid.flat_index(next), grid.get(next)) else {
                continue;
            };
            if visited[index] || !rule.matches(value) {
                continue;
            }
            visited[index] = true;
            stack.push(next);
        }
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn fill_around_walls() {
        let grid = chars(&["1#1", "111", "1#1"]);
        let region = flood_fill(&grid, p(0, 0), &CellMatch::value('1'));
        assert_eq!(region.size(), 7);
        assert!(!region.contains(p(1, 0)));
        assert!(!region.contains(p(1, 2)));
        assert!(region.contains(p(2, 2)));
    }

    #[test]
    fn fill_ring() {
        let grid = chars(&["...", ".#.", "..."]);
        let region = flood_fill(&grid, p(0, 0), &CellMatch::value('.'));
        assert_eq!(region.size(), 8);
        assert_eq!(region.perimeter(), 16);
        let bounds = region.bounds().unwrap();
        assert_eq!((bounds.width(), bounds.height(), bounds.area()), (3, 3, 9));
    }

    #[test]
    fn non_matching_or_off_grid_start_is_empty() {
        let grid = chars(&["1#1"]);
        let rule = CellMatch::value('1');
        assert!(flood_fill(&grid, p(1, 0), &rule).is_empty());
        assert!(flood_fill(&grid, p(9, 9), &rule).is_empty());
        assert_eq!(flood_fill(&grid, p(1, 0), &rule).bounds(), None);
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let grid = chars(&["#.", ".#"]);
        let regions = find_regions(&grid, &CellMatch::value('#'));
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn separated_corners() {
        let grid = chars(&[".#.", "###", ".#."]);
        let regions = find_regions(&grid, &CellMatch::value('.'));
        assert_eq!(regions.len(), 4);
        assert!(regions.iter().all(|r| r.size() == 1));
        let seeds: Vec<Position> = regions.iter().filter_map(|r| r.iter().next()).collect();
        assert_eq!(seeds, vec![p(0, 0), p(2, 0), p(0, 2), p(2, 2)]);
    }

    #[test]
    fn predicate_rule() {
        let grid = Grid::from_rows(vec![vec![1, 2, 9], vec![3, 9, 9], vec![9, 4, 5]]).unwrap();
        let small = CellMatch::predicate(|v: &i32| *v < 9);
        let regions = find_regions(&grid, &small);
        let sizes: Vec<usize> = regions.iter().map(Region::size).collect();
        assert_eq!(sizes, vec![3, 2]);
        assert_eq!(format!("{small:?}"), "Predicate(..)");
    }

    #[test]
    fn perimeter_of_single_cell_and_bar() {
        let grid = chars(&["x..", "xxx"]);
        let single = flood_fill(&grid, p(1, 0), &CellMatch::value('.'));
        assert_eq!(single.size(), 2);
        assert_eq!(single.perimeter(), 6);
        let bar = flood_fill(&grid, p(0, 0), &CellMatch::value('x'));
        assert_eq!(bar.size(), 4);
        assert_eq!(bar.perimeter(), 10);
    }

    #[test]
    fn equality_ignores_discovery_order() {
        let grid = chars(&["..", ".."]);
        let rule = CellMatch::value('.');
        assert_eq!(flood_fill(&grid, p(0, 0), &rule), flood_fill(&grid, p(1, 1), &rule));
    }
}
