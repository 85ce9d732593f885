//! Search configuration parameters.

use tessel_core::Direction;

/// Configuration shared by every search algorithm.
///
/// Controls which moves are tried from each cell and how far a search may
/// run before giving up. All fields are public; the `with_*` methods are
/// conveniences for building a config inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Directions tried from each expanded cell, in this order.
    ///
    /// The order is the tie-break between equally good paths: among
    /// several shortest paths, BFS returns the one whose moves come first
    /// here. Default: the four cardinals, clockwise from north.
    pub moves: Vec<Direction>,

    /// Upper bound on expanded cells.
    ///
    /// A search that reaches this many expansions without finding the goal
    /// stops and reports no path, with
    /// [`SearchStats::limit_reached`](crate::SearchStats::limit_reached)
    /// set. `None` (the default) lets the search run to exhaustion.
    pub max_expanded: Option<usize>,
}

impl SearchConfig {
    /// Default move set: the four cardinal directions.
    pub const DEFAULT_MOVES: [Direction; 4] = Direction::CARDINALS;

    /// Default expansion bound: unbounded.
    pub const DEFAULT_MAX_EXPANDED: Option<usize> = None;

    /// Cardinal moves, no expansion bound.
    pub fn new() -> Self {
        Self {
            moves: Self::DEFAULT_MOVES.to_vec(),
            max_expanded: Self::DEFAULT_MAX_EXPANDED,
        }
    }

    /// Cardinal and diagonal moves, no expansion bound.
    pub fn eight_way() -> Self {
        Self::new().with_moves(Direction::ALL)
    }

    /// Replace the move set.
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Direction>) -> Self {
        self.moves = moves.into_iter().collect();
        self
    }

    /// Bound the number of expanded cells.
    pub fn with_max_expanded(mut self, limit: usize) -> Self {
        self.max_expanded = Some(limit);
        self
    }

    /// Whether `expanded` has reached the configured bound.
    pub(crate) fn exhausted(&self, expanded: usize) -> bool {
        self.max_expanded.is_some_and(|limit| expanded >= limit)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_way_unbounded() {
        let config = SearchConfig::default();
        assert_eq!(config.moves, Direction::CARDINALS.to_vec());
        assert_eq!(config.max_expanded, None);
        assert!(!config.exhausted(usize::MAX));
    }

    #[test]
    fn builders() {
        let config = SearchConfig::eight_way().with_max_expanded(10);
        assert_eq!(config.moves.len(), 8);
        assert!(!config.exhausted(9));
        assert!(config.exhausted(10));
    }
}
