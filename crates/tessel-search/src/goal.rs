//! Search targets.

use std::fmt;
use tessel_core::Position;

/// Where a search should stop.
///
/// Either a fixed cell or any cell satisfying a predicate over its
/// position and value. A `Position` converts into `Goal::At`, so most
/// callers pass a position directly.
pub enum Goal<'a, T> {
    /// Stop at exactly this position.
    At(Position),
    /// Stop at the first expanded cell for which the predicate holds.
    Matches(Box<dyn Fn(Position, &T) -> bool + 'a>),
}

impl<'a, T> Goal<'a, T> {
    /// Goal satisfied by any cell for which `predicate` holds.
    pub fn matching(predicate: impl Fn(Position, &T) -> bool + 'a) -> Self {
        Self::Matches(Box::new(predicate))
    }

    /// Whether the cell at `pos` holding `value` satisfies the goal.
    pub fn is_reached(&self, pos: Position, value: &T) -> bool {
        match self {
            Self::At(target) => *target == pos,
            Self::Matches(predicate) => predicate(pos, value),
        }
    }
}

impl<T> From<Position> for Goal<'_, T> {
    fn from(pos: Position) -> Self {
        Self::At(pos)
    }
}

impl<T> fmt::Debug for Goal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(pos) => f.debug_tuple("At").field(pos).finish(),
            Self::Matches(_) => f.write_str("Matches(..)"),
        }
    }
}
