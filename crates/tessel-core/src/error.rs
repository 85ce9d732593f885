//! Error types for grid construction and direct cell access.
//!
//! Only two things can go wrong with an immutable grid: it can be built
//! from a bad matrix, or a caller can ask for a cell that does not exist.
//! Traversal outcomes ("no path", "no neighbour") are ordinary values and
//! never appear here.

use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input matrix is empty, has empty rows, has rows of unequal
    /// length, or exceeds the coordinate range.
    MalformedGrid {
        /// What is wrong with the matrix.
        reason: String,
    },
    /// A position lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

impl GridError {
    /// Shorthand for a [`GridError::MalformedGrid`] with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedGrid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid { reason } => write!(f, "malformed grid: {reason}"),
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(
                f,
                "position {position} out of bounds: [0, {width}) x [0, {height})"
            ),
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_bounds() {
        let err = GridError::OutOfBounds {
            position: Position::new(5, -1),
            width: 3,
            height: 2,
        };
        assert_eq!(
            err.to_string(),
            "position (5, -1) out of bounds: [0, 3) x [0, 2)"
        );
    }

    #[test]
    fn display_malformed() {
        let err = GridError::malformed("row 2 has length 4, expected 3");
        assert_eq!(
            err.to_string(),
            "malformed grid: row 2 has length 4, expected 3"
        );
    }
}
