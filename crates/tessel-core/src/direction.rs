//! Canonical movement vectors.

use std::fmt;

/// One of the eight compass directions.
///
/// Each direction is a unit vector in screen coordinates: north is `-y`,
/// east is `+x`. Two directions are equal exactly when their deltas are.
///
/// # Examples
///
/// ```
/// use tessel_core::Direction;
///
/// assert_eq!(Direction::North.turn_right(), Direction::East);
/// assert_eq!(Direction::North.opposite(), Direction::South);
/// assert_eq!(Direction::from_arrow('<'), Some(Direction::West));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(0, -1)`, drawn as `^`.
    North,
    /// `(1, -1)`.
    NorthEast,
    /// `(1, 0)`, drawn as `>`.
    East,
    /// `(1, 1)`.
    SouthEast,
    /// `(0, 1)`, drawn as `v`.
    South,
    /// `(-1, 1)`.
    SouthWest,
    /// `(-1, 0)`, drawn as `<`.
    West,
    /// `(-1, -1)`.
    NorthWest,
}

impl Direction {
    /// The four cardinal directions in clockwise order starting north.
    pub const CARDINALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four diagonal directions in clockwise order starting north-east.
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// All eight directions in clockwise order starting north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The `(dx, dy)` unit delta.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Look up the direction with the given delta.
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::North),
            (1, -1) => Some(Self::NorthEast),
            (1, 0) => Some(Self::East),
            (1, 1) => Some(Self::SouthEast),
            (0, 1) => Some(Self::South),
            (-1, 1) => Some(Self::SouthWest),
            (-1, 0) => Some(Self::West),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// `true` for north, east, south and west.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }

    /// `true` for the four diagonals.
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Rotate 90° clockwise.
    ///
    /// Intended for the cardinal cycle `N -> E -> S -> W -> N`. Diagonals are
    /// rotated by the same quarter turn (`NE -> SE`), which keeps the method
    /// total, but they are not part of the turning contract.
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::NorthEast => Self::SouthEast,
            Self::SouthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthWest,
            Self::NorthWest => Self::NorthEast,
        }
    }

    /// Rotate 90° counter-clockwise. Inverse of [`turn_right`](Self::turn_right).
    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
            Self::NorthEast => Self::NorthWest,
            Self::NorthWest => Self::SouthWest,
            Self::SouthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthEast,
        }
    }

    /// The direction with the negated delta.
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Parse the arrow notation `^ > v <` used by puzzle inputs.
    pub const fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Self::North),
            '>' => Some(Self::East),
            'v' | 'V' => Some(Self::South),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    /// Arrow symbol for a cardinal direction; `None` for diagonals.
    pub const fn arrow(self) -> Option<char> {
        match self {
            Self::North => Some('^'),
            Self::East => Some('>'),
            Self::South => Some('v'),
            Self::West => Some('<'),
            _ => None,
        }
    }

    /// Upper-case compass name, e.g. `"NORTH_EAST"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::NorthEast => "NORTH_EAST",
            Self::East => "EAST",
            Self::SouthEast => "SOUTH_EAST",
            Self::South => "SOUTH",
            Self::SouthWest => "SOUTH_WEST",
            Self::West => "WEST",
            Self::NorthWest => "NORTH_WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
