//! Cardinal headings and relative turns.

use std::fmt;

/// The four cardinal headings, ordered clockwise.
///
/// The discriminants (North = 0, East = 1, South = 2, West = 3) index
/// per-cell wall arrays, so the clockwise ordering is load-bearing:
/// `turn_right` is +1 and `turn_left` is −1 in the four-element ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward increasing `y`.
    North = 0,
    /// Toward increasing `x`.
    East = 1,
    /// Toward decreasing `y`.
    South = 2,
    /// Toward decreasing `x`.
    West = 3,
}

impl Direction {
    /// All four headings in clockwise order, matching the wall-array layout.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into a `[T; 4]` wall array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The heading 90° anti-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading 90° clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The opposite heading.
    pub fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Apply a relative [`Turn`].
    pub fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }
    }

    /// Unit step vector `(dx, dy)` for this heading, with north as `+y`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// The heading implied by a single-cell move of `(dx, dy)`, or
    /// `None` if the delta is not exactly one cardinal step.
    ///
    /// # Examples
    ///
    /// ```
    /// use hedge_core::Direction;
    ///
    /// assert_eq!(Direction::from_step(0, 1), Some(Direction::North));
    /// assert_eq!(Direction::from_step(-1, 0), Some(Direction::West));
    /// assert_eq!(Direction::from_step(1, 1), None);
    /// assert_eq!(Direction::from_step(0, 0), None);
    /// ```
    pub fn from_step(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 1) => Some(Self::North),
            (1, 0) => Some(Self::East),
            (0, -1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        };
        write!(f, "{c}")
    }
}

/// A relative quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// 90° anti-clockwise.
    Left,
    /// 90° clockwise.
    Right,
}
