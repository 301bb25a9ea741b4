//! Grid positions.

use std::fmt;

use crate::Direction;

/// A cell coordinate in a maze: `x` column, `y` row, origin at the
/// bottom-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing northward.
    pub y: i32,
}

impl Position {
    /// Construct a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell along `heading`.
    pub fn step(self, heading: Direction) -> Self {
        let (dx, dy) = heading.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The position one cell opposite `heading`.
    pub fn step_back(self, heading: Direction) -> Self {
        let (dx, dy) = heading.offset();
        Self::new(self.x - dx, self.y - dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
