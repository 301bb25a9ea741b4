//! Error types for maze construction, mutation, and file parsing.

use std::fmt;
use std::io;

use hedge_core::Position;

/// Errors from maze construction, wall insertion, or wall queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Attempted to construct a maze with a zero dimension.
    EmptyMaze,
    /// A dimension exceeds the coordinate range (`i32::MAX`).
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum supported value.
        max: u32,
    },
    /// A coordinate is outside the maze extent.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Maze width.
        width: u32,
        /// Maze height.
        height: u32,
    },
    /// A wall line index does not fall between two cell rows or columns.
    WallOutOfRange {
        /// Which axis the line indexes.
        name: &'static str,
        /// The offending line index.
        value: i32,
        /// The largest valid line index (the smallest is 1).
        max: i32,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMaze => write!(f, "maze must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::OutOfBounds {
                position,
                width,
                height,
            } => {
                write!(
                    f,
                    "position {position} out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::WallOutOfRange { name, value, max } => {
                write!(f, "wall {name} = {value} outside valid range [1, {max}]")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Errors from reading the ASCII maze-file format.
///
/// `line` and `column` fields are zero-based indexes into the trimmed
/// file contents.
#[derive(Debug)]
pub enum MazeFileError {
    /// An I/O error occurred while reading the source.
    Io(io::Error),
    /// The file contains no maze rows.
    Empty,
    /// A line's length differs from the first line's.
    RaggedLine {
        /// The offending line.
        line: usize,
        /// Its length.
        len: usize,
        /// The expected length.
        expected: usize,
    },
    /// The character grid has an even number of rows or columns.
    EvenDimension {
        /// Which axis is even.
        name: &'static str,
        /// The offending count.
        value: usize,
    },
    /// A border character is not `#`.
    OpenBorder {
        /// The offending line.
        line: usize,
        /// The offending column.
        column: usize,
    },
    /// A junction character (even row, even column) is not `#`.
    BadJunction {
        /// The offending line.
        line: usize,
        /// The offending column.
        column: usize,
    },
    /// A cell character (odd row, odd column) is not `.`.
    BadCell {
        /// The offending line.
        line: usize,
        /// The offending column.
        column: usize,
        /// The character found.
        found: char,
    },
    /// A wall slot holds something other than `#` or `.`.
    BadWallChar {
        /// The offending line.
        line: usize,
        /// The offending column.
        column: usize,
        /// The character found.
        found: char,
    },
}

impl fmt::Display for MazeFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Empty => write!(f, "maze file contains no rows"),
            Self::RaggedLine {
                line,
                len,
                expected,
            } => {
                write!(
                    f,
                    "line {line} has length {len}, expected {expected} (maze must be rectangular)"
                )
            }
            Self::EvenDimension { name, value } => {
                write!(f, "maze file {name} count {value} must be odd")
            }
            Self::OpenBorder { line, column } => {
                write!(f, "border must be '#' at line {line}, column {column}")
            }
            Self::BadJunction { line, column } => {
                write!(f, "junction must be '#' at line {line}, column {column}")
            }
            Self::BadCell {
                line,
                column,
                found,
            } => {
                write!(f, "cell must be '.' at line {line}, column {column}, found {found:?}")
            }
            Self::BadWallChar {
                line,
                column,
                found,
            } => {
                write!(
                    f,
                    "wall slot must be '#' or '.' at line {line}, column {column}, found {found:?}"
                )
            }
        }
    }
}

impl std::error::Error for MazeFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeFileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
