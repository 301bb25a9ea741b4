//! Rectangular wall-flag mazes for the Hedge toolkit.
//!
//! A [`Maze`] is a non-jagged grid of [`Cell`]s, each carrying four
//! boolean wall flags indexed by [`Direction`](hedge_core::Direction).
//! Construction seeds the outer boundary walls; interior walls are
//! inserted through [`Maze::add_horizontal_wall`] and
//! [`Maze::add_vertical_wall`], which keep both sides of a shared wall
//! consistent. The [`reader`] module parses the ASCII maze-file format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod maze;
pub mod reader;

pub use error::{MazeError, MazeFileError};
pub use maze::{Cell, Maze};
