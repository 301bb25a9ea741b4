//! Hedge: grid-maze modelling, wall-following exploration, and route
//! synthesis.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Hedge sub-crates. For most users, adding `hedge` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hedge::prelude::*;
//!
//! // An 11x5 maze with two interior walls forcing a detour near the
//! // start.
//! let mut maze = Maze::new(11, 5).unwrap();
//! maze.add_horizontal_wall(0, 1).unwrap();
//! maze.add_vertical_wall(1, 1).unwrap();
//!
//! // Explore from the bottom-left corner to the top-right corner and
//! // compress the wandering into a loop-free instruction list.
//! let route = shortest_path(&maze, None, None, Direction::North).unwrap();
//! assert_eq!(route.first().unwrap().position, Position::new(0, 0));
//! assert_eq!(route.first().unwrap().action, Action::RightForward);
//! assert_eq!(route.last().unwrap().position, Position::new(9, 4));
//! assert_eq!(route.last().unwrap().action, Action::Forward);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hedge-core` | Headings, turns, positions, the action alphabet |
//! | [`maze`] | `hedge-maze` | Wall-flag mazes and the ASCII maze-file reader |
//! | [`route`] | `hedge-route` | Exploration, compaction, instruction synthesis |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`hedge-core`).
///
/// Cardinal [`types::Direction`]s, relative [`types::Turn`]s, grid
/// [`types::Position`]s, and the [`types::Action`] alphabet.
pub use hedge_core as types;

/// Mazes and maze-file parsing (`hedge-maze`).
///
/// The [`maze::Maze`] grid with per-cell wall flags, plus
/// [`maze::reader`] for the ASCII maze-file format.
pub use hedge_maze as maze;

/// Exploration and route synthesis (`hedge-route`).
///
/// The [`route::Runner`] state machine, the
/// [`route::explore`] / [`route::compact`] / [`route::annotate`]
/// pipeline, [`route::shortest_path`], and the [`route::scribe`]
/// transcript writers.
pub use hedge_route as route;

/// Common imports for typical Hedge usage.
///
/// ```rust
/// use hedge::prelude::*;
/// ```
pub mod prelude {
    // Vocabulary
    pub use hedge_core::{Action, Direction, Position, Turn};

    // Mazes
    pub use hedge_maze::{Cell, Maze};

    // Errors
    pub use hedge_maze::{MazeError, MazeFileError};
    pub use hedge_route::RouteError;

    // Pipeline
    pub use hedge_route::{
        annotate, compact, explore, shortest_path, RouteStep, Runner, TraceEntry,
    };
}
