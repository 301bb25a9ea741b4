//! Error types for exploration and route synthesis.

use std::fmt;

use hedge_core::{Direction, Position};

/// Errors from the runner primitives, exploration, or synthesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// The runner's position lies outside the maze.
    OutOfBounds {
        /// The runner's position.
        position: Position,
        /// Maze width.
        width: u32,
        /// Maze height.
        height: u32,
    },
    /// `go_straight` was asked to walk through a wall.
    BlockedByWall {
        /// Where the runner stood.
        position: Position,
        /// The heading it faced.
        facing: Direction,
    },
    /// The requested goal lies outside the maze.
    InvalidGoal {
        /// The offending goal.
        goal: Position,
        /// Maze width.
        width: u32,
        /// Maze height.
        height: u32,
    },
    /// Exploration hit its step limit without reaching the goal.
    ///
    /// The wall-following heuristic cannot reach a goal in a
    /// disconnected pocket; the step limit converts that silent
    /// infinite loop into an error.
    Unreachable {
        /// The goal that was never reached.
        goal: Position,
        /// The number of steps taken before giving up.
        steps: usize,
    },
    /// Two consecutive route positions are not one cardinal step apart.
    ///
    /// Compacted routes are grid-adjacent by construction, so this only
    /// surfaces when [`annotate`](crate::annotate) is fed a sequence
    /// that did not come from the compactor.
    NonAdjacentStep {
        /// The step's starting position.
        from: Position,
        /// The step's ending position.
        to: Position,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                width,
                height,
            } => {
                write!(
                    f,
                    "runner at {position} is outside the maze: [0, {width}) x [0, {height})"
                )
            }
            Self::BlockedByWall { position, facing } => {
                write!(f, "runner at {position} facing {facing} is blocked by a wall")
            }
            Self::InvalidGoal {
                goal,
                width,
                height,
            } => {
                write!(
                    f,
                    "goal {goal} is outside the maze: [0, {width}) x [0, {height})"
                )
            }
            Self::Unreachable { goal, steps } => {
                write!(f, "goal {goal} not reached after {steps} steps")
            }
            Self::NonAdjacentStep { from, to } => {
                write!(f, "route positions {from} and {to} are not adjacent")
            }
        }
    }
}

impl std::error::Error for RouteError {}
