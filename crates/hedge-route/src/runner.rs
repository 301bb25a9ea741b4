//! The runner state machine: position, heading, and movement primitives.

use hedge_core::{Action, Direction, Position, Turn};
use hedge_maze::{Maze, MazeError};

use crate::error::RouteError;

/// Wall readings relative to the runner's heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensedWalls {
    /// Wall to the runner's left.
    pub left: bool,
    /// Wall straight ahead.
    pub forward: bool,
    /// Wall to the runner's right.
    pub right: bool,
}

/// An agent at a cell with a heading.
///
/// `Runner` is an immutable value type: every primitive consumes `self`
/// and returns the moved runner, so there is no hidden aliasing and a
/// caller can keep any intermediate state.
///
/// The translation primitives [`forward`](Runner::forward) and
/// [`backward`](Runner::backward) do **not** check maze bounds or
/// walls; callers either sense first (as [`advance`](Runner::advance)
/// does) or accept an out-of-maze position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Runner {
    position: Position,
    facing: Direction,
}

impl Runner {
    /// Create a runner at `position` facing `facing`.
    pub fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }

    /// The runner's current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The runner's current heading.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Rotate by a quarter [`Turn`]; position unchanged.
    pub fn turned(self, turn: Turn) -> Self {
        Self {
            facing: self.facing.turned(turn),
            ..self
        }
    }

    /// Translate one cell along the current heading; heading unchanged.
    pub fn forward(self) -> Self {
        Self {
            position: self.position.step(self.facing),
            ..self
        }
    }

    /// Translate one cell against the current heading; heading unchanged.
    pub fn backward(self) -> Self {
        Self {
            position: self.position.step_back(self.facing),
            ..self
        }
    }

    /// Read the walls to the left of, ahead of, and to the right of the
    /// current heading.
    ///
    /// Returns `Err(RouteError::OutOfBounds)` if the runner stands
    /// outside the maze.
    pub fn sense_walls(&self, maze: &Maze) -> Result<SensedWalls, RouteError> {
        let cell = maze.walls_at(self.position).map_err(|e| match e {
            MazeError::OutOfBounds {
                position,
                width,
                height,
            } => RouteError::OutOfBounds {
                position,
                width,
                height,
            },
            // walls_at only fails on bounds.
            _ => unreachable!("walls_at returned a non-bounds error"),
        })?;
        Ok(SensedWalls {
            left: cell.wall(self.facing.turn_left()),
            forward: cell.wall(self.facing),
            right: cell.wall(self.facing.turn_right()),
        })
    }

    /// Move forward only if no wall blocks the way.
    ///
    /// Returns `Err(RouteError::BlockedByWall)` when the forward sense
    /// is a wall. Normal exploration never hits this, since the
    /// wall-following rule always has the backward fallback; the error
    /// only surfaces from direct misuse.
    pub fn go_straight(self, maze: &Maze) -> Result<Self, RouteError> {
        if self.sense_walls(maze)?.forward {
            return Err(RouteError::BlockedByWall {
                position: self.position,
                facing: self.facing,
            });
        }
        Ok(self.forward())
    }

    /// One step of the wall-following rule, in fixed priority order:
    /// left open → turn left and move (`LF`); ahead open → move (`F`);
    /// right open → turn right and move (`RF`); otherwise back out of
    /// the dead end, ending up faced away from it (`B`).
    ///
    /// The dead-end fallback must turn the runner about: a runner that
    /// backs out still facing the dead end re-senses the same three
    /// walls shifted by one cell and can orbit a four-cell cycle in
    /// open areas forever.
    pub fn advance(self, maze: &Maze) -> Result<(Self, Action), RouteError> {
        let walls = self.sense_walls(maze)?;
        if !walls.left {
            Ok((self.turned(Turn::Left).forward(), Action::LeftForward))
        } else if !walls.forward {
            Ok((self.forward(), Action::Forward))
        } else if !walls.right {
            Ok((self.turned(Turn::Right).forward(), Action::RightForward))
        } else {
            let backed = Self {
                position: self.position.step_back(self.facing),
                facing: self.facing.reverse(),
            };
            Ok((backed, Action::Backward))
        }
    }
}
