//! Instruction synthesis over compacted routes.

use hedge_core::{Action, Direction, Position};

use crate::error::RouteError;

/// One instruction of a final route: a position and the action that
/// leaves it toward the next route position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteStep {
    /// The position this instruction leaves.
    pub position: Position,
    /// The instruction, relative to the previous instruction's heading.
    pub action: Action,
}

/// Convert a loop-free position sequence into relative instructions.
///
/// Each consecutive pair must be exactly one cardinal step apart
/// (`Err(RouteError::NonAdjacentStep)` otherwise). The movement
/// direction is classified against a running heading seeded with
/// `initial_heading`: same heading is `F`, its left rotation `LF`, its
/// right rotation `RF`, and a 180° reversal `B`. After each step the
/// running heading becomes the movement direction itself, matching a
/// runner that turns about when it backs out of a dead end.
///
/// The final (goal) position gets no instruction; a path of one
/// position yields an empty route.
pub fn annotate(
    path: &[Position],
    initial_heading: Direction,
) -> Result<Vec<RouteStep>, RouteError> {
    let mut route = Vec::with_capacity(path.len().saturating_sub(1));
    let mut heading = initial_heading;

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let movement = Direction::from_step(to.x - from.x, to.y - from.y)
            .ok_or(RouteError::NonAdjacentStep { from, to })?;

        let action = if movement == heading {
            Action::Forward
        } else if movement == heading.turn_left() {
            Action::LeftForward
        } else if movement == heading.turn_right() {
            Action::RightForward
        } else {
            Action::Backward
        };

        route.push(RouteStep {
            position: from,
            action,
        });
        heading = movement;
    }
    Ok(route)
}
