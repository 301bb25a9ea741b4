//! Wall-following exploration.

use hedge_core::{Action, Position};
use hedge_maze::Maze;

use crate::error::RouteError;
use crate::runner::Runner;

/// One entry of a raw exploration trace: the position the runner
/// reached and the action that reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// The position reached by this step.
    pub position: Position,
    /// The action taken to reach it.
    pub action: Action,
}

/// A raw exploration trace, one entry per step. May revisit positions.
pub type RawTrace = Vec<TraceEntry>;

/// Step-limit multiplier used by [`default_step_limit`].
const DEFAULT_STEP_FACTOR: usize = 8;

/// The default exploration step limit for `maze`.
///
/// Wall-following revisits cells while backtracking, so the limit is a
/// generous multiple of the cell count rather than the cell count
/// itself.
pub fn default_step_limit(maze: &Maze) -> usize {
    maze.cell_count().saturating_mul(DEFAULT_STEP_FACTOR)
}

/// Drive `runner` through `maze` until it reaches `goal`, recording one
/// [`TraceEntry`] per step.
///
/// `goal` defaults to the top-right corner `(width - 1, height - 1)`.
/// A supplied goal outside the maze is `Err(RouteError::InvalidGoal)`.
/// Uses [`default_step_limit`]; a goal the heuristic cannot reach
/// within that many steps is `Err(RouteError::Unreachable)` rather
/// than an infinite loop.
pub fn explore(
    runner: Runner,
    maze: &Maze,
    goal: Option<Position>,
) -> Result<RawTrace, RouteError> {
    explore_bounded(runner, maze, goal, default_step_limit(maze))
}

/// [`explore`] with a caller-supplied step limit.
pub fn explore_bounded(
    mut runner: Runner,
    maze: &Maze,
    goal: Option<Position>,
    max_steps: usize,
) -> Result<RawTrace, RouteError> {
    let (width, height) = maze.dimensions();
    let goal = match goal {
        None => Position::new(width as i32 - 1, height as i32 - 1),
        Some(goal) => {
            if !maze.contains(goal) {
                return Err(RouteError::InvalidGoal {
                    goal,
                    width,
                    height,
                });
            }
            goal
        }
    };

    let mut trace = RawTrace::new();
    while runner.position() != goal {
        if trace.len() >= max_steps {
            return Err(RouteError::Unreachable {
                goal,
                steps: trace.len(),
            });
        }
        let (moved, action) = runner.advance(maze)?;
        runner = moved;
        trace.push(TraceEntry {
            position: runner.position(),
            action,
        });
    }
    Ok(trace)
}
