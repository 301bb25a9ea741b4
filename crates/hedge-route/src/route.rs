//! End-to-end route computation.

use hedge_core::{Direction, Position};
use hedge_maze::Maze;

use crate::annotate::{annotate, RouteStep};
use crate::compact::compact;
use crate::error::RouteError;
use crate::explore::explore;
use crate::runner::Runner;

/// Find a route from `start` to `goal` and express it as relative
/// instructions.
///
/// Composes [`explore`] → [`compact`] → [`annotate`]. `start` defaults
/// to the bottom-left corner `(0, 0)` and `goal` to the top-right
/// corner. `heading` is both the runner's starting orientation and the
/// seed for instruction labelling, so the first instruction is always
/// relative to the direction the runner actually faced.
///
/// The route is loop-free but only as short as the wall-following
/// heuristic happens to find; it carries no optimality guarantee.
///
/// # Examples
///
/// ```
/// use hedge_core::{Action, Direction, Position};
/// use hedge_maze::Maze;
/// use hedge_route::shortest_path;
///
/// let mut maze = Maze::new(11, 5).unwrap();
/// maze.add_horizontal_wall(0, 1).unwrap();
/// maze.add_vertical_wall(1, 1).unwrap();
///
/// let route = shortest_path(&maze, None, None, Direction::North).unwrap();
/// assert_eq!(route[0].position, Position::new(0, 0));
/// assert_eq!(route[0].action, Action::RightForward);
/// ```
pub fn shortest_path(
    maze: &Maze,
    start: Option<Position>,
    goal: Option<Position>,
    heading: Direction,
) -> Result<Vec<RouteStep>, RouteError> {
    let start = start.unwrap_or(Position::new(0, 0));
    if !maze.contains(start) {
        let (width, height) = maze.dimensions();
        return Err(RouteError::OutOfBounds {
            position: start,
            width,
            height,
        });
    }

    let trace = explore(Runner::new(start, heading), maze, goal)?;
    let path = compact(start, &trace);
    annotate(&path, heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedge_core::Action;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn walled_eleven_by_five_route() {
        let mut maze = Maze::new(11, 5).unwrap();
        maze.add_horizontal_wall(0, 1).unwrap();
        maze.add_vertical_wall(1, 1).unwrap();

        let route = shortest_path(&maze, None, None, Direction::North).unwrap();
        assert_eq!(
            route.first().map(|s| (s.position, s.action)),
            Some((p(0, 0), Action::RightForward))
        );
        assert_eq!(
            route.last().map(|s| (s.position, s.action)),
            Some((p(9, 4), Action::Forward))
        );

        let mut seen = Vec::new();
        for step in &route {
            assert!(!seen.contains(&step.position), "{} repeated", step.position);
            seen.push(step.position);
        }
    }

    #[test]
    fn open_three_by_three_toward_the_bottom_right() {
        // Facing west at the start, the left sensor reads the southern
        // boundary wall, so the very first instruction is a right turn.
        let maze = Maze::new(3, 3).unwrap();
        let route =
            shortest_path(&maze, None, Some(p(2, 0)), Direction::West).unwrap();
        assert_eq!(route.first().unwrap().action, Action::RightForward);
        assert_eq!(route.last().unwrap().action, Action::Forward);
    }

    #[test]
    fn start_on_goal_yields_an_empty_route() {
        let maze = Maze::new(4, 4).unwrap();
        let route =
            shortest_path(&maze, Some(p(3, 3)), None, Direction::North).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn start_outside_the_maze_is_rejected() {
        let maze = Maze::new(4, 4).unwrap();
        assert!(matches!(
            shortest_path(&maze, Some(p(4, 0)), None, Direction::North),
            Err(RouteError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn route_positions_are_distinct_and_adjacent() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.add_horizontal_wall(0, 1).unwrap();
        maze.add_horizontal_wall(1, 1).unwrap();
        maze.add_vertical_wall(2, 3).unwrap();
        maze.add_vertical_wall(3, 3).unwrap();
        maze.add_horizontal_wall(4, 4).unwrap();

        let route = shortest_path(&maze, None, None, Direction::North).unwrap();
        for pair in route.windows(2) {
            let dx = (pair[1].position.x - pair[0].position.x).abs();
            let dy = (pair[1].position.y - pair[0].position.y).abs();
            assert_eq!(dx + dy, 1);
        }
        let mut unique: Vec<_> = route.iter().map(|s| s.position).collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), route.len());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        use crate::explore::{explore, TraceEntry};
        use crate::runner::Runner;
        use hedge_core::Action;

        proptest! {
            #[test]
            fn compaction_invariants_hold_on_random_mazes(
                width in 2u32..9,
                height in 2u32..9,
                walls in prop::collection::vec(
                    (prop::bool::ANY, 0i32..8, 1i32..8),
                    0..24,
                ),
            ) {
                let mut maze = Maze::new(width, height).unwrap();
                for (horizontal, a, line) in walls {
                    // Insertions outside this maze's extent are rejected;
                    // that is fine for generating arbitrary topologies.
                    let _ = if horizontal {
                        maze.add_horizontal_wall(a, line)
                    } else {
                        maze.add_vertical_wall(a, line)
                    };
                }

                let start = Position::new(0, 0);
                let goal = Position::new(width as i32 - 1, height as i32 - 1);
                let runner = Runner::new(start, Direction::North);
                let Ok(trace) = explore(runner, &maze, None) else {
                    // Random walls may seal the goal off entirely.
                    return Ok(());
                };

                let path = crate::compact::compact(start, &trace);
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&goal));

                let mut unique = path.clone();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), path.len(), "duplicate position in path");

                // Compacting a loop-free path again changes nothing.
                let relinked: Vec<TraceEntry> = path[1..]
                    .iter()
                    .map(|&position| TraceEntry {
                        position,
                        action: Action::Forward,
                    })
                    .collect();
                prop_assert_eq!(&crate::compact::compact(start, &relinked), &path);

                // Every surviving pair is grid-adjacent and annotatable.
                let route = crate::annotate::annotate(&path, Direction::North).unwrap();
                prop_assert_eq!(route.len(), path.len() - 1);
            }
        }
    }
}
