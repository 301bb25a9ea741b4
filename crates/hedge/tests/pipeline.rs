//! End-to-end integration tests: parse a maze file, explore it, and
//! render the resulting route and statistics.

use hedge::prelude::*;
use hedge::route::scribe::{score, write_statistics};
use hedge_maze::reader::read_maze;

// ── Fixtures ────────────────────────────────────────────────────

/// An 11x5 maze with a horizontal wall over `(0, 0)` and a vertical
/// wall west of column 1 on row 1, so a runner heading north from the
/// origin has to swing east before it can climb.
const WALLED_11X5: &str = "\
#######################
#.....................#
#.#.#.#.#.#.#.#.#.#.#.#
#.....................#
#.#.#.#.#.#.#.#.#.#.#.#
#.....................#
#.#.#.#.#.#.#.#.#.#.#.#
#.#...................#
###.#.#.#.#.#.#.#.#.#.#
#.....................#
#######################
";

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn step(x: i32, y: i32, action: Action) -> RouteStep {
    RouteStep {
        position: p(x, y),
        action,
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn parsed_maze_matches_programmatic_construction() {
    let parsed = read_maze(WALLED_11X5.as_bytes()).unwrap();

    let mut built = Maze::new(11, 5).unwrap();
    built.add_horizontal_wall(0, 1).unwrap();
    built.add_vertical_wall(1, 1).unwrap();

    assert_eq!(parsed.dimensions(), (11, 5));
    for y in 0..5 {
        for x in 0..11 {
            assert_eq!(
                parsed.walls_at(p(x, y)).unwrap(),
                built.walls_at(p(x, y)).unwrap(),
                "cell ({x}, {y}) differs",
            );
        }
    }
}

#[test]
fn file_to_route_pipeline() {
    use Action::{Forward as F, LeftForward as LF, RightForward as RF};

    let maze = read_maze(WALLED_11X5.as_bytes()).unwrap();
    let route = shortest_path(&maze, None, None, Direction::North).unwrap();

    let expected = vec![
        step(0, 0, RF),
        step(1, 0, LF),
        step(1, 1, F),
        step(1, 2, LF),
        step(0, 2, RF),
        step(0, 3, F),
        step(0, 4, RF),
        step(1, 4, F),
        step(2, 4, F),
        step(3, 4, F),
        step(4, 4, F),
        step(5, 4, F),
        step(6, 4, F),
        step(7, 4, F),
        step(8, 4, F),
        step(9, 4, F),
    ];
    assert_eq!(route, expected);
}

#[test]
fn statistics_for_the_walled_maze() {
    let maze = read_maze(WALLED_11X5.as_bytes()).unwrap();
    let start = p(0, 0);
    let trace = explore(Runner::new(start, Direction::North), &maze, None).unwrap();
    let route = shortest_path(&maze, None, None, Direction::North).unwrap();

    // 18 exploration steps, 16 instructions plus the goal cell.
    assert_eq!(trace.len(), 18);
    assert_eq!(score(&trace, &route), 21.5);

    let mut out = Vec::new();
    write_statistics(&mut out, Some("walled11x5.txt"), &trace, &route).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "walled11x5.txt");
    assert_eq!(lines[1], "21.5");
    assert_eq!(lines[2], "18");
    assert!(lines[3].starts_with("(0, 0, RF) -> (1, 0, LF)"));
    assert!(lines[3].ends_with("(9, 4, F)"));
    assert_eq!(lines[4], "17");
}

#[test]
fn sealed_goal_reports_unreachable() {
    // Wall off the top-right cell completely.
    let mut maze = Maze::new(4, 4).unwrap();
    maze.add_horizontal_wall(3, 3).unwrap();
    maze.add_vertical_wall(3, 3).unwrap();

    let err = shortest_path(&maze, None, None, Direction::North).unwrap_err();
    assert!(matches!(err, RouteError::Unreachable { goal, .. } if goal == p(3, 3)));
}
