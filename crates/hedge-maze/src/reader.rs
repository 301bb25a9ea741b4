//! ASCII maze-file reader.
//!
//! The maze-file format is an odd-sized character grid: junctions
//! (even row, even column) are `#`, cell slots (odd row, odd column)
//! are `.`, and the slots between them are `#` for a wall or `.` for
//! an opening. The outer border must be fully walled. The top file row
//! corresponds to the maze's northernmost cell row.
//!
//! [`read_maze`] is generic over any [`Read`] source so tests can use
//! `&[u8]` and production code can use a [`File`].
//!
//! # Examples
//!
//! ```
//! use hedge_core::{Direction, Position};
//! use hedge_maze::reader::read_maze;
//!
//! let text = "\
//! ########
//! #...#.#
//! #.#.#.#
//! #.#...#
//! ########";
//! let maze = read_maze(text.as_bytes()).unwrap();
//! assert_eq!(maze.dimensions(), (3, 2));
//! assert!(maze.walls_at(Position::new(1, 1)).unwrap().wall(Direction::East));
//! assert!(!maze.walls_at(Position::new(1, 0)).unwrap().wall(Direction::East));
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hedge_core::{Direction, Position};

use crate::error::MazeFileError;
use crate::maze::Maze;

/// Read and validate a maze from any `Read` source.
pub fn read_maze<R: Read>(mut reader: R) -> Result<Maze, MazeFileError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_maze(&text)
}

/// Read and validate a maze from a file on disk.
pub fn read_maze_file(path: impl AsRef<Path>) -> Result<Maze, MazeFileError> {
    read_maze(File::open(path)?)
}

/// Parse and validate a maze from its textual form.
pub fn parse_maze(text: &str) -> Result<Maze, MazeFileError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    validate(&lines)?;

    let rows = lines.len();
    let cols = lines[0].len();
    let width = ((cols - 1) / 2) as u32;
    let height = ((rows - 1) / 2) as u32;

    // Validation guarantees at least one cell, so this cannot fail.
    let mut maze = Maze::new(width, height).expect("validated dimensions");
    let grid: Vec<&[u8]> = lines.iter().map(|l| l.as_bytes()).collect();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            // The top file row is the northernmost cell row.
            let li = rows - 2 - 2 * y as usize;
            let ci = 2 * x as usize + 1;
            let pos = Position::new(x, y);
            if grid[li - 1][ci] == b'#' {
                maze.set_wall(pos, Direction::North);
            }
            if grid[li][ci + 1] == b'#' {
                maze.set_wall(pos, Direction::East);
            }
            if grid[li + 1][ci] == b'#' {
                maze.set_wall(pos, Direction::South);
            }
            if grid[li][ci - 1] == b'#' {
                maze.set_wall(pos, Direction::West);
            }
        }
    }
    Ok(maze)
}

fn validate(lines: &[&str]) -> Result<(), MazeFileError> {
    if lines.is_empty() {
        return Err(MazeFileError::Empty);
    }

    let rows = lines.len();
    let cols = lines[0].chars().count();
    for (li, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != cols {
            return Err(MazeFileError::RaggedLine {
                line: li,
                len,
                expected: cols,
            });
        }
    }
    if rows % 2 == 0 {
        return Err(MazeFileError::EvenDimension {
            name: "row",
            value: rows,
        });
    }
    if cols % 2 == 0 {
        return Err(MazeFileError::EvenDimension {
            name: "column",
            value: cols,
        });
    }
    if rows < 3 || cols < 3 {
        return Err(MazeFileError::Empty);
    }

    for (li, line) in lines.iter().enumerate() {
        for (ci, ch) in line.chars().enumerate() {
            let border = li == 0 || li == rows - 1 || ci == 0 || ci == cols - 1;
            if border {
                if ch != '#' {
                    return Err(MazeFileError::OpenBorder {
                        line: li,
                        column: ci,
                    });
                }
                continue;
            }
            match (li % 2, ci % 2) {
                (0, 0) => {
                    if ch != '#' {
                        return Err(MazeFileError::BadJunction {
                            line: li,
                            column: ci,
                        });
                    }
                }
                (1, 1) => {
                    if ch != '.' {
                        return Err(MazeFileError::BadCell {
                            line: li,
                            column: ci,
                            found: ch,
                        });
                    }
                }
                _ => {
                    if ch != '#' && ch != '.' {
                        return Err(MazeFileError::BadWallChar {
                            line: li,
                            column: ci,
                            found: ch,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
