//! The maze grid: cells, boundary walls, and wall insertion.

use hedge_core::{Direction, Position};

use crate::error::MazeError;

/// Wall flags for one cell, indexed by [`Direction`].
///
/// `true` means a wall blocks movement out of the cell in that
/// direction. Shared walls are stored on both adjacent cells; the
/// [`Maze`] mutators keep the two sides consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    /// Whether a wall blocks movement toward `heading`.
    pub fn wall(self, heading: Direction) -> bool {
        self.walls[heading.index()]
    }

    /// The four flags in `(north, east, south, west)` order.
    pub fn flags(self) -> (bool, bool, bool, bool) {
        (self.walls[0], self.walls[1], self.walls[2], self.walls[3])
    }

    pub(crate) fn set(&mut self, heading: Direction) {
        self.walls[heading.index()] = true;
    }
}

/// A rectangular grid of cells with per-direction wall flags.
///
/// Coordinates are `(x, y)` with the origin at the bottom-left cell;
/// `x` grows eastward and `y` grows northward. Construction seeds the
/// four boundary walls, so a fresh maze is closed to the outside and
/// open everywhere inside.
///
/// # Examples
///
/// ```
/// use hedge_core::{Direction, Position};
/// use hedge_maze::Maze;
///
/// let maze = Maze::new(5, 5).unwrap();
/// let corner = maze.walls_at(Position::new(0, 0)).unwrap();
/// assert_eq!(corner.flags(), (false, false, true, true));
///
/// let interior = maze.walls_at(Position::new(2, 2)).unwrap();
/// assert!(!interior.wall(Direction::North));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Maze {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width * height` maze with boundary walls only.
    ///
    /// Returns `Err(MazeError::EmptyMaze)` if either dimension is 0, or
    /// `Err(MazeError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyMaze);
        }
        if width > Self::MAX_DIM {
            return Err(MazeError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(MazeError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }

        let mut maze = Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        };
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                let pos = Position::new(x, y);
                if x == 0 {
                    maze.set_wall(pos, Direction::West);
                }
                if x == width as i32 - 1 {
                    maze.set_wall(pos, Direction::East);
                }
                if y == 0 {
                    maze.set_wall(pos, Direction::South);
                }
                if y == height as i32 - 1 {
                    maze.set_wall(pos, Direction::North);
                }
            }
        }
        Ok(maze)
    }

    /// Maze width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Maze height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in cells.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `position` lies inside the maze.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.x < self.width as i32
            && position.y >= 0
            && position.y < self.height as i32
    }

    /// The wall flags at `position`.
    ///
    /// Returns `Err(MazeError::OutOfBounds)` if the position lies
    /// outside the maze.
    pub fn walls_at(&self, position: Position) -> Result<Cell, MazeError> {
        Ok(self.cells[self.index(position)?])
    }

    /// Insert a horizontal wall below cell `(x, line)`.
    ///
    /// Sets the south wall of `(x, line)` and the north wall of
    /// `(x, line - 1)`, keeping both sides consistent. `line` must fall
    /// strictly between two cell rows: `1 <= line <= height - 1`.
    pub fn add_horizontal_wall(&mut self, x: i32, line: i32) -> Result<(), MazeError> {
        if x < 0 || x >= self.width as i32 {
            return Err(MazeError::OutOfBounds {
                position: Position::new(x, 0),
                width: self.width,
                height: self.height,
            });
        }
        if line < 1 || line > self.height as i32 - 1 {
            return Err(MazeError::WallOutOfRange {
                name: "line",
                value: line,
                max: self.height as i32 - 1,
            });
        }
        self.set_wall(Position::new(x, line), Direction::South);
        self.set_wall(Position::new(x, line - 1), Direction::North);
        Ok(())
    }

    /// Insert a vertical wall west of cell `(line, y)`.
    ///
    /// Sets the west wall of `(line, y)` and the east wall of
    /// `(line - 1, y)`, keeping both sides consistent. `line` must fall
    /// strictly between two cell columns: `1 <= line <= width - 1`.
    pub fn add_vertical_wall(&mut self, y: i32, line: i32) -> Result<(), MazeError> {
        if y < 0 || y >= self.height as i32 {
            return Err(MazeError::OutOfBounds {
                position: Position::new(0, y),
                width: self.width,
                height: self.height,
            });
        }
        if line < 1 || line > self.width as i32 - 1 {
            return Err(MazeError::WallOutOfRange {
                name: "line",
                value: line,
                max: self.width as i32 - 1,
            });
        }
        self.set_wall(Position::new(line, y), Direction::West);
        self.set_wall(Position::new(line - 1, y), Direction::East);
        Ok(())
    }

    pub(crate) fn set_wall(&mut self, position: Position, heading: Direction) {
        let idx = self
            .index(position)
            .expect("set_wall called with in-bounds position");
        self.cells[idx].set(heading);
    }

    fn index(&self, position: Position) -> Result<usize, MazeError> {
        if !self.contains(position) {
            return Err(MazeError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok((position.y as usize) * (self.width as usize) + position.x as usize)
    }
}
