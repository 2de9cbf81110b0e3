/*
random_maze.rs

Copyright 2025 Hervé Quatremain

This file is part of Pathquest.

Pathquest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pathquest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pathquest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate a random maze from a seed.

use log::{debug, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt;

use super::direction::{Direction, Position};
use super::maze::Maze;
use super::seeded_random::SeededRandom;
use crate::config::MAX_ATTEMPTS;

/// Carving starts from this cell, which is also the player's starting position. Odd coordinates
/// keep the walls between the carved cells.
const START: Position = Position { x: 1, y: 1 };

/// Type of errors.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MazeError {
    /// One of the dimensions is zero.
    InvalidDimensions { width: usize, height: usize },

    /// No valid maze was produced within the allowed number of attempts.
    GenerationFailed { attempts: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}")
            }
            MazeError::GenerationFailed { attempts } => {
                write!(f, "no valid maze found after {attempts} attempts")
            }
        }
    }
}

impl Error for MazeError {}

/// Result of a maze generation: the grid and the two end points.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub maze: Maze,

    /// Where the character starts.
    pub start: Position,

    /// Where the goal is.
    pub end: Position,
}

/// Carving frame: the cell being carved, its shuffled directions, and the next direction to try.
struct Frame {
    position: Position,
    directions: [Direction; 4],
    next: usize,
}

/// [`RandomMaze`] object.
pub struct RandomMaze {
    /// Grid width.
    pub width: usize,

    /// Grid height.
    pub height: usize,

    /// Number of attempts it took to generate the last maze.
    pub attempts: usize,
}

impl RandomMaze {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidDimensions`] if the width or the height is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            attempts: 0,
        })
    }

    /// Generate and return the maze for the given seed.
    ///
    /// The first attempt uses the seed as is. When the result is degenerate, the next attempts
    /// use the seed followed by the attempt number (`seed1`, `seed2`...), so the outcome only
    /// depends on the seed and the dimensions.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::GenerationFailed`] after [`MAX_ATTEMPTS`] degenerate mazes. Grids
    /// narrower or shorter than four cells always end up here, because every cell that carving
    /// can open lies on a single row or column.
    pub fn generate(&mut self, seed: &str) -> Result<GeneratedMaze, MazeError> {
        self.attempts = 0;
        while self.attempts < MAX_ATTEMPTS {
            let attempt_seed: String = if self.attempts == 0 {
                seed.to_string()
            } else {
                format!("{seed}{}", self.attempts)
            };
            self.attempts += 1;

            let maze: Maze = self.carve(&attempt_seed);
            if let Some(generated) = Self::validate(maze) {
                info!(
                    "Generated {}x{} maze for seed {seed:?} in {} attempt(s), end at {}",
                    self.width, self.height, self.attempts, generated.end
                );
                return Ok(generated);
            }
            debug!("Attempt {} with seed {attempt_seed:?} is degenerate", self.attempts);
        }
        warn!(
            "Giving up on {}x{} maze for seed {seed:?} after {} attempts",
            self.width, self.height, self.attempts
        );
        Err(MazeError::GenerationFailed {
            attempts: self.attempts,
        })
    }

    /// Build a fully walled grid and carve it with a randomized depth-first search.
    ///
    /// The search uses an explicit stack instead of recursion. Each frame shuffles its directions
    /// when it is created, so random values are drawn in the same order as a recursive carving.
    fn carve(&self, seed: &str) -> Maze {
        let mut random: SeededRandom = SeededRandom::new(seed);
        let mut maze: Maze = Maze::new(self.width, self.height);
        let mut stack: Vec<Frame> = Vec::new();

        if Self::visit(&mut maze, START) {
            stack.push(Self::frame(START, &mut random));
        }

        let mut carved: usize = 0;
        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.directions.len() {
                stack.pop();
                continue;
            }
            let direction: Direction = frame.directions[frame.next];
            frame.next += 1;

            let position: Position = frame.position;
            let target: Position = position.offset(direction, 2);
            if maze.cell(target).is_some_and(|c| !c.visited) {
                // Open the wall between the two cells, then go deeper
                maze.carve(position.offset(direction, 1));
                Self::visit(&mut maze, target);
                stack.push(Self::frame(target, &mut random));
                carved += 1;
            }
        }
        debug!("Carved {carved} passages for seed {seed:?}");
        maze
    }

    /// Open and mark the cell as visited. Return false if the position is outside the grid.
    fn visit(maze: &mut Maze, position: Position) -> bool {
        match maze.cell_mut(position) {
            Some(cell) => {
                cell.is_wall = false;
                cell.visited = true;
                true
            }
            None => false,
        }
    }

    fn frame(position: Position, random: &mut SeededRandom) -> Frame {
        let mut directions: [Direction; 4] = Direction::ALL;
        random.shuffle(&mut directions);
        Frame {
            position,
            directions,
            next: 0,
        }
    }

    /// Select the end point and check the maze structure.
    ///
    /// The end point is the cell next to the bottom-right corner, or the last open cell when that
    /// cell is a wall. Return None if the maze is degenerate, if an end point is not open, or if
    /// the end point cannot be reached from the start.
    fn validate(maze: Maze) -> Option<GeneratedMaze> {
        if maze.is_degenerate() || !maze.is_open(START) {
            return None;
        }
        let corner: Position = Position::new(maze.width() as i32 - 2, maze.height() as i32 - 2);
        let end: Position = if maze.is_open(corner) {
            corner
        } else {
            let end: Position = maze.last_open_cell()?;
            debug!("Cell {corner} is a wall, using {end} as the end point");
            end
        };
        maze.shortest_program(START, end)?;
        Some(GeneratedMaze {
            maze,
            start: START,
            end,
        })
    }
}

/// Generate the maze for the given dimensions and seed.
///
/// # Errors
///
/// See [`RandomMaze::new`] and [`RandomMaze::generate`].
pub fn generate(width: usize, height: usize, seed: &str) -> Result<GeneratedMaze, MazeError> {
    RandomMaze::new(width, height)?.generate(seed)
}
