/*
maze.rs

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

//! Maze grid.
//!
//! A [`Maze`] is a rectangle of [`Cell`] objects, each either a wall or open. The grid is created
//! fully walled by [`Maze::new`], carved by [`crate::generator::random_maze::RandomMaze`], and
//! only read afterwards.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{HashMap, VecDeque};

use super::direction::{Direction, Position};

/// One grid unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Column index.
    pub x: usize,

    /// Row index.
    pub y: usize,

    /// Whether the cell is a wall. Cells start as walls and are opened by carving.
    pub is_wall: bool,

    /// Whether the carving algorithm already went through the cell.
    pub visited: bool,
}

/// Rectangular grid of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Maze {
    /// Create a [`Maze`] object where every cell is an unvisited wall.
    pub fn new(width: usize, height: usize) -> Self {
        let rows: Vec<Vec<Cell>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| Cell {
                        x,
                        y,
                        is_wall: true,
                        visited: false,
                    })
                    .collect()
            })
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the rows of the grid, top row first.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Convert a position to grid indexes, or None if the position is outside the grid.
    pub fn index(&self, position: Position) -> Option<(usize, usize)> {
        let x: usize = usize::try_from(position.x).ok()?;
        let y: usize = usize::try_from(position.y).ok()?;
        if x < self.width && y < self.height {
            Some((x, y))
        } else {
            None
        }
    }

    /// Return the cell at the given position, or None if the position is outside the grid.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        let (x, y) = self.index(position)?;
        Some(&self.rows[y][x])
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let (x, y) = self.index(position)?;
        Some(&mut self.rows[y][x])
    }

    /// Whether the position is inside the grid and not a wall.
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|c| !c.is_wall)
    }

    /// Open the cell at the given position. Positions outside the grid are ignored.
    pub(crate) fn carve(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.is_wall = false;
        }
    }

    /// Return the positions of all the open cells, row by row.
    pub fn open_cells(&self) -> Vec<Position> {
        self.rows
            .iter()
            .flatten()
            .filter(|c| !c.is_wall)
            .map(|c| Position::new(c.x as i32, c.y as i32))
            .collect()
    }

    /// Whether the open cells form a "trivial" maze: fewer than two open cells, or all the open
    /// cells on a single row or a single column.
    pub fn is_degenerate(&self) -> bool {
        let open: Vec<Position> = self.open_cells();
        if open.len() < 2 {
            return true;
        }
        let first: Position = open[0];
        open.iter().all(|p| p.y == first.y) || open.iter().all(|p| p.x == first.x)
    }

    /// Find the first open cell scanning rows from the bottom up and each row from right to left.
    pub fn last_open_cell(&self) -> Option<Position> {
        self.rows
            .iter()
            .rev()
            .flat_map(|row| row.iter().rev())
            .find(|c| !c.is_wall)
            .map(|c| Position::new(c.x as i32, c.y as i32))
    }

    /// Return a shortest list of moves from `start` to `end`, or None if `end` cannot be reached.
    ///
    /// The search is breadth-first over open cells. Both positions must be open.
    pub fn shortest_program(&self, start: Position, end: Position) -> Option<Vec<Direction>> {
        if !self.is_open(start) || !self.is_open(end) {
            return None;
        }

        // For each reached cell, the cell it was reached from and the move that was used
        let mut came_from: HashMap<Position, (Position, Direction)> = HashMap::new();
        let mut queue: VecDeque<Position> = VecDeque::from([start]);
        let mut found: bool = start == end;

        while let Some(current) = queue.pop_front() {
            if found {
                break;
            }
            for direction in Direction::ALL {
                let next: Position = current.offset(direction, 1);
                if next == start || came_from.contains_key(&next) || !self.is_open(next) {
                    continue;
                }
                came_from.insert(next, (current, direction));
                if next == end {
                    found = true;
                    break;
                }
                queue.push_back(next);
            }
        }
        if !found {
            return None;
        }

        let mut program: Vec<Direction> = Vec::new();
        let mut current: Position = end;
        while current != start {
            let (previous, direction) = *came_from.get(&current)?;
            program.push(direction);
            current = previous;
        }
        program.reverse();
        Some(program)
    }

    /// Return the grid as text, one string per row: `#` for walls and `.` for open cells.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| if c.is_wall { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// Serialize a [`Maze`] object.
impl Serialize for Maze {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `3` is the number of fields to serialize
        let mut state = serializer.serialize_struct("Maze", 3)?;

        // The visited flags only matter during carving, so only the wall layout is exported
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("rows", &self.to_strings())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a maze from rows of `#` (wall) and `.` (open) characters.
    pub(crate) fn from_strings(rows: &[&str]) -> Maze {
        let height: usize = rows.len();
        let width: usize = rows.first().map_or(0, |r| r.len());
        let mut maze = Maze::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    maze.carve(Position::new(x as i32, y as i32));
                }
            }
        }
        maze
    }

    #[test]
    fn new_maze_is_fully_walled() {
        let maze = Maze::new(4, 3);
        assert_eq!(maze.rows().len(), 3);
        for (y, row) in maze.rows().iter().enumerate() {
            assert_eq!(row.len(), 4);
            for (x, cell) in row.iter().enumerate() {
                assert_eq!((cell.x, cell.y), (x, y));
                assert!(cell.is_wall);
                assert!(!cell.visited);
            }
        }
        assert!(maze.open_cells().is_empty());
    }

    #[test]
    fn out_of_grid_positions() {
        let maze = from_strings(&["###", "#.#", "###"]);
        assert!(maze.cell(Position::new(-1, 0)).is_none());
        assert!(maze.cell(Position::new(3, 0)).is_none());
        assert!(maze.cell(Position::new(0, 3)).is_none());
        assert!(maze.is_open(Position::new(1, 1)));
        assert!(!maze.is_open(Position::new(0, 1)));
    }

    #[test]
    fn degenerate_mazes() {
        assert!(from_strings(&["###", "#.#", "###"]).is_degenerate());
        assert!(from_strings(&["#####", "#...#", "#####"]).is_degenerate());
        assert!(from_strings(&["###", "#.#", "#.#", "###"]).is_degenerate());
        assert!(!from_strings(&["####", "#..#", "#.##", "####"]).is_degenerate());
    }

    #[test]
    fn last_open_cell_scans_from_bottom_right() {
        let maze = from_strings(&["#####", "#...#", "#.#.#", "#.###", "#####"]);
        assert_eq!(maze.last_open_cell(), Some(Position::new(1, 3)));
        assert_eq!(Maze::new(3, 3).last_open_cell(), None);
    }

    #[test]
    fn shortest_program_follows_the_corridor() {
        let maze = from_strings(&["#####", "#...#", "###.#", "#...#", "#####"]);
        let program = maze
            .shortest_program(Position::new(1, 1), Position::new(1, 3))
            .unwrap();
        use Direction::*;
        assert_eq!(program, vec![Right, Right, Down, Down, Left, Left]);
        assert_eq!(
            maze.shortest_program(Position::new(1, 1), Position::new(1, 1)),
            Some(vec![])
        );
    }

    #[test]
    fn shortest_program_unreachable() {
        let maze = from_strings(&["#####", "#.#.#", "#####"]);
        assert_eq!(
            maze.shortest_program(Position::new(1, 1), Position::new(3, 1)),
            None
        );
    }

    #[test]
    fn serializes_wall_layout() {
        let maze = from_strings(&["###", "#.#", "###"]);
        let json = serde_json::to_value(&maze).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"width": 3, "height": 3, "rows": ["###", "#.#", "###"]})
        );
    }
}

#[cfg(test)]
pub(crate) use tests::from_strings;
