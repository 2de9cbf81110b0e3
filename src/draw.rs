/*
draw.rs

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

//! Draw the maze in a terminal.
//!
//! Each cell is one character:
//!
//! * `#` wall
//! * `@` character
//! * `*` goal (the fruit)
//! * `.` cell on the traveled path
//! * space for the other open cells

use std::collections::HashSet;

use crate::generator::direction::Position;
use crate::generator::maze::Maze;

const WALL: char = '#';
const CHARACTER: char = '@';
const GOAL: char = '*';
const TRAIL: char = '.';
const OPEN: char = ' ';

/// Return the text drawing of the maze, one line per row.
pub fn render(maze: &Maze, character: Position, goal: Position, path: &[Position]) -> String {
    let trail: HashSet<Position> = path.iter().copied().collect();
    let mut out: String = String::with_capacity((maze.width() + 1) * maze.height());

    for row in maze.rows() {
        for cell in row {
            let p: Position = Position::new(cell.x as i32, cell.y as i32);
            // The character hides the goal when it stands on it
            let c: char = if p == character {
                CHARACTER
            } else if p == goal {
                GOAL
            } else if cell.is_wall {
                WALL
            } else if trail.contains(&p) {
                TRAIL
            } else {
                OPEN
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::maze::from_strings;

    #[test]
    fn draws_character_goal_and_trail() {
        let maze = from_strings(&["#####", "#...#", "#.#.#", "#####"]);
        let path = [Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)];
        let text = render(&maze, Position::new(3, 1), Position::new(3, 2), &path);
        assert_eq!(text, "#####\n#..@#\n# #*#\n#####\n");
    }

    #[test]
    fn character_on_goal() {
        let maze = from_strings(&["###", "#.#", "###"]);
        let p = Position::new(1, 1);
        assert_eq!(render(&maze, p, p, &[p]), "###\n#@#\n###\n");
    }
}
