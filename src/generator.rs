/*
generator.rs

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

//! Generate random mazes.
//!
//! A maze is a grid of walls and open cells represented by a [`maze::Maze`] object.
//!
//! To create a maze, create a [`random_maze::RandomMaze`] object for the grid dimensions and use
//! its [`random_maze::RandomMaze::generate`] method with a seed string, or call the
//! [`random_maze::generate`] shortcut.
//! The result is a [`random_maze::GeneratedMaze`] object that groups the grid with the start
//! and end positions.
//!
//! Generation is deterministic: all the random decisions come from a
//! [`seeded_random::SeededRandom`] object built from the seed string, so the same seed and
//! dimensions always give the same maze.
//! If the carved maze is degenerate (all the open cells on one row or one column), generation
//! starts again with a seed derived from the original one.

pub mod direction;
pub mod maze;
pub mod random_maze;
pub mod seeded_random;
