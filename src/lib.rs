/*
lib.rs

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

//! Seeded maze puzzles where the player programs the character's moves.
//!
//! * [`generator`] builds a maze from a seed string. The same seed and dimensions always give the
//!   same maze.
//! * [`interpreter`] runs a list of [`generator::direction::Direction`] moves against a maze and
//!   reports whether the character reached the goal, hit a wall, or ran out of moves.
//! * [`program`] and [`game`] manage the player's program and the game in progress, for front
//!   ends that animate the execution.
//! * [`draw`] renders the maze as text.

pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod interpreter;
pub mod program;
