/*
interpreter.rs

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

//! Run the player's program against a maze.
//!
//! [`execute`] runs a complete program and returns an [`ExecutionResult`].
//! Callers that animate the character use an [`Execution`] object instead, and call
//! [`Execution::step`] once per displayed step.

use log::debug;
use serde::Serialize;

use crate::generator::direction::{Direction, Position};
use crate::generator::maze::Maze;

/// Outcome of a program execution.
///
/// Every variant carries the positions the character went through, starting with the start
/// position.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ExecutionResult {
    /// The character reached the goal. Remaining instructions were not run.
    Success { path: Vec<Position> },

    /// The instruction at index `failed_step` would have hit a wall or left the grid.
    Blocked {
        path: Vec<Position>,
        failed_step: usize,
    },

    /// All the instructions ran without reaching the goal.
    Exhausted { path: Vec<Position> },
}

impl ExecutionResult {
    /// Return the positions visited during the execution.
    pub fn path(&self) -> &[Position] {
        match self {
            ExecutionResult::Success { path }
            | ExecutionResult::Blocked { path, .. }
            | ExecutionResult::Exhausted { path } => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }
}

/// Whether moving from `from` in the given direction lands on an open cell inside the grid.
pub fn is_valid_move(maze: &Maze, from: Position, direction: Direction) -> bool {
    from.checked_offset(direction, 1).is_some_and(|to| maze.is_open(to))
}

/// Return the position one step away in the given direction.
///
/// The maze is not consulted: call [`is_valid_move`] first. Coordinates saturate at the
/// `i32` limits instead of overflowing.
pub fn move_position(from: Position, direction: Direction) -> Position {
    from.offset(direction, 1)
}

/// Result of a single execution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The instruction at `index` moved the character to `position`, and the program goes on.
    Moved { index: usize, position: Position },

    /// The execution is over.
    Finished(ExecutionResult),
}

/// Execution progress.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ExecutionState {
    NotStarted,
    Running,
    Finished(ExecutionResult),
}

/// Step-by-step execution of a program.
///
/// The object owns a copy of the program. Once finished, it keeps returning the same result;
/// start a new [`Execution`] to run the program again.
#[derive(Debug, Clone)]
pub struct Execution {
    program: Vec<Direction>,
    end: Position,
    position: Position,
    path: Vec<Position>,

    /// Index of the next instruction to run.
    next: usize,
    state: ExecutionState,
}

impl Execution {
    /// Create an [`Execution`] object for a program that starts at `start` and must reach `end`.
    pub fn new(start: Position, end: Position, program: &[Direction]) -> Self {
        Self {
            program: program.to_vec(),
            end,
            position: start,
            path: vec![start],
            next: 0,
            state: ExecutionState::NotStarted,
        }
    }

    /// Current character position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Positions visited so far, starting with the start position.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Index of the next instruction to run.
    pub fn current_step(&self) -> usize {
        self.next
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, ExecutionState::Finished(_))
    }

    /// Return the result if the execution is over.
    pub fn result(&self) -> Option<&ExecutionResult> {
        match &self.state {
            ExecutionState::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Run the next instruction.
    pub fn step(&mut self, maze: &Maze) -> Step {
        if let ExecutionState::Finished(result) = &self.state {
            return Step::Finished(result.clone());
        }
        self.state = ExecutionState::Running;

        let Some(&direction) = self.program.get(self.next) else {
            debug!("Program exhausted at {}", self.position);
            return self.finish(ExecutionResult::Exhausted {
                path: self.path.clone(),
            });
        };

        let index: usize = self.next;
        if !is_valid_move(maze, self.position, direction) {
            debug!(
                "Step {index}: cannot move {direction} from {}",
                self.position
            );
            return self.finish(ExecutionResult::Blocked {
                path: self.path.clone(),
                failed_step: index,
            });
        }

        self.position = move_position(self.position, direction);
        self.path.push(self.position);
        self.next += 1;
        debug!("Step {index}: moved {direction} to {}", self.position);

        if self.position == self.end {
            return self.finish(ExecutionResult::Success {
                path: self.path.clone(),
            });
        }
        if self.next == self.program.len() {
            return self.finish(ExecutionResult::Exhausted {
                path: self.path.clone(),
            });
        }
        Step::Moved {
            index,
            position: self.position,
        }
    }

    /// Run the remaining instructions and return the result.
    pub fn run(&mut self, maze: &Maze) -> ExecutionResult {
        loop {
            if let Step::Finished(result) = self.step(maze) {
                return result;
            }
        }
    }

    fn finish(&mut self, result: ExecutionResult) -> Step {
        self.state = ExecutionState::Finished(result.clone());
        Step::Finished(result)
    }
}

/// Run the program from `start` and report whether it reaches `end`.
///
/// Instructions run in order. The execution stops at the first instruction that would hit a wall
/// or leave the grid, and as soon as the character reaches `end`.
pub fn execute(
    maze: &Maze,
    start: Position,
    end: Position,
    program: &[Direction],
) -> ExecutionResult {
    Execution::new(start, end, program).run(maze)
}
