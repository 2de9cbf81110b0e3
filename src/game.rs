/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object ties a generated maze to the player's program and to the execution that is
//! currently animated.
//! While an execution runs, the program cannot be edited and the maze cannot be replaced.
//! [`Game::cancel`] drops the running execution so that its remaining steps are never applied.

use log::{debug, info};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::error::Error;
use std::fmt;

use crate::config::RANDOM_SEED_LEN;
use crate::generator::direction::{Direction, Position};
use crate::generator::maze::Maze;
use crate::generator::random_maze::{self, GeneratedMaze, MazeError};
use crate::interpreter::{Execution, ExecutionResult, Step};
use crate::program::Program;

/// Type of errors.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GameError {
    /// The operation is not allowed while the program runs.
    ExecutionInProgress,

    /// There is nothing to run.
    EmptyProgram,

    /// No block at that index.
    InvalidIndex(usize),

    /// The maze could not be generated.
    Maze(MazeError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ExecutionInProgress => write!(f, "the program is running"),
            GameError::EmptyProgram => write!(f, "the program is empty"),
            GameError::InvalidIndex(i) => write!(f, "no block at position {i}"),
            GameError::Maze(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for GameError {
    fn from(e: MazeError) -> Self {
        GameError::Maze(e)
    }
}

/// Game status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the player. Also the state after a program ran out of instructions.
    #[default]
    Idle,

    /// The program is being executed.
    Running,

    /// The character reached the goal.
    Success,

    /// The character was blocked by a wall.
    Error,
}

/// Return a new random seed.
pub fn random_seed() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SEED_LEN)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Return the notification text for the result of a program.
pub fn outcome_message(program: &[Direction], result: &ExecutionResult) -> String {
    match result {
        ExecutionResult::Success { .. } => "You've reached the fruit! Well done!".to_string(),
        ExecutionResult::Blocked { failed_step, .. } => {
            let direction: String = program
                .get(*failed_step)
                .map_or_else(String::new, |d| format!(" {d}"));
            format!(
                "Can't move{direction} from current position. Program stopped at step {}.",
                failed_step + 1
            )
        }
        ExecutionResult::Exhausted { .. } => {
            "Program finished, but you didn't reach the fruit. Try adding more steps!".to_string()
        }
    }
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Seed of the current maze.
    seed: String,

    width: usize,
    height: usize,

    /// Current maze with its start and end positions.
    generated: GeneratedMaze,

    /// Blocks assembled by the player.
    program: Program,

    state: GameState,

    /// Where the character is displayed.
    character: Position,

    /// Positions the character went through during the last execution.
    path: Vec<Position>,

    /// Execution in progress, if any.
    execution: Option<Execution>,
}

impl Game {
    /// Create a [`Game`] object with the maze for the given seed.
    ///
    /// # Errors
    ///
    /// Return an error if the maze cannot be generated.
    pub fn new(width: usize, height: usize, seed: &str) -> Result<Self, GameError> {
        let generated: GeneratedMaze = random_maze::generate(width, height, seed)?;
        let start: Position = generated.start;
        Ok(Self {
            seed: seed.to_string(),
            width,
            height,
            generated,
            program: Program::new(),
            state: GameState::Idle,
            character: start,
            path: vec![start],
            execution: None,
        })
    }

    /// Create a [`Game`] object with a random seed.
    ///
    /// # Errors
    ///
    /// Return an error if the maze cannot be generated.
    pub fn new_random(width: usize, height: usize) -> Result<Self, GameError> {
        Self::new(width, height, &random_seed())
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn maze(&self) -> &Maze {
        &self.generated.maze
    }

    pub fn generated(&self) -> &GeneratedMaze {
        &self.generated
    }

    pub fn start(&self) -> Position {
        self.generated.start
    }

    pub fn end(&self) -> Position {
        self.generated.end
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn character_position(&self) -> Position {
        self.character
    }

    /// Positions of the trail to draw.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Index of the instruction being executed.
    pub fn current_step(&self) -> usize {
        self.execution.as_ref().map_or(0, |e| e.current_step())
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Replace the maze with the one for the given seed and clear the program.
    ///
    /// # Errors
    ///
    /// Refused while the program runs. The current maze is kept if the new one cannot be
    /// generated.
    pub fn new_maze(&mut self, seed: &str) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.generated = random_maze::generate(self.width, self.height, seed)?;
        self.seed = seed.to_string();
        self.program = Program::new();
        self.execution = None;
        self.reset_execution();
        info!("New maze with seed {seed:?}");
        Ok(())
    }

    /// Replace the maze with one for a random seed.
    ///
    /// # Errors
    ///
    /// See [`Game::new_maze`].
    pub fn new_random_maze(&mut self) -> Result<(), GameError> {
        self.new_maze(&random_seed())
    }

    /// Add a block at the end of the program.
    pub fn add_block(&mut self, block: Direction) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.program.push(block);
        Ok(())
    }

    /// Remove the block at the given index.
    pub fn remove_block(&mut self, index: usize) -> Result<Direction, GameError> {
        self.ensure_idle()?;
        self.program
            .remove(index)
            .ok_or(GameError::InvalidIndex(index))
    }

    /// Move a block to another place in the program.
    pub fn reorder_block(&mut self, from: usize, to: usize) -> Result<(), GameError> {
        self.ensure_idle()?;
        if !self.program.reorder(from, to) {
            return Err(GameError::InvalidIndex(from.max(to)));
        }
        Ok(())
    }

    /// Remove all the blocks and put the character back at the start.
    pub fn clear_program(&mut self) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.program.clear();
        self.reset_execution();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.program.undo();
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.program.redo();
        Ok(())
    }

    /// Start executing the program from the start position.
    ///
    /// # Errors
    ///
    /// Return an error if the program is empty or already running.
    pub fn play(&mut self) -> Result<(), GameError> {
        self.ensure_idle()?;
        if self.program.is_empty() {
            return Err(GameError::EmptyProgram);
        }
        self.reset_execution();
        self.execution = Some(Execution::new(
            self.start(),
            self.end(),
            self.program.blocks(),
        ));
        self.state = GameState::Running;
        debug!("Running a program of {} blocks", self.program.len());
        Ok(())
    }

    /// Run the next instruction of the program being executed.
    ///
    /// Return None when nothing is running.
    pub fn step(&mut self) -> Option<Step> {
        if !self.is_running() {
            return None;
        }
        let execution: &mut Execution = self.execution.as_mut()?;
        let step: Step = execution.step(&self.generated.maze);
        self.character = execution.position();
        self.path = execution.path().to_vec();

        if let Step::Finished(result) = &step {
            self.state = match result {
                ExecutionResult::Success { .. } => GameState::Success,
                ExecutionResult::Blocked { .. } => GameState::Error,
                ExecutionResult::Exhausted { .. } => GameState::Idle,
            };
            info!("{}", outcome_message(self.program.blocks(), result));
        }
        Some(step)
    }

    /// Run the remaining instructions and return the result.
    pub fn run_to_end(&mut self) -> Option<ExecutionResult> {
        loop {
            if let Step::Finished(result) = self.step()? {
                return Some(result);
            }
        }
    }

    /// Drop the execution in progress, if any, and put the character back at the start.
    pub fn cancel(&mut self) {
        if self.execution.take().is_some() {
            debug!("Execution cancelled");
        }
        self.reset_execution();
    }

    /// Put the character back at the start. The program is kept.
    pub fn reset_execution(&mut self) {
        if self.is_running() {
            self.execution = None;
        }
        self.state = GameState::Idle;
        self.character = self.start();
        self.path = vec![self.start()];
    }

    /// Return the status line.
    pub fn status_message(&self) -> String {
        match self.state {
            GameState::Idle => "Ready to start".to_string(),
            GameState::Running => {
                format!("Step {}/{}", self.current_step() + 1, self.program.len())
            }
            GameState::Success => "Success!".to_string(),
            GameState::Error => "Error occurred".to_string(),
        }
    }

    fn ensure_idle(&self) -> Result<(), GameError> {
        if self.is_running() {
            Err(GameError::ExecutionInProgress)
        } else {
            Ok(())
        }
    }
}
