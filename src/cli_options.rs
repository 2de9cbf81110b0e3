/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command-line front end generates a maze, draws it in the terminal, and optionally runs a
//! program against it.
//!
//! # Examples
//!
//! Draw the maze for a given seed:
//!
//! ```text
//! $ pathquest --seed k3x9qa
//! Maze seed: k3x9qa
//! ###############
//! #@  #     #   #
//! ### # ### # # #
//! ...
//! ```
//!
//! Run a program step by step, with a short pause between steps:
//!
//! ```text
//! $ pathquest --seed k3x9qa --program right,right,down,down --animate
//! ```
//!
//! Print the maze, a shortest solution, and the result of a program as JSON:
//!
//! ```text
//! $ pathquest --seed k3x9qa --program right,right --solve --json
//! ```

use clap::Parser;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::thread;
use std::time::Duration;

use pathquest::config::{COPYRIGHT_NOTICE, DEFAULT_HEIGHT, DEFAULT_WIDTH, STEP_DELAY_MS};
use pathquest::draw;
use pathquest::game::{Game, outcome_message, random_seed};
use pathquest::generator::direction::{Direction, Position};
use pathquest::generator::maze::Maze;
use pathquest::interpreter::{ExecutionResult, Step};

/// Exit status when the program does not reach the goal.
const EXIT_NOT_SOLVED: u8 = 2;

/// Exit status on errors.
const EXIT_ERROR: u8 = 1;

/// Guide the character through a seeded maze with a program of direction blocks.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Maze seed. A random seed is used when not provided
    #[arg(short, long)]
    seed: Option<String>,

    /// Maze width, in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Maze height, in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Comma-separated list of moves to run
    #[arg(value_enum, short, long, value_delimiter = ',')]
    program: Vec<Direction>,

    /// Run the program one step at a time, redrawing the maze after each step
    #[arg(short, long, default_value_t = false, conflicts_with = "json")]
    animate: bool,

    /// Print a shortest program that reaches the goal
    #[arg(long, default_value_t = false)]
    solve: bool,

    /// Print the maze and the results in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON report.
#[derive(Serialize)]
struct Report<'a> {
    seed: &'a str,
    maze: &'a Maze,
    start: Position,
    end: Position,
    program: &'a [Direction],
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a ExecutionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<&'a [Direction]>,
}

/// Parse and process command-line options, and return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let level: &str = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run(args: &Args) -> Result<u8, Box<dyn Error>> {
    let seed: String = args.seed.clone().unwrap_or_else(random_seed);
    debug!(
        "Seed {seed:?}, {}x{} maze, {} instruction(s)",
        args.width,
        args.height,
        args.program.len()
    );

    let mut game: Game = Game::new(args.width, args.height, &seed)?;
    for block in &args.program {
        game.add_block(*block)?;
    }

    let solution: Option<Vec<Direction>> = if args.solve {
        game.maze().shortest_program(game.start(), game.end())
    } else {
        None
    };

    let result: Option<ExecutionResult> = if game.program().is_empty() {
        None
    } else if args.animate {
        animate(&mut game)?
    } else {
        game.play()?;
        game.run_to_end()
    };
    let message: Option<String> = result
        .as_ref()
        .map(|r| outcome_message(game.program().blocks(), r));

    if args.json {
        let report = Report {
            seed: game.seed(),
            maze: game.maze(),
            start: game.start(),
            end: game.end(),
            program: game.program().blocks(),
            result: result.as_ref(),
            message,
            solution: solution.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !args.animate || result.is_none() {
            println!("Maze seed: {}", game.seed());
            print!("{}", draw_game(&game));
        }
        if let Some(m) = message {
            println!("{m}");
        }
        if let Some(s) = &solution {
            let moves: Vec<String> = s.iter().map(|d| d.to_string()).collect();
            println!("Solution ({} moves): {}", s.len(), moves.join(","));
        }
    }

    Ok(match result {
        Some(r) if !r.is_success() => EXIT_NOT_SOLVED,
        _ => 0,
    })
}

/// Run the program one instruction at a time and redraw the maze after each step.
fn animate(game: &mut Game) -> Result<Option<ExecutionResult>, Box<dyn Error>> {
    game.play()?;
    println!("Maze seed: {}", game.seed());
    print!("{}", draw_game(game));

    let delay: Duration = Duration::from_millis(STEP_DELAY_MS);
    let program: Vec<Direction> = game.program().blocks().to_vec();
    loop {
        let index: usize = game.current_step();
        thread::sleep(delay);
        let Some(step) = game.step() else {
            return Ok(None);
        };
        if let Some(d) = program.get(index) {
            println!("\nStep {}/{}: {d}", index + 1, program.len());
        }
        print!("{}", draw_game(game));
        if let Step::Finished(result) = step {
            return Ok(Some(result));
        }
    }
}

fn draw_game(game: &Game) -> String {
    draw::render(
        game.maze(),
        game.character_position(),
        game.end(),
        game.path(),
    )
}
