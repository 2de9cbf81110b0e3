/*
maze_properties.rs

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

use pathquest::generator::direction::{Direction, Position};
use pathquest::generator::random_maze::{MazeError, generate};
use pathquest::interpreter::{ExecutionResult, execute, is_valid_move, move_position};

const SEEDS: [&str; 6] = ["", "0", "abc", "Logic Path Quest", "zzzzzzzz", "k3x9qa"];

#[test]
fn generation_is_deterministic() {
    for seed in SEEDS {
        for (w, h) in [(5, 7), (15, 15), (16, 10)] {
            let a = generate(w, h, seed).unwrap();
            let b = generate(w, h, seed).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.maze.to_strings(), b.maze.to_strings());
        }
    }
}

#[test]
fn generated_mazes_are_structurally_valid() {
    for seed in SEEDS {
        for w in 4..12 {
            for h in 4..12 {
                let g = generate(w, h, seed).unwrap();
                let open = g.maze.open_cells();
                assert!(open.len() >= 2);
                assert!(!open.iter().all(|p| p.x == open[0].x));
                assert!(!open.iter().all(|p| p.y == open[0].y));
                assert!(!g.maze.rows()[g.start.y as usize][g.start.x as usize].is_wall);
                assert!(!g.maze.rows()[g.end.y as usize][g.end.x as usize].is_wall);
            }
        }
    }
}

#[test]
fn cells_know_their_coordinates() {
    let g = generate(13, 9, "coordinates").unwrap();
    for (y, row) in g.maze.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            assert_eq!((cell.x, cell.y), (x, y));
        }
    }
}

#[test]
fn tiny_dimensions_never_panic() {
    for w in 1..4 {
        for h in 1..10 {
            assert!(matches!(
                generate(w, h, "tiny"),
                Err(MazeError::GenerationFailed { .. })
            ));
            assert!(matches!(
                generate(h, w, "tiny"),
                Err(MazeError::GenerationFailed { .. })
            ));
        }
    }
}

#[test]
fn seeds_change_the_maze() {
    let mazes: Vec<_> = SEEDS
        .iter()
        .map(|s| generate(15, 15, s).unwrap().maze)
        .collect();
    for i in 0..mazes.len() {
        for j in (i + 1)..mazes.len() {
            assert_ne!(mazes[i], mazes[j]);
        }
    }
}

#[test]
fn start_is_walled_above_and_left() {
    let g = generate(15, 15, "fail fast").unwrap();
    assert!(!is_valid_move(&g.maze, g.start, Direction::Up));
    let result = execute(
        &g.maze,
        g.start,
        g.end,
        &[Direction::Up, Direction::Right],
    );
    assert_eq!(
        result,
        ExecutionResult::Blocked {
            path: vec![Position::new(1, 1)],
            failed_step: 0
        }
    );
}

#[test]
fn walking_back_and_forth_exhausts_the_program() {
    let g = generate(15, 15, "exhaust").unwrap();
    let first: Direction = Direction::ALL
        .into_iter()
        .find(|d| is_valid_move(&g.maze, g.start, *d))
        .unwrap();
    let back: Direction = match first {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    };
    let program = [first, back, first, back];
    let result = execute(&g.maze, g.start, g.end, &program);
    assert!(matches!(result, ExecutionResult::Exhausted { .. }));
    assert_eq!(result.path().len(), program.len() + 1);
    assert_eq!(result.path()[1], move_position(g.start, first));
}

#[test]
fn solution_reaches_the_goal() {
    for seed in SEEDS {
        let g = generate(15, 15, seed).unwrap();
        let solution = g.maze.shortest_program(g.start, g.end).unwrap();
        let mut program = solution.clone();
        program.push(Direction::Up);
        match execute(&g.maze, g.start, g.end, &program) {
            ExecutionResult::Success { path } => {
                assert_eq!(path.len(), solution.len() + 1);
                assert_eq!(path.last(), Some(&g.end));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
