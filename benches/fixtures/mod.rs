// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use mazebench::model::{Direction, Maze, Position};
use mazebench::stats::{CellResult, Execution};

pub fn checksum_positions(positions: &[Position]) -> u64 {
    positions.iter().fold(positions.len() as u64, |acc, position| {
        acc.wrapping_mul(131)
            .wrapping_add(position.x().unsigned_abs() as u64)
            .wrapping_mul(131)
            .wrapping_add(position.y().unsigned_abs() as u64)
    })
}

pub mod maze {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Shape {
        /// Every interior cell open.
        Open,
        /// Wall at every interior cell with even x and y.
        Pillars,
        /// One long corridor folding back and forth, row by row.
        Serpentine,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumPillars,
        LargeOpen,
        LargeSerpentine,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumPillars => "medium_pillars",
                Self::LargeOpen => "large_open",
                Self::LargeSerpentine => "large_serpentine",
            }
        }

        pub const fn params(self) -> (Shape, usize) {
            match self {
                Self::Small => (Shape::Pillars, 7),
                Self::MediumPillars => (Shape::Pillars, 41),
                Self::LargeOpen => (Shape::Open, 101),
                Self::LargeSerpentine => (Shape::Serpentine, 101),
            }
        }
    }

    /// Square maze with a wall border, start top-left and goal bottom-right.
    ///
    /// `size` must be odd and at least 5 so every shape stays connected.
    pub fn rows(shape: Shape, size: usize) -> Vec<String> {
        assert!(size >= 5 && size % 2 == 1, "size must be odd and >= 5");

        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        let border = x == 0 || y == 0 || x == size - 1 || y == size - 1;
                        if border {
                            return '#';
                        }
                        if (x, y) == (1, 1) {
                            return 'S';
                        }
                        if (x, y) == (size - 2, size - 2) {
                            return 'G';
                        }
                        let wall = match shape {
                            Shape::Open => false,
                            Shape::Pillars => x % 2 == 0 && y % 2 == 0,
                            Shape::Serpentine => {
                                let gap = if (y / 2) % 2 == 1 { size - 2 } else { 1 };
                                y % 2 == 0 && x != gap
                            }
                        };
                        if wall {
                            '#'
                        } else {
                            ' '
                        }
                    })
                    .collect()
            })
            .collect()
    }

    pub fn fixture(case: Case) -> Maze {
        let (shape, size) = case.params();
        Maze::new(rows(shape, size)).expect("fixture maze")
    }
}

pub mod executions {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub models: usize,
        pub trials_per_model: usize,
    }

    /// Trials graded against `maze` with moves chosen by a fixed arithmetic pattern.
    ///
    /// Roughly one cell in seventeen is an invocation failure (`llm_move == None`).
    pub fn build(maze: &Maze, maze_file: &str, params: Params) -> Vec<Execution> {
        let cells = maze.evaluation_cells().collect::<Vec<_>>();
        let mut executions = Vec::with_capacity(params.models * params.trials_per_model);

        for model in 0..params.models {
            for trial in 0..params.trials_per_model {
                let cell_results = cells
                    .iter()
                    .enumerate()
                    .map(|(idx, &position)| {
                        let seed = idx * 7 + trial * 3 + model;
                        let llm_move =
                            (seed % 17 != 0).then(|| Direction::ALL[seed % Direction::ALL.len()]);
                        let time_ms = 100.0 + ((idx * 31 + trial * 7) % 400) as f64;
                        CellResult::grade(maze, position, llm_move, Some(time_ms))
                    })
                    .collect();

                executions.push(Execution {
                    maze_file: maze_file.to_owned(),
                    model_name: format!("model-{model:02}"),
                    strategy_name: if trial % 2 == 0 { "matrix" } else { "list" }.to_owned(),
                    include_history: trial % 3 == 0,
                    cell_results,
                });
            }
        }

        executions
    }
}
