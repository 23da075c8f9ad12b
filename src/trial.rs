// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Running one trial over a maze.
//!
//! The move source (a model client, a scripted policy, a human) is abstracted behind
//! [`MoveOracle`]. Each evaluation cell is asked once; failures are recorded as "no move"
//! and never abort the trial.

use std::fmt;
use std::time::Instant;

use crate::model::{Direction, Maze, Position};
use crate::stats::{CellResult, Execution};

pub trait MoveOracle {
    type Error: fmt::Display;

    /// Picks the next move from `position`. `history` is the canonical route from the start
    /// when the trial includes history.
    fn next_move(
        &mut self,
        maze: &Maze,
        position: Position,
        history: Option<&[Position]>,
    ) -> Result<Direction, Self::Error>;
}

/// Labels copied onto the resulting [`Execution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    pub maze_file: String,
    pub model_name: String,
    pub strategy_name: String,
    pub include_history: bool,
}

/// Grades one move per evaluation cell, in row-major order.
pub fn run_trial<O: MoveOracle>(
    maze: &Maze,
    oracle: &mut O,
    include_history: bool,
) -> Vec<CellResult> {
    let mut results = Vec::with_capacity(maze.path_count() + 1);

    for position in maze.evaluation_cells() {
        let history = include_history.then(|| maze.path_from_start(position));

        let started = Instant::now();
        let llm_move = match oracle.next_move(maze, position, history.as_deref()) {
            Ok(direction) => Some(direction),
            Err(err) => {
                tracing::warn!(%position, error = %err, "move oracle failed");
                None
            }
        };
        let time_ms = started.elapsed().as_secs_f64() * 1000.0;

        let result = CellResult::grade(maze, position, llm_move, Some(time_ms));
        tracing::debug!(
            %position,
            correct = result.is_correct,
            llm_move = ?result.llm_move,
            time_ms,
            "graded cell"
        );
        results.push(result);
    }

    results
}

pub fn run_execution<O: MoveOracle>(maze: &Maze, oracle: &mut O, config: TrialConfig) -> Execution {
    let cell_results = run_trial(maze, oracle, config.include_history);
    let correct = cell_results.iter().filter(|result| result.is_correct).count();
    tracing::info!(
        maze = %config.maze_file,
        model = %config.model_name,
        strategy = %config.strategy_name,
        include_history = config.include_history,
        correct,
        total = cell_results.len(),
        "trial finished"
    );

    Execution {
        maze_file: config.maze_file.replace('\\', "/"),
        model_name: config.model_name,
        strategy_name: config.strategy_name,
        include_history: config.include_history,
        cell_results,
    }
}
