// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::cell_stats::CellStats;
use crate::model::{Direction, Maze, MazeInfo, Position};

/// Outcome of asking for one move at one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellResult {
    pub position: Position,
    pub is_correct: bool,
    /// `None` when no move could be obtained (the invocation failed).
    pub llm_move: Option<Direction>,
    pub correct_moves: Vec<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
}

impl CellResult {
    /// Grades `llm_move` against the maze's locally optimal moves at `position`.
    pub fn grade(
        maze: &Maze,
        position: Position,
        llm_move: Option<Direction>,
        time_ms: Option<f64>,
    ) -> Self {
        let correct_moves = maze.directions_to_goal(position).into_vec();
        let is_correct = llm_move.is_some_and(|mv| correct_moves.contains(&mv));
        Self { position, is_correct, llm_move, correct_moves, time_ms }
    }

    /// Wrong because no move was produced at all.
    pub fn is_exception(&self) -> bool {
        !self.is_correct && self.llm_move.is_none()
    }
}

/// One full trial: a maze evaluated once by one model and prompt strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub maze_file: String,
    pub model_name: String,
    pub strategy_name: String,
    pub include_history: bool,
    pub cell_results: Vec<CellResult>,
}

impl Execution {
    /// File name of the maze without directory or `.txt` extension.
    pub fn maze_name(&self) -> &str {
        maze_name_from_path(&self.maze_file)
    }
}

/// File name of `maze_file` without `.txt`. Both `/` and `\` separate directories.
pub fn maze_name_from_path(maze_file: &str) -> &str {
    let file_name = maze_file.rsplit(['/', '\\']).next().unwrap_or(maze_file);
    file_name.strip_suffix(".txt").unwrap_or(file_name)
}

/// Selects trials. Model and maze match by substring, strategy and history exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionFilter {
    pub model: Option<String>,
    pub maze: Option<String>,
    pub strategy: Option<String>,
    pub include_history: Option<bool>,
}

impl ExecutionFilter {
    pub fn matches(&self, execution: &Execution) -> bool {
        if let Some(model) = &self.model {
            if !execution.model_name.contains(model.as_str()) {
                return false;
            }
        }
        if let Some(maze) = &self.maze {
            if !execution.maze_file.contains(maze.as_str()) {
                return false;
            }
        }
        if let Some(strategy) = &self.strategy {
            if execution.strategy_name != *strategy {
                return false;
            }
        }
        if let Some(include_history) = self.include_history {
            if execution.include_history != include_history {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(
        &'a self,
        executions: &'a [Execution],
    ) -> impl Iterator<Item = &'a Execution> + 'a {
        executions.iter().filter(move |execution| self.matches(execution))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub model: SmolStr,
    pub strategy: SmolStr,
    pub include_history: bool,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = if self.include_history { "yes" } else { "no" };
        write!(f, "{} / {} / history:{history}", self.model, self.strategy)
    }
}

/// Aggregated cell statistics for one maze, split by model, strategy and history setting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MazeGroup {
    pub maze_file: String,
    pub groups: BTreeMap<GroupKey, CellStats>,
}

/// Groups trials per maze file, then per (model, strategy, history). Ordered by key.
pub fn group_by_maze<'a>(executions: impl IntoIterator<Item = &'a Execution>) -> Vec<MazeGroup> {
    let mut by_maze: BTreeMap<&'a str, MazeGroup> = BTreeMap::new();

    for execution in executions {
        let maze_group = by_maze.entry(execution.maze_file.as_str()).or_insert_with(|| MazeGroup {
            maze_file: execution.maze_file.clone(),
            groups: BTreeMap::new(),
        });
        let key = GroupKey {
            model: SmolStr::new(&execution.model_name),
            strategy: SmolStr::new(&execution.strategy_name),
            include_history: execution.include_history,
        };
        maze_group.groups.entry(key).or_default().add_execution(execution);
    }

    by_maze.into_values().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeCategory {
    Open,
    Corridor,
    Unknown,
}

impl MazeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Corridor => "corridor",
            Self::Unknown => "unknown",
        }
    }
}

/// Naming convention `<size>x<size>_<type>`, e.g. `11x11_corridor_spiral`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeName {
    pub size: u32,
    pub maze_type: String,
    pub category: MazeCategory,
}

impl MazeName {
    pub fn parse(name: &str) -> Self {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(r"^(\d+)x\d+_(.+)$").expect("valid maze name regex"));

        let parsed = pattern.captures(name).and_then(|caps| {
            let size = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let maze_type = caps.get(2)?.as_str().to_owned();
            Some((size, maze_type))
        });

        match parsed {
            Some((size, maze_type)) => {
                let category = if maze_type.starts_with("open") {
                    MazeCategory::Open
                } else {
                    MazeCategory::Corridor
                };
                Self { size, maze_type, category }
            }
            None => Self { size: 0, maze_type: name.to_owned(), category: MazeCategory::Unknown },
        }
    }
}

/// Per-(model, maze, strategy, history) totals for tabular export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    pub model: String,
    pub maze: String,
    pub maze_name: MazeName,
    pub strategy: String,
    pub include_history: bool,
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub exceptions: u32,
    pub time_ms: f64,
    pub info: Option<MazeInfo>,
}

impl ExecutionSummary {
    fn new(model: &str, maze: &str, strategy: &str, include_history: bool) -> Self {
        Self {
            model: model.to_owned(),
            maze: maze.to_owned(),
            maze_name: MazeName::parse(maze),
            strategy: strategy.to_owned(),
            include_history,
            total: 0,
            correct: 0,
            wrong: 0,
            exceptions: 0,
            time_ms: 0.0,
            info: None,
        }
    }

    fn add(&mut self, result: &CellResult) {
        self.total += 1;
        if result.is_correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
            if result.llm_move.is_none() {
                self.exceptions += 1;
            }
        }
        if let Some(time_ms) = result.time_ms {
            self.time_ms += time_ms;
        }
    }

    /// Wrong answers in percent, one decimal.
    pub fn wrong_rate(&self) -> f64 {
        percent_of(self.wrong, self.total)
    }

    pub fn exception_rate(&self) -> f64 {
        percent_of(self.exceptions, self.total)
    }

    /// `100 - wrong_rate`, one decimal; 0 when nothing was graded.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_to(100.0 - self.wrong_rate(), 1)
    }

    /// Mean seconds per graded cell, two decimals.
    pub fn seconds_per_cell(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_to(self.time_ms / f64::from(self.total) / 1000.0, 2)
    }
}

fn percent_of(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(f64::from(part) / f64::from(total) * 100.0, 1)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Totals per (model, maze name, strategy, history), sorted by those fields.
pub fn summarize<'a>(executions: impl IntoIterator<Item = &'a Execution>) -> Vec<ExecutionSummary> {
    let mut grouped: BTreeMap<(&'a str, &'a str, &'a str, bool), ExecutionSummary> =
        BTreeMap::new();

    for execution in executions {
        let key = (
            execution.model_name.as_str(),
            execution.maze_name(),
            execution.strategy_name.as_str(),
            execution.include_history,
        );
        let summary = grouped
            .entry(key)
            .or_insert_with(|| ExecutionSummary::new(key.0, key.1, key.2, key.3));
        for result in &execution.cell_results {
            summary.add(result);
        }
    }

    grouped.into_values().collect()
}
