// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use rayon::prelude::*;

use super::execution::{CellResult, Execution};
use crate::model::Position;

/// Running totals for one position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellTally {
    pub correct: u32,
    pub total: u32,
    /// Elapsed-time samples in milliseconds, in arrival order.
    pub times: Vec<f64>,
}

impl CellTally {
    pub fn accuracy(&self) -> Accuracy {
        Accuracy { correct: self.correct, total: self.total }
    }

    pub fn mean_time(&self) -> Option<f64> {
        mean(&self.times)
    }

    fn absorb(&mut self, other: &CellTally) {
        self.correct = self.correct.saturating_add(other.correct);
        self.total = self.total.saturating_add(other.total);
        self.times.extend_from_slice(&other.times);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accuracy {
    pub correct: u32,
    pub total: u32,
}

impl Accuracy {
    /// `correct / total`, or `None` before any sample.
    pub fn rate(&self) -> Option<f64> {
        (self.total > 0).then(|| f64::from(self.correct) / f64::from(self.total))
    }
}

pub type AccuracyData = BTreeMap<Position, Accuracy>;
pub type TimingData = BTreeMap<Position, f64>;

/// Maze-wide totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverallStats {
    pub correct: u32,
    pub total: u32,
    pub times: Vec<f64>,
}

impl OverallStats {
    pub fn accuracy(&self) -> Accuracy {
        Accuracy { correct: self.correct, total: self.total }
    }

    pub fn mean_time(&self) -> Option<f64> {
        mean(&self.times)
    }
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Per-position outcome aggregator across any number of trials.
///
/// Positions are opaque keys: nothing here checks them against a maze. State only grows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStats {
    cells: BTreeMap<Position, CellTally>,
    trial_count: u32,
}

impl CellStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds trials on the rayon pool. Equivalent to adding each one in turn.
    pub fn from_executions_par(executions: &[Execution]) -> Self {
        executions
            .par_iter()
            .fold(CellStats::new, |mut stats, execution| {
                stats.add_execution(execution);
                stats
            })
            .reduce(CellStats::new, |mut left, right| {
                left.merge(&right);
                left
            })
    }

    pub fn add_cell_result(&mut self, result: &CellResult) -> &mut Self {
        self.record(result.position, result.is_correct, result.time_ms)
    }

    pub fn record(
        &mut self,
        position: Position,
        is_correct: bool,
        time_ms: Option<f64>,
    ) -> &mut Self {
        let tally = self.cells.entry(position).or_default();
        if is_correct {
            tally.correct = tally.correct.saturating_add(1);
        }
        tally.total = tally.total.saturating_add(1);
        if let Some(time_ms) = time_ms {
            tally.times.push(time_ms);
        }
        self
    }

    /// Adds every result of one trial and counts the trial.
    pub fn add_execution(&mut self, execution: &Execution) -> &mut Self {
        self.add_trial(&execution.cell_results)
    }

    pub fn add_trial(&mut self, results: &[CellResult]) -> &mut Self {
        for result in results {
            self.add_cell_result(result);
        }
        self.trial_count = self.trial_count.saturating_add(1);
        self
    }

    pub fn merge(&mut self, other: &CellStats) -> &mut Self {
        for (position, tally) in &other.cells {
            self.cells.entry(*position).or_default().absorb(tally);
        }
        self.trial_count = self.trial_count.saturating_add(other.trial_count);
        self
    }

    pub fn trial_count(&self) -> u32 {
        self.trial_count
    }

    pub fn cell_at(&self, position: Position) -> Option<&CellTally> {
        self.cells.get(&position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &CellTally)> + '_ {
        self.cells.iter().map(|(position, tally)| (*position, tally))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn overall(&self) -> OverallStats {
        let mut overall = OverallStats::default();
        for tally in self.cells.values() {
            overall.correct = overall.correct.saturating_add(tally.correct);
            overall.total = overall.total.saturating_add(tally.total);
            overall.times.extend_from_slice(&tally.times);
        }
        overall
    }

    pub fn accuracy_data(&self) -> AccuracyData {
        self.cells.iter().map(|(position, tally)| (*position, tally.accuracy())).collect()
    }

    /// Mean elapsed time per position; positions without samples are left out.
    pub fn timing_data(&self) -> TimingData {
        self.cells
            .iter()
            .filter_map(|(position, tally)| Some((*position, tally.mean_time()?)))
            .collect()
    }
}

impl<'a> Extend<&'a Execution> for CellStats {
    fn extend<T: IntoIterator<Item = &'a Execution>>(&mut self, iter: T) {
        for execution in iter {
            self.add_execution(execution);
        }
    }
}

impl<'a> FromIterator<&'a Execution> for CellStats {
    fn from_iter<T: IntoIterator<Item = &'a Execution>>(iter: T) -> Self {
        let mut stats = CellStats::new();
        stats.extend(iter);
        stats
    }
}
