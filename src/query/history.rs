// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::model::{Direction, GridIndex, Maze, Position};

const NO_PARENT: i32 = -1;
const UNREACHED: u32 = u32::MAX;

const VERTICAL_FIRST: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
const HORIZONTAL_FIRST: [Direction; 4] =
    [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

/// Neighbor expansion order at `current`.
///
/// Moves along the axis with more remaining distance to the goal are offered first; a tie
/// counts as vertical. This only decides between equal-cost routes, but the chosen route is
/// observable, so the order is part of the contract.
fn neighbor_order(current: Position, goal: Position) -> [Direction; 4] {
    let dx = goal.x().abs_diff(current.x());
    let dy = goal.y().abs_diff(current.y());
    if dy >= dx {
        VERTICAL_FIRST
    } else {
        HORIZONTAL_FIRST
    }
}

/// Shortest-path tree rooted at the start, used to describe how an agent reached a cell.
///
/// Every step costs 1 except steps *leaving* the goal, which cost `width * height`. Routes
/// therefore pass through the goal only when it is the sole way to a cell.
///
/// Frontier entries are ordered by cost, then by insertion sequence, so among equal-cost
/// entries the earliest pushed is expanded first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHistory {
    grid: GridIndex,
    start: Position,
    cost: Vec<u32>,
    came_from: Vec<i32>,
}

impl CanonicalHistory {
    pub fn compute(maze: &Maze) -> Self {
        let grid = maze.grid();
        let start = maze.start();
        let goal = maze.goal();
        let goal_pass_cost = u32::try_from(grid.len()).unwrap_or(u32::MAX);

        let mut cost = vec![UNREACHED; grid.len()];
        let mut came_from = vec![NO_PARENT; grid.len()];
        let mut heap: BinaryHeap<Reverse<(u32, u32, u32)>> = BinaryHeap::new();
        let mut tie_seq = 0u32;

        if let Some(start_idx) = grid.idx_of(start) {
            cost[start_idx] = 0;
            heap.push(Reverse((0, tie_seq, start_idx as u32)));
            tie_seq = tie_seq.wrapping_add(1);
        }

        while let Some(Reverse((current_cost, _tie, idx))) = heap.pop() {
            let idx = idx as usize;
            if cost[idx] < current_cost {
                continue;
            }

            let current = grid.position_of(idx);
            let step_cost = if current == goal { goal_pass_cost } else { 1 };
            let next_cost = current_cost.saturating_add(step_cost);

            for direction in neighbor_order(current, goal) {
                let next = current.step(direction);
                if !maze.is_walkable(next) {
                    continue;
                }
                let Some(next_idx) = grid.idx_of(next) else {
                    continue;
                };
                if next_cost < cost[next_idx] {
                    cost[next_idx] = next_cost;
                    came_from[next_idx] = idx as i32;
                    heap.push(Reverse((next_cost, tie_seq, next_idx as u32)));
                    tie_seq = tie_seq.wrapping_add(1);
                }
            }
        }

        let history = Self { grid, start, cost, came_from };
        tracing::debug!(
            reached = history.reachable().count(),
            start = %start,
            "computed canonical history"
        );
        history
    }

    /// Weighted route cost from the start, goal penalty included.
    pub fn cost(&self, position: Position) -> Option<u32> {
        let idx = self.grid.idx_of(position)?;
        match self.cost[idx] {
            UNREACHED => None,
            cost => Some(cost),
        }
    }

    pub fn parent(&self, position: Position) -> Option<Position> {
        let idx = self.grid.idx_of(position)?;
        match self.came_from[idx] {
            NO_PARENT => None,
            parent => Some(self.grid.position_of(parent as usize)),
        }
    }

    /// Cells the start can reach, in row-major order.
    pub fn reachable(&self) -> impl Iterator<Item = Position> + '_ {
        self.cost
            .iter()
            .enumerate()
            .filter(|(_, cost)| **cost != UNREACHED)
            .map(|(idx, _)| self.grid.position_of(idx))
    }

    /// Route from the start to `position`, both ends included.
    ///
    /// Returns `None` when the start cannot reach `position`.
    pub fn path_to(&self, position: Position) -> Option<Vec<Position>> {
        let target_idx = self.grid.idx_of(position)?;
        if self.cost[target_idx] == UNREACHED {
            return None;
        }

        let mut path = vec![position];
        let mut cursor_idx = target_idx;
        while self.grid.position_of(cursor_idx) != self.start {
            let prev_idx = self.came_from[cursor_idx];
            if prev_idx < 0 {
                return None;
            }
            cursor_idx = prev_idx as usize;
            path.push(self.grid.position_of(cursor_idx));
        }

        path.reverse();
        Some(path)
    }
}
