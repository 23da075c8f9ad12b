// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trial records and their aggregation.

pub mod cell_stats;
pub mod execution;

pub use cell_stats::{Accuracy, AccuracyData, CellStats, CellTally, OverallStats, TimingData};
pub use execution::{
    group_by_maze, maze_name_from_path, summarize, CellResult, Execution, ExecutionFilter,
    ExecutionSummary, GroupKey, MazeCategory, MazeGroup, MazeName,
};
