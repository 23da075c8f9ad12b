// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types and the maze grid.

pub mod geometry;
pub mod grid;
pub mod maze;

pub use geometry::{Direction, ParseDirectionError, ParsePositionError, Position};
pub use grid::GridIndex;
pub use maze::{CellType, MalformedMaze, Maze, MazeInfo, MazeLoadError};
