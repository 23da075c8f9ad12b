// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mazebench: maze graph engine and outcome aggregation for grid-navigation benchmarks.
//!
//! A [`model::Maze`] is parsed once from its rows; the goal-distance field and the canonical
//! start-to-cell history are derived on demand and cached by the maze. Trial results are
//! folded into [`stats::CellStats`] for per-cell and maze-wide reporting.

pub mod model;
pub mod query;
pub mod stats;
pub mod trial;
