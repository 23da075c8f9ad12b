// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Derived navigation views over a [`Maze`](crate::model::Maze).
//!
//! Both views are computed once per maze and cached by it: the goal-distance field answers
//! "which moves are correct here", the canonical history answers "how did the agent get here".

pub mod distance;
pub mod history;

pub use distance::DistanceField;
pub use history::CanonicalHistory;
