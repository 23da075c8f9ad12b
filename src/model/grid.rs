// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geometry::Position;

/// Row-major index space of a `width` x `height` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    width: usize,
    height: usize,
}

impl GridIndex {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width.checked_mul(self.height).expect("grid area overflow")
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn idx_of(&self, position: Position) -> Option<usize> {
        let (x, y) = (position.x(), position.y());
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn position_of(&self, idx: usize) -> Position {
        Position::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
