// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use smallvec::SmallVec;

use super::geometry::{Direction, Position};
use super::grid::GridIndex;
use crate::query::distance::DistanceField;
use crate::query::history::CanonicalHistory;

/// Cell kind parsed from one layout character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Path,
    Wall,
    Start,
    Goal,
}

impl CellType {
    /// `#` is a wall, `S` the start, `G` the goal; every other character is open floor.
    pub fn from_char(ch: char) -> Self {
        match ch {
            '#' => Self::Wall,
            'S' => Self::Start,
            'G' => Self::Goal,
            _ => Self::Path,
        }
    }

    pub fn is_walkable(self) -> bool {
        self != Self::Wall
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedMaze {
    EmptyLayout,
    MissingStart,
    DuplicateStart { first: Position, second: Position },
    MissingGoal,
    DuplicateGoal { first: Position, second: Position },
}

impl fmt::Display for MalformedMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "maze layout cannot be empty"),
            Self::MissingStart => write!(f, "no start position found"),
            Self::DuplicateStart { first, second } => {
                write!(f, "multiple start positions found: {first} and {second}")
            }
            Self::MissingGoal => write!(f, "no goal position found"),
            Self::DuplicateGoal { first, second } => {
                write!(f, "multiple goal positions found: {first} and {second}")
            }
        }
    }
}

impl std::error::Error for MalformedMaze {}

#[derive(Debug)]
pub enum MazeLoadError {
    Io { path: PathBuf, source: io::Error },
    Malformed { path: PathBuf, source: MalformedMaze },
}

impl fmt::Display for MazeLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read maze {}: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed maze {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for MazeLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

/// Size figures used when comparing results across mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MazeInfo {
    pub total_cells: usize,
    pub passable_cells: usize,
    /// Undirected 4-adjacent pairs of walkable cells.
    pub edges: usize,
}

/// An immutable maze grid with lazily derived navigation views.
///
/// Rows may have different lengths. Columns past the end of a short row are *absent*
/// (neither floor nor wall), so they are never walkable.
///
/// The goal-distance field and the canonical-history tree are computed on first use and
/// cached for the lifetime of the maze. Both caches sit behind [`OnceLock`], so a `Maze`
/// can be shared across threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct Maze {
    layout: Vec<String>,
    cells: Vec<Option<CellType>>,
    grid: GridIndex,
    start: Position,
    goal: Position,
    path_count: usize,
    distances: OnceLock<DistanceField>,
    history: OnceLock<CanonicalHistory>,
}

impl Maze {
    pub fn new<I, S>(rows: I) -> Result<Self, MalformedMaze>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let layout: Vec<String> = rows.into_iter().map(Into::into).collect();
        if layout.is_empty() {
            return Err(MalformedMaze::EmptyLayout);
        }

        let height = layout.len();
        let width = layout.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let grid = GridIndex::new(width, height);
        let mut cells = vec![None; grid.len()];

        let mut start: Option<Position> = None;
        let mut goal: Option<Position> = None;
        let mut path_count = 0usize;

        for (y, row) in layout.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let cell = CellType::from_char(ch);
                match cell {
                    CellType::Start => {
                        if let Some(first) = start {
                            return Err(MalformedMaze::DuplicateStart { first, second: position });
                        }
                        start = Some(position);
                    }
                    CellType::Goal => {
                        if let Some(first) = goal {
                            return Err(MalformedMaze::DuplicateGoal { first, second: position });
                        }
                        goal = Some(position);
                    }
                    CellType::Path => path_count += 1,
                    CellType::Wall => {}
                }
                cells[y * width + x] = Some(cell);
            }
        }

        let start = start.ok_or(MalformedMaze::MissingStart)?;
        let goal = goal.ok_or(MalformedMaze::MissingGoal)?;

        Ok(Self {
            layout,
            cells,
            grid,
            start,
            goal,
            path_count,
            distances: OnceLock::new(),
            history: OnceLock::new(),
        })
    }

    /// Parses a maze from text, one row per line. Empty lines are skipped.
    pub fn parse(text: &str) -> Result<Self, MalformedMaze> {
        Self::new(text.lines().filter(|line| !line.is_empty()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MazeLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| MazeLoadError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&text)
            .map_err(|source| MazeLoadError::Malformed { path: path.to_path_buf(), source })
    }

    pub fn layout(&self) -> &[String] {
        &self.layout
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> GridIndex {
        self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Number of plain floor cells (excludes start and goal).
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Number of cells that are not walls: floor, start and goal.
    pub fn walkable_count(&self) -> usize {
        self.path_count + 2
    }

    /// Returns `None` for positions outside the grid or past the end of a short row.
    pub fn cell_type(&self, position: Position) -> Option<CellType> {
        self.grid.idx_of(position).and_then(|idx| self.cells[idx])
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.cell_type(position).is_some_and(CellType::is_walkable)
    }

    /// Start and floor cells in row-major order. These are the cells a trial grades.
    pub fn evaluation_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| match cell {
            Some(CellType::Start | CellType::Path) => Some(self.grid.position_of(idx)),
            _ => None,
        })
    }

    pub fn info(&self) -> MazeInfo {
        let mut edges = 0usize;
        for (idx, cell) in self.cells.iter().enumerate() {
            if !cell.is_some_and(CellType::is_walkable) {
                continue;
            }
            let position = self.grid.position_of(idx);
            if self.is_walkable(position.step(Direction::Right)) {
                edges += 1;
            }
            if self.is_walkable(position.step(Direction::Down)) {
                edges += 1;
            }
        }

        MazeInfo {
            total_cells: self.grid.len(),
            passable_cells: self.walkable_count(),
            edges,
        }
    }

    pub fn distance_field(&self) -> &DistanceField {
        self.distances.get_or_init(|| DistanceField::compute(self))
    }

    pub fn canonical_history(&self) -> &CanonicalHistory {
        self.history.get_or_init(|| CanonicalHistory::compute(self))
    }

    /// Steps to the goal, or `None` when the goal cannot be reached from `position`.
    pub fn distance_to_goal(&self, position: Position) -> Option<u32> {
        self.distance_field().get(position)
    }

    /// Every locally optimal move from `position`, in the order up, down, left, right.
    ///
    /// Empty for the goal itself and for cells that cannot reach the goal.
    pub fn directions_to_goal(&self, position: Position) -> SmallVec<[Direction; 4]> {
        self.distance_field().directions_toward_goal(position)
    }

    /// Canonical route from the start to `position`, both ends included.
    ///
    /// Positions the start cannot reach fall back to `[position]`.
    pub fn path_from_start(&self, position: Position) -> Vec<Position> {
        self.canonical_history().path_to(position).unwrap_or_else(|| vec![position])
    }
}
