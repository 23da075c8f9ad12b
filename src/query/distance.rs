// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::model::{Direction, GridIndex, Maze, Position};

const UNREACHED: u32 = u32::MAX;

/// Breadth-first step counts from the goal over walkable cells.
///
/// Cells the goal cannot reach (walls, absent columns, isolated pockets) have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    grid: GridIndex,
    dist: Vec<u32>,
}

impl DistanceField {
    pub fn compute(maze: &Maze) -> Self {
        let grid = maze.grid();
        let mut dist = vec![UNREACHED; grid.len()];
        let mut queue: VecDeque<Position> = VecDeque::new();

        let goal = maze.goal();
        if let Some(goal_idx) = grid.idx_of(goal) {
            dist[goal_idx] = 0;
            queue.push_back(goal);
        }

        while let Some(current) = queue.pop_front() {
            let Some(current_idx) = grid.idx_of(current) else {
                continue;
            };
            let next_distance = dist[current_idx].saturating_add(1);

            for direction in Direction::ALL {
                let next = current.step(direction);
                if !maze.is_walkable(next) {
                    continue;
                }
                let Some(next_idx) = grid.idx_of(next) else {
                    continue;
                };
                if dist[next_idx] != UNREACHED {
                    continue;
                }
                dist[next_idx] = next_distance;
                queue.push_back(next);
            }
        }

        let field = Self { grid, dist };
        tracing::debug!(reached = field.len(), goal = %goal, "computed goal distance field");
        field
    }

    pub fn get(&self, position: Position) -> Option<u32> {
        let idx = self.grid.idx_of(position)?;
        match self.dist[idx] {
            UNREACHED => None,
            distance => Some(distance),
        }
    }

    /// Number of cells with a recorded distance (the goal included).
    pub fn len(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHED).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|(_, d)| **d != UNREACHED)
            .map(|(idx, d)| (self.grid.position_of(idx), *d))
    }

    /// Moves from `position` onto a neighbor strictly closer to the goal.
    ///
    /// Several moves are returned when neighbors tie; the order is always up, down, left,
    /// right. A position without a recorded distance yields no moves, and neither does the
    /// goal itself.
    pub fn directions_toward_goal(&self, position: Position) -> SmallVec<[Direction; 4]> {
        let mut out = SmallVec::new();
        let Some(distance) = self.get(position) else {
            return out;
        };

        for direction in Direction::ALL {
            if let Some(next) = self.get(position.step(direction)) {
                if next < distance {
                    out.push(direction);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::model::{Direction, Maze, Position};

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[fixture]
    fn pillar_maze() -> Maze {
        Maze::new(["#####", "#S  #", "# # #", "#  G#", "#####"]).expect("maze")
    }

    #[fixture]
    fn open_maze() -> Maze {
        Maze::new(["#####", "#S  #", "#   #", "#  G#", "#####"]).expect("maze")
    }

    #[rstest]
    fn records_bfs_distances_from_goal(pillar_maze: Maze) {
        let field = pillar_maze.distance_field();

        assert_eq!(field.get(p(3, 3)), Some(0));
        assert_eq!(field.get(p(1, 1)), Some(4));
        assert_eq!(field.get(p(2, 1)), Some(3));
        assert_eq!(field.get(p(3, 1)), Some(2));
        assert_eq!(field.get(p(1, 2)), Some(3));
        assert_eq!(field.get(p(3, 2)), Some(1));
        assert_eq!(field.get(p(1, 3)), Some(2));
        assert_eq!(field.get(p(2, 3)), Some(1));
        assert_eq!(field.get(p(2, 2)), None);
        assert_eq!(field.get(p(0, 0)), None);
        assert_eq!(field.len(), 8);
    }

    #[rstest]
    fn every_distance_is_one_more_than_its_best_neighbor(open_maze: Maze) {
        let field = open_maze.distance_field();
        for (position, distance) in field.iter() {
            if position == open_maze.goal() {
                assert_eq!(distance, 0);
                continue;
            }
            let best = Direction::ALL
                .into_iter()
                .filter_map(|d| field.get(position.step(d)))
                .min()
                .expect("reachable cell has a reachable neighbor");
            assert_eq!(distance, best + 1, "at {position}");
        }
    }

    #[rstest]
    #[case(p(1, 1), &[Direction::Down, Direction::Right])]
    #[case(p(2, 1), &[Direction::Right])]
    #[case(p(3, 1), &[Direction::Down])]
    #[case(p(1, 2), &[Direction::Down])]
    #[case(p(3, 2), &[Direction::Down])]
    #[case(p(1, 3), &[Direction::Right])]
    #[case(p(2, 3), &[Direction::Right])]
    #[case(p(3, 3), &[])]
    fn directions_point_at_strictly_closer_neighbors(
        pillar_maze: Maze,
        #[case] position: Position,
        #[case] expected: &[Direction],
    ) {
        assert_eq!(pillar_maze.directions_to_goal(position).as_slice(), expected);
    }

    #[rstest]
    fn equidistant_neighbors_are_all_reported_in_fixed_order(open_maze: Maze) {
        assert_eq!(
            open_maze.directions_to_goal(p(2, 2)).as_slice(),
            &[Direction::Down, Direction::Right]
        );
        assert_eq!(
            open_maze.directions_to_goal(p(1, 2)).as_slice(),
            &[Direction::Down, Direction::Right]
        );
        assert_eq!(
            open_maze.directions_to_goal(p(1, 1)).as_slice(),
            &[Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn unreachable_and_wall_cells_have_no_directions() {
        let maze = Maze::new(["#######", "#S# # #", "###G###"]).expect("maze");
        // (5,1) is floor but walled off from the goal.
        assert_eq!(maze.distance_field().get(p(3, 1)), Some(1));
        assert!(maze.distance_field().get(p(5, 1)).is_none());
        assert_eq!(maze.distance_field().len(), 2);
        assert!(!maze.distance_field().is_empty());
        assert!(maze.directions_to_goal(p(5, 1)).is_empty());
        assert!(maze.directions_to_goal(p(0, 0)).is_empty());
        assert!(maze.directions_to_goal(p(-3, 9)).is_empty());
        assert!(maze.directions_to_goal(maze.start()).is_empty());
    }

    #[test]
    fn field_is_computed_once_per_maze() {
        let maze = Maze::new(["S G"]).expect("maze");
        let first = maze.distance_field() as *const _;
        let second = maze.distance_field() as *const _;
        assert_eq!(first, second);
    }
}
