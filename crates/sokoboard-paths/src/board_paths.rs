use sokoboard_core::{Board, ObstacleSet, Position};

use crate::{FieldReport, SearchSpace};

/// Search queries available directly on a [`Board`].
///
/// Each call builds a fresh [`SearchSpace`]. Solvers issuing many queries
/// against one board should keep a `SearchSpace` and call its methods
/// instead.
pub trait BoardPaths {
    /// Whether the player can walk from `source` to `target` avoiding
    /// obstacle tiles and the dynamic `obstacles`.
    fn reachable<O: ObstacleSet + ?Sized>(
        &self,
        source: Position,
        target: Position,
        obstacles: &O,
    ) -> bool;

    /// Shortest walk from `source` to `target`, target first. Empty when
    /// `source == target`, `None` when `target` cannot be reached.
    fn find_path<O: ObstacleSet + ?Sized>(
        &self,
        source: Position,
        target: Position,
        obstacles: &O,
    ) -> Option<Vec<Position>>;

    /// Annotate every tile with its crate start and crate target push
    /// distances.
    fn compute_distance_fields(&mut self) -> FieldReport;
}

impl BoardPaths for Board {
    fn reachable<O: ObstacleSet + ?Sized>(
        &self,
        source: Position,
        target: Position,
        obstacles: &O,
    ) -> bool {
        SearchSpace::new(self).reachable(self, source, target, obstacles)
    }

    fn find_path<O: ObstacleSet + ?Sized>(
        &self,
        source: Position,
        target: Position,
        obstacles: &O,
    ) -> Option<Vec<Position>> {
        SearchSpace::new(self).find_path(self, source, target, obstacles)
    }

    fn compute_distance_fields(&mut self) -> FieldReport {
        SearchSpace::new(self).distance_fields(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use rand::{Rng, RngExt, SeedableRng};
    use sokoboard_core::{Category, Direction};

    use super::*;
    use crate::testutil::board;

    /// Reference distances by plain flood fill, independent of
    /// `SearchSpace`.
    fn flood(b: &Board, from: Position, crates: &HashSet<Position>) -> Vec<Option<usize>> {
        let index = |p: Position| b.positions().position(|q| q == p);
        let mut dist = vec![None; b.len()];
        let Some(start) = index(from) else {
            return dist;
        };
        dist[start] = Some(0);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            let d = dist[index(p).unwrap()].unwrap();
            for dir in Direction::ALL {
                let Some(n) = p.step(dir) else { continue };
                if !b.is_walkable(n, crates) {
                    continue;
                }
                let i = index(n).unwrap();
                if dist[i].is_none() {
                    dist[i] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    fn random_board(rng: &mut impl Rng) -> Board {
        let mut b = Board::new();
        let height = rng.random_range(1..7usize);
        for y in 0..height {
            let width = rng.random_range(0..8usize);
            b.add_row(width);
            for x in 0..width {
                if rng.random_range(0..4u32) == 0 {
                    b[Position::new(x, y)].set_category(Category::Obstacle);
                }
            }
        }
        b
    }

    #[test]
    fn queries_agree_with_flood_fill() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let b = random_board(&mut rng);
            let cells: Vec<Position> = b.positions().collect();
            if cells.is_empty() {
                continue;
            }
            let source = cells[rng.random_range(0..cells.len())];
            let crates: HashSet<Position> = cells
                .iter()
                .copied()
                .filter(|&p| p != source && rng.random_range(0..8u32) == 0)
                .collect();
            let reference = flood(&b, source, &crates);

            for (i, &target) in cells.iter().enumerate() {
                let path = b.find_path(source, target, &crates);
                if target == source {
                    assert_eq!(path, Some(vec![]));
                    assert!(b.reachable(source, target, &crates));
                    continue;
                }
                assert_eq!(b.reachable(source, target, &crates), reference[i].is_some());
                match (path, reference[i]) {
                    (Some(path), Some(d)) => {
                        assert_eq!(path.len() - 1, d);
                        assert_eq!(path[0], target);
                        assert_eq!(path[d], source);
                        for w in path.windows(2) {
                            assert!(w[0].is_adjacent(w[1]));
                        }
                        assert!(path[..d].iter().all(|&p| b.is_walkable(p, &crates)));
                    }
                    (None, None) => {}
                    (path, d) => panic!("{source} -> {target}: path {path:?}, distance {d:?}"),
                }
            }
        }
    }

    #[test]
    fn reachable_is_symmetric_without_obstacles() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let b = random_board(&mut rng);
            let open: Vec<Position> = b.positions().filter(|&p| b.is_tile_walkable(p)).collect();
            if open.len() < 2 {
                continue;
            }
            let s = open[rng.random_range(0..open.len())];
            let t = open[rng.random_range(0..open.len())];
            assert_eq!(
                b.reachable(s, t, &[] as &[Position]),
                b.reachable(t, s, &[] as &[Position])
            );
        }
    }

    #[test]
    fn board_level_distance_fields() {
        let mut b = board(&["#######", "#.....#", "#.....#", "#.....#", "#######"]);
        b.set_player_start(Position::new(1, 1));
        b.add_crate_start(Position::new(3, 2));
        b.add_crate_target(Position::new(3, 2));
        let report = b.compute_distance_fields();
        assert_eq!(b[Position::new(3, 2)].source_distance(), Some(0));
        assert_eq!(b[Position::new(3, 2)].target_distance(), Some(0));
        assert_eq!(
            report.source_reached,
            b.tiles().filter(|(_, t)| t.source_distance().is_some()).count()
        );
        assert_eq!(b[Position::new(1, 2)].source_distance(), Some(2));
        assert_eq!(b[Position::new(3, 1)].source_distance(), Some(1));
        assert_eq!(b[Position::new(1, 1)].source_distance(), Some(3));
        // Only the middle row leaves room for a pusher, and only one tile
        // either side of the target.
        assert_eq!(b[Position::new(2, 2)].target_distance(), Some(1));
        assert_eq!(b[Position::new(4, 2)].target_distance(), Some(1));
        assert_eq!(b[Position::new(1, 2)].target_distance(), None);
        assert_eq!(b[Position::new(3, 1)].target_distance(), None);
        assert_eq!(report.target_reached, 3);
    }

    #[test]
    fn hashed_and_listed_obstacles_agree() {
        let b = board(&[".....", ".....", "....."]);
        let list = vec![Position::new(2, 0), Position::new(2, 1)];
        let set: HashSet<Position> = list.iter().copied().collect();
        let from = Position::new(0, 0);
        let to = Position::new(4, 0);
        let a = b.find_path(from, to, &list).unwrap();
        let c = b.find_path(from, to, &set).unwrap();
        assert_eq!(a.len(), c.len());
        assert_eq!(a.len() - 1, 8);
    }
}
