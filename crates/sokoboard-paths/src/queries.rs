//! Player reachability and shortest walks.

use sokoboard_core::{Board, ObstacleSet, Position};

use crate::SearchSpace;
use crate::pathers::Walk;

impl SearchSpace {
    /// Whether the player can walk from `source` to `target` on `board`
    /// without entering obstacle tiles or any of the dynamic `obstacles`.
    ///
    /// The source tile itself is not checked. A valid `source` reaches
    /// itself; an off-board `source` reaches nothing.
    pub fn reachable<O: ObstacleSet + ?Sized>(
        &mut self,
        board: &Board,
        source: Position,
        target: Position,
        obstacles: &O,
    ) -> bool {
        self.fit(board);
        let found = self.bfs(&Walk::new(board, obstacles), &[source], Some(target), false);
        log::trace!("reachable {source} -> {target}: {found}");
        found
    }

    /// Shortest walk from `source` to `target`, listed target first and
    /// source last.
    ///
    /// Returns `Some(vec![])` when `source == target` and `None` when no
    /// walk exists.
    pub fn find_path<O: ObstacleSet + ?Sized>(
        &mut self,
        board: &Board,
        source: Position,
        target: Position,
        obstacles: &O,
    ) -> Option<Vec<Position>> {
        if source == target {
            return Some(Vec::new());
        }
        self.fit(board);
        if !self.bfs(&Walk::new(board, obstacles), &[source], Some(target), true) {
            log::trace!("find_path {source} -> {target}: no path");
            return None;
        }
        let path = self.path_to(target);
        log::trace!(
            "find_path {source} -> {target}: {} steps",
            path.as_ref().map_or(0, |p| p.len() - 1)
        );
        path
    }
}
