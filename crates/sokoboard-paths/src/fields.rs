//! Push-distance fields.
//!
//! Two whole-board multi-source searches over the static terrain annotate
//! every tile: `source_distance` from the nearest crate start under the
//! [`AxisPush`] rule and `target_distance` from the nearest crate target
//! under the [`LookaheadPush`] rule. Dynamic obstacles play no part, so the
//! fields only need computing once per board.

use sokoboard_core::{Board, Tile};

use crate::SearchSpace;
use crate::pathers::{AxisPush, LookaheadPush};

/// How many tiles each distance field reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldReport {
    pub source_reached: usize,
    pub target_reached: usize,
}

impl SearchSpace {
    /// Compute both distance fields and write them into `board`'s tiles.
    ///
    /// Every annotation is cleared first; tiles a pass does not reach stay
    /// unreached.
    pub fn distance_fields(&mut self, board: &mut Board) -> FieldReport {
        self.fit(board);
        board.clear_distances();

        self.bfs(&AxisPush::new(board), board.crate_starts(), None, false);
        let source_reached = self.annotate(board, Tile::set_source_distance);

        self.bfs(&LookaheadPush::new(board), board.crate_targets(), None, false);
        let target_reached = self.annotate(board, Tile::set_target_distance);

        let report = FieldReport {
            source_reached,
            target_reached,
        };
        log::debug!(
            "distance fields: {} of {} tiles from {} crate starts, {} from {} crate targets",
            report.source_reached,
            board.len(),
            board.crate_starts().len(),
            report.target_reached,
            board.crate_targets().len()
        );
        report
    }

    fn annotate(&self, board: &mut Board, set: fn(&mut Tile, Option<u32>)) -> usize {
        let mut n = 0;
        for node in self.reached() {
            if let Some(tile) = board.get_mut(node.pos) {
                set(tile, Some(node.cost));
                n += 1;
            }
        }
        n
    }
}
