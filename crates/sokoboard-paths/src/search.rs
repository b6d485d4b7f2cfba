use std::collections::VecDeque;

use sokoboard_core::{Board, Position};

use crate::traits::Pather;

/// A position with its breadth-first distance, returned from traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Position,
    pub cost: u32,
}

const UNREACHED: u32 = u32::MAX;
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Reusable breadth-first search state for one board shape.
///
/// The jagged board is flattened row by row; `offsets[y]` is the flat index
/// of the first tile of row `y`. Distance and predecessor maps, the FIFO
/// frontier and the neighbour buffer are kept between queries so that
/// repeated searches do not reallocate.
#[derive(Debug, Clone, Default)]
pub struct SearchSpace {
    offsets: Vec<usize>,
    cells: Vec<Position>,
    dist: Vec<u32>,
    parent: Vec<usize>,
    // Whether `parent` belongs to the last traversal.
    traced: bool,
    queue: VecDeque<usize>,
    results: Vec<PathNode>,
    nbuf: Vec<Position>,
}

impl SearchSpace {
    /// Create a search space shaped like `board`.
    pub fn new(board: &Board) -> Self {
        let mut s = Self {
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        };
        s.reset_for(board);
        s
    }

    /// Whether the cached shape matches `board`'s rows.
    pub fn fits(&self, board: &Board) -> bool {
        self.offsets.len() == board.height() + 1
            && self
                .offsets
                .windows(2)
                .enumerate()
                .all(|(y, w)| board.row_width(y) == Some(w[1] - w[0]))
    }

    /// Reshape the caches for `board`. Existing allocations are reused when
    /// they are large enough.
    pub fn reset_for(&mut self, board: &Board) {
        self.offsets.clear();
        self.cells.clear();
        self.offsets.push(0);
        for y in 0..board.height() {
            let w = board.row_width(y).unwrap_or(0);
            self.cells.extend((0..w).map(|x| Position::new(x, y)));
            self.offsets.push(self.cells.len());
        }
        let len = self.cells.len();
        self.dist.clear();
        self.dist.resize(len, UNREACHED);
        self.parent.clear();
        self.parent.resize(len, NO_PARENT);
        self.traced = false;
        self.queue.clear();
        self.results.clear();
    }

    /// Reshape only if `board` differs from the cached shape.
    pub(crate) fn fit(&mut self, board: &Board) {
        if !self.fits(board) {
            self.reset_for(board);
        }
    }

    /// Number of tiles covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a position to a flat index. Returns `None` if off the board.
    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        let start = *self.offsets.get(p.y)?;
        let end = *self.offsets.get(p.y.checked_add(1)?)?;
        let i = start.checked_add(p.x)?;
        (i < end).then_some(i)
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Multi-source breadth-first search.
    ///
    /// Every valid source starts at distance 0; duplicate and off-board
    /// sources are skipped. A node's distance is fixed the first time it is
    /// discovered. If `goal` is given the search stops as soon as it is
    /// discovered and the return value tells whether that happened; without
    /// a goal the whole component is explored and `false` is returned.
    ///
    /// When `trace` is set, the node each position was discovered from is
    /// recorded for [`path_to`](Self::path_to).
    pub fn bfs<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        sources: &[Position],
        goal: Option<Position>,
        trace: bool,
    ) -> bool {
        self.dist.fill(UNREACHED);
        if trace {
            self.parent.fill(NO_PARENT);
        }
        self.traced = trace;
        self.results.clear();
        self.queue.clear();

        let goal_idx = goal.and_then(|g| self.idx(g));
        if goal.is_some() && goal_idx.is_none() {
            return false;
        }

        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.dist[si] != UNREACHED {
                continue;
            }
            self.dist[si] = 0;
            self.queue.push_back(si);
            self.results.push(PathNode { pos: src, cost: 0 });
            if goal_idx == Some(si) {
                return true;
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.queue.pop_front() else {
                break 'search false;
            };
            let next_dist = self.dist[ci] + 1;

            nbuf.clear();
            pather.neighbors(self.cells[ci], &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHED {
                    continue;
                }
                self.dist[ni] = next_dist;
                if trace {
                    self.parent[ni] = ci;
                }
                self.results.push(PathNode {
                    pos: np,
                    cost: next_dist,
                });
                if goal_idx == Some(ni) {
                    break 'search true;
                }
                self.queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        found
    }

    /// Distance of `p` found by the last traversal, or `None` if it was not
    /// reached or is off the board.
    pub fn distance_at(&self, p: Position) -> Option<u32> {
        let i = self.idx(p)?;
        let d = self.dist[i];
        (d != UNREACHED).then_some(d)
    }

    /// Nodes reached by the last traversal, in discovery order.
    pub fn reached(&self) -> &[PathNode] {
        &self.results
    }

    /// Walk predecessors from `goal` back to the source it was reached
    /// from. The result runs goal first, source last.
    ///
    /// Returns `None` if `goal` was not reached, or the last traversal did
    /// not record predecessors.
    pub fn path_to(&self, goal: Position) -> Option<Vec<Position>> {
        if !self.traced {
            return None;
        }
        let mut ci = self.idx(goal)?;
        let len = self.dist[ci];
        if len == UNREACHED {
            return None;
        }
        let mut path = Vec::with_capacity(len as usize + 1);
        loop {
            path.push(self.cells[ci]);
            if self.dist[ci] == 0 {
                break;
            }
            ci = self.parent[ci];
            if ci == NO_PARENT {
                return None;
            }
        }
        Some(path)
    }
}
