//! Per-query dynamic obstacles.
//!
//! Dynamic obstacles model transient occupancy (usually the cells holding
//! crates right now). A handful of them is best kept in a slice and scanned
//! linearly; callers juggling many can pass a hashed set instead.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use crate::geom::Position;

/// A set of positions that block movement for the duration of one query.
pub trait ObstacleSet {
    fn contains_position(&self, pos: Position) -> bool;
}

impl ObstacleSet for [Position] {
    #[inline]
    fn contains_position(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

impl<const N: usize> ObstacleSet for [Position; N] {
    #[inline]
    fn contains_position(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

impl ObstacleSet for Vec<Position> {
    #[inline]
    fn contains_position(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

impl<S: BuildHasher> ObstacleSet for HashSet<Position, S> {
    #[inline]
    fn contains_position(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

impl ObstacleSet for BTreeSet<Position> {
    #[inline]
    fn contains_position(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

impl<T: ObstacleSet + ?Sized> ObstacleSet for &T {
    #[inline]
    fn contains_position(&self, pos: Position) -> bool {
        (**self).contains_position(pos)
    }
}
