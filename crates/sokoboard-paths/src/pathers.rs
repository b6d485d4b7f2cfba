//! Neighbour admissibility rules.
//!
//! [`Walk`] is the player's movement rule. [`AxisPush`] and
//! [`LookaheadPush`] approximate where a crate can be pushed and only look
//! at the static terrain.

use sokoboard_core::{Axis, Board, Direction, ObstacleSet, Position};

use crate::traits::Pather;

/// Player movement: a neighbour is admitted when it is on the board, its
/// terrain is walkable and it is not one of the dynamic obstacles.
pub struct Walk<'a, O: ObstacleSet + ?Sized> {
    board: &'a Board,
    obstacles: &'a O,
}

impl<'a, O: ObstacleSet + ?Sized> Walk<'a, O> {
    pub fn new(board: &'a Board, obstacles: &'a O) -> Self {
        Self { board, obstacles }
    }
}

impl<O: ObstacleSet + ?Sized> Pather for Walk<'_, O> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        self.board.neighbors(p, self.obstacles, buf);
    }
}

/// Crate start rule: both neighbours along an axis are admitted together,
/// and only if neither of them is an obstacle.
///
/// Cells off the board are not obstacles, so at an edge the pair is judged
/// by the one tile that exists and only that tile is admitted.
pub struct AxisPush<'a> {
    board: &'a Board,
}

impl<'a> AxisPush<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }
}

impl Pather for AxisPush<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for axis in Axis::ALL {
            let pair = axis.directions().map(|d| p.step(d));
            if pair
                .iter()
                .flatten()
                .any(|&n| self.board.is_obstacle(n))
            {
                continue;
            }
            buf.extend(pair.into_iter().flatten().filter(|&n| self.board.is_valid(n)));
        }
    }
}

/// Crate target rule: the neighbour in direction `d` is admitted only if
/// it and the tile two steps in direction `d` are both walkable terrain.
///
/// The second tile is where the pusher stands, so it has to exist.
pub struct LookaheadPush<'a> {
    board: &'a Board,
}

impl<'a> LookaheadPush<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    fn clear(&self, p: Position, d: Direction) -> Option<Position> {
        let next = self.board.neighbor(p, d)?;
        let beyond = self.board.neighbor(next, d)?;
        (self.board.is_tile_walkable(next) && self.board.is_tile_walkable(beyond)).then_some(next)
    }
}

impl Pather for LookaheadPush<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(Direction::ALL.into_iter().filter_map(|d| self.clear(p, d)));
    }
}
