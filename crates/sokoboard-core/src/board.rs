//! The [`Board`] type — a jagged grid of [`Tile`]s plus the named
//! positions of a puzzle.
//!
//! A board is built row by row with [`Board::add_row`], then the player and
//! crate positions are registered. After that the topology is frozen: only
//! the distance annotations on tiles change.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::geom::{Direction, Position};
use crate::obstacles::ObstacleSet;
use crate::tile::{Category, Tile};

/// A jagged 2D grid of tiles. Rows need not share a width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<Vec<Tile>>,
    player_start: Option<Position>,
    crate_starts: Vec<Position>,
    crate_targets: Vec<Position>,
}

impl Board {
    /// Create an empty board with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of `len` default (floor) tiles.
    pub fn add_row(&mut self, len: usize) {
        self.rows.push(vec![Tile::default(); len]);
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of row `row`, or `None` if there is no such row.
    #[inline]
    pub fn row_width(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `pos` addresses a tile: its row exists and its column is
    /// inside that row.
    #[inline]
    pub fn is_valid(&self, pos: Position) -> bool {
        self.rows.get(pos.y).is_some_and(|r| pos.x < r.len())
    }

    // -----------------------------------------------------------------------
    // Tile access
    // -----------------------------------------------------------------------

    /// The tile at `pos`, or `None` if `pos` is not valid.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.rows.get(pos.y)?.get(pos.x)
    }

    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.rows.get_mut(pos.y)?.get_mut(pos.x)
    }

    /// Checked access to the tile at `pos`.
    pub fn try_at(&self, pos: Position) -> Result<&Tile, BoardError> {
        let err = self.out_of_bounds(pos);
        self.get(pos).ok_or(err)
    }

    /// Checked mutable access to the tile at `pos`.
    pub fn try_at_mut(&mut self, pos: Position) -> Result<&mut Tile, BoardError> {
        let err = self.out_of_bounds(pos);
        self.get_mut(pos).ok_or(err)
    }

    /// The tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not valid. Passing an out-of-bounds position is a
    /// caller bug; use [`try_at`](Self::try_at) to handle it instead.
    #[track_caller]
    pub fn at(&self, pos: Position) -> &Tile {
        match self.try_at(pos) {
            Ok(tile) => tile,
            Err(e) => panic!("{e}"),
        }
    }

    /// Mutable form of [`at`](Self::at).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not valid.
    #[track_caller]
    pub fn at_mut(&mut self, pos: Position) -> &mut Tile {
        match self.try_at_mut(pos) {
            Ok(tile) => tile,
            Err(e) => panic!("{e}"),
        }
    }

    /// Set the category of the tile at `pos`.
    pub fn set_category(&mut self, pos: Position, category: Category) -> Result<(), BoardError> {
        self.try_at_mut(pos)?.set_category(category);
        Ok(())
    }

    fn out_of_bounds(&self, pos: Position) -> BoardError {
        BoardError::OutOfBounds {
            pos,
            height: self.height(),
            row_width: self.row_width(pos.y),
        }
    }

    /// Row-major iterator over every valid position.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, r)| (0..r.len()).map(move |x| Position::new(x, y)))
    }

    /// Row-major iterator over `(Position, &Tile)` pairs.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, r)| {
            r.iter()
                .enumerate()
                .map(move |(x, t)| (Position::new(x, y), t))
        })
    }

    /// Reset every distance annotation to unreached.
    pub fn clear_distances(&mut self) {
        for tile in self.rows.iter_mut().flatten() {
            tile.clear_distances();
        }
    }

    // -----------------------------------------------------------------------
    // Walkability and neighbours
    // -----------------------------------------------------------------------

    /// Whether the static terrain at `pos` is walkable. Invalid positions
    /// are not.
    #[inline]
    pub fn is_tile_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Tile::is_walkable)
    }

    /// Whether `pos` holds an obstacle tile. Positions off the board hold
    /// nothing and are not obstacles.
    #[inline]
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.get(pos)
            .is_some_and(|t| t.category() == Category::Obstacle)
    }

    /// Whether `pos` is a valid, statically walkable tile that is not one of
    /// the dynamic `obstacles`.
    #[inline]
    pub fn is_walkable<O: ObstacleSet + ?Sized>(&self, pos: Position, obstacles: &O) -> bool {
        self.is_tile_walkable(pos) && !obstacles.contains_position(pos)
    }

    /// The neighbour of `pos` in direction `dir`, if it is on the board.
    #[inline]
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        pos.step(dir).filter(|&n| self.is_valid(n))
    }

    /// Append the walkable cardinal neighbours of `current` to `buf`, in
    /// up, right, down, left order. The caller clears `buf`.
    pub fn neighbors<O: ObstacleSet + ?Sized>(
        &self,
        current: Position,
        obstacles: &O,
        buf: &mut Vec<Position>,
    ) {
        buf.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|d| current.step(d))
                .filter(|&n| self.is_walkable(n, obstacles)),
        );
    }

    // -----------------------------------------------------------------------
    // Named positions
    // -----------------------------------------------------------------------

    pub fn set_player_start(&mut self, pos: Position) {
        self.player_start = Some(pos);
    }

    /// Where the player begins, if it has been registered.
    pub fn player_start(&self) -> Option<Position> {
        self.player_start
    }

    pub fn add_crate_start(&mut self, pos: Position) {
        self.crate_starts.push(pos);
    }

    /// Crate start positions in registration order.
    pub fn crate_starts(&self) -> &[Position] {
        &self.crate_starts
    }

    pub fn add_crate_target(&mut self, pos: Position) {
        self.crate_targets.push(pos);
    }

    /// Crate target positions in registration order.
    pub fn crate_targets(&self) -> &[Position] {
        &self.crate_targets
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    #[track_caller]
    fn index(&self, pos: Position) -> &Tile {
        self.at(pos)
    }
}

impl IndexMut<Position> for Board {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut Tile {
        self.at_mut(pos)
    }
}

/// Errors reported by checked board access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The position is outside the board. `row_width` is `None` when the
    /// row itself does not exist.
    OutOfBounds {
        pos: Position,
        height: usize,
        row_width: Option<usize>,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                pos,
                height,
                row_width: Some(w),
            } => write!(
                f,
                "board: position {pos} out of bounds (height {height}, row {} width {w})",
                pos.y
            ),
            Self::OutOfBounds {
                pos,
                height,
                row_width: None,
            } => write!(f, "board: position {pos} out of bounds (height {height})"),
        }
    }
}

impl std::error::Error for BoardError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new();
        b.add_row(2);
        b.add_row(3);
        b[Position::new(1, 0)].set_category(Category::Obstacle);
        b.set_player_start(Position::new(0, 1));
        b.add_crate_start(Position::new(1, 1));
        b.add_crate_target(Position::new(2, 1));
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
        assert!(!back[Position::new(1, 0)].is_walkable());
    }
}
