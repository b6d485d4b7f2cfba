//! **sokoboard-core** — board model for box-pushing puzzles (core types).
//!
//! This crate provides the foundational types used by the *sokoboard*
//! crates: grid positions and directions, tiles with their distance
//! annotations, and the jagged [`Board`] that owns them.

pub mod board;
pub mod geom;
pub mod obstacles;
pub mod tile;

pub use board::{Board, BoardError};
pub use geom::{Axis, Direction, Position, manhattan};
pub use obstacles::ObstacleSet;
pub use tile::{Category, Tile};
