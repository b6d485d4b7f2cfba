//! Breadth-first search on box-pushing boards.
//!
//! This crate answers the spatial questions a puzzle solver keeps asking
//! about a [`Board`](sokoboard_core::Board):
//!
//! - **Reachability**: can the player walk from one cell to another around
//!   the current crates ([`BoardPaths::reachable`])
//! - **Paths**: the shortest such walk ([`BoardPaths::find_path`])
//! - **Push-distance fields**: per-tile distances from the nearest crate
//!   start and to the nearest crate target, used as solver heuristics
//!   ([`BoardPaths::compute_distance_fields`])
//!
//! All of them run through one traversal in [`SearchSpace`], parameterised
//! by a [`Pather`] that decides which neighbours are admissible. Keep a
//! `SearchSpace` around to reuse its buffers across many queries.
//!
//! # Pathers
//!
//! | Pather | Admits a neighbour when |
//! |---|---|
//! | [`Walk`] | it is walkable and not a dynamic obstacle |
//! | [`AxisPush`] | neither tile of its axis pair is an obstacle |
//! | [`LookaheadPush`] | it and the tile beyond it are both walkable |

mod board_paths;
mod fields;
mod pathers;
mod queries;
mod search;
mod traits;

#[cfg(test)]
mod testutil;

pub use board_paths::BoardPaths;
pub use fields::FieldReport;
pub use pathers::{AxisPush, LookaheadPush, Walk};
pub use search::{PathNode, SearchSpace};
pub use traits::Pather;
