//! Core data structures for tilemaze
//!
//! This crate provides the fundamental types for representing a grid of
//! path-carrying tiles:
//! - `Direction` - Compass directions with the fixed N/E/S/W encoding
//! - `PathSet` - A set of directions at which a tile presents a connector
//! - `TileType` / `Tile` - The placed tile record and its connector table
//! - `Grid` - The fixed-size, row-major tile store
//!
//! It has no randomness and no I/O. Generation lives in `tilemaze_gen`.

mod direction;
mod grid;
mod paths;
mod tile;

pub use direction::Direction;
pub use grid::{Grid, TilePos};
pub use paths::{open_paths, PathSet};
pub use tile::{Tile, TileType};
