//! The fixed-size tile store

use crate::{Direction, Tile};

/// Coordinates of a tile inside a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub x: u32,
    pub y: u32,
}

impl TilePos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An N×N square of tiles stored row-major (`index = x + y * N`).
///
/// Every coordinate in `[0, N)²` holds exactly one tile, created blank by
/// [`Grid::new`] and never replaced. Lookups outside the grid return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of `size * size` blank tiles.
    pub fn new(size: u32) -> Self {
        let count = (size as usize) * (size as usize);
        let tiles = (0..count)
            .map(|i| Tile::new(i as u32 % size, i as u32 / size))
            .collect();
        Self { size, tiles }
    }

    /// Side length of the grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row-major index of `(x, y)`, or `None` off the grid.
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let size = self.size as i64;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some((x + y * size) as usize)
    }

    /// Position of the tile stored at row-major `index`.
    pub fn pos_of(&self, index: usize) -> Option<TilePos> {
        if index >= self.tiles.len() {
            return None;
        }
        let size = self.size as usize;
        Some(TilePos::new((index % size) as u32, (index / size) as u32))
    }

    /// Get the tile at a signed coordinate.
    pub fn tile_at(&self, x: i64, y: i64) -> Option<&Tile> {
        self.index_of(x, y).map(|idx| &self.tiles[idx])
    }

    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        self.tile_at(pos.x as i64, pos.y as i64)
    }

    pub fn tile_mut(&mut self, pos: TilePos) -> Option<&mut Tile> {
        let idx = self.index_of(pos.x as i64, pos.y as i64)?;
        self.tiles.get_mut(idx)
    }

    /// Neighbour positions in `[N, E, S, W]` order; off-grid slots are `None`.
    pub fn neighbour_positions(&self, pos: TilePos) -> [Option<TilePos>; 4] {
        Direction::ALL.map(|dir| {
            let (dx, dy) = dir.offset();
            let x = pos.x as i64 + dx as i64;
            let y = pos.y as i64 + dy as i64;
            self.index_of(x, y).map(|_| TilePos::new(x as u32, y as u32))
        })
    }

    /// Neighbour tiles in `[N, E, S, W]` order; off-grid slots are `None`.
    pub fn neighbours(&self, pos: TilePos) -> [Option<&Tile>; 4] {
        self.neighbour_positions(pos)
            .map(|slot| slot.and_then(|p| self.tile(p)))
    }

    /// The slot `b` occupies in `a`'s neighbour array, if they are adjacent.
    pub fn direction_to(&self, a: TilePos, b: TilePos) -> Option<Direction> {
        self.neighbour_positions(a)
            .iter()
            .position(|slot| *slot == Some(b))
            .map(Direction::from_index)
    }

    pub fn are_neighbours(&self, a: TilePos, b: TilePos) -> bool {
        self.direction_to(a, b).is_some()
    }

    /// All tiles in creation (row-major) order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// All positions in creation (row-major) order.
    pub fn positions(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.tiles.iter().map(|t| TilePos::new(t.x(), t.y()))
    }

    /// Positions of every tile still blank.
    pub fn blank_tiles(&self) -> Vec<TilePos> {
        self.tiles
            .iter()
            .filter(|t| t.is_blank())
            .map(|t| TilePos::new(t.x(), t.y()))
            .collect()
    }

    /// The tile at row-major index `floor(N² / 2)`.
    pub fn centre(&self) -> Option<TilePos> {
        self.pos_of(self.tiles.len() / 2)
    }
}
