//! Tile records

use crate::{open_paths, PathSet};

/// The semantic category of a tile.
///
/// Every variant has an integer code: `-1` blank, `0` dead end, `1`/`2` the
/// simple passages, and `3`/`4` the junctions whose code equals the number of
/// converging paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// Not placed yet.
    #[default]
    Blank,
    /// A single connector; placed only as a last resort.
    DeadEnd,
    Straight,
    Bend,
    /// Three converging paths.
    Tee,
    /// Four converging paths.
    Cross,
}

impl TileType {
    /// The integer code of this type.
    pub fn code(self) -> i32 {
        match self {
            TileType::Blank => -1,
            TileType::DeadEnd => 0,
            TileType::Straight => 1,
            TileType::Bend => 2,
            TileType::Tee => 3,
            TileType::Cross => 4,
        }
    }

    /// Decode an integer code. Returns `None` outside `[-1, 4]`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(TileType::Blank),
            0 => Some(TileType::DeadEnd),
            1 => Some(TileType::Straight),
            2 => Some(TileType::Bend),
            3 => Some(TileType::Tee),
            4 => Some(TileType::Cross),
            _ => None,
        }
    }

    /// The junction sized for `count` converging paths, if one exists.
    pub fn junction(count: usize) -> Option<Self> {
        match count {
            3 => Some(TileType::Tee),
            4 => Some(TileType::Cross),
            _ => None,
        }
    }

    /// A simple passage from its code; `1` is straight, anything else bends.
    pub fn passage(code: i32) -> Self {
        if code == 1 {
            TileType::Straight
        } else {
            TileType::Bend
        }
    }

    pub fn is_blank(self) -> bool {
        self == TileType::Blank
    }
}

/// A single grid cell.
///
/// Coordinates are fixed at creation; only the variant (type, shape,
/// rotation) ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    x: u32,
    y: u32,
    kind: TileType,
    shape: u8,
    rotation: u8,
}

impl Tile {
    /// Create a blank tile at `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            kind: TileType::Blank,
            shape: 0,
            rotation: 0,
        }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// Semantic category
    pub fn kind(&self) -> TileType {
        self.kind
    }

    /// Visual variant selector, independent of connectivity
    pub fn shape(&self) -> u8 {
        self.shape
    }

    /// Quarter turns clockwise, in `[0, 3]`
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn is_blank(&self) -> bool {
        self.kind.is_blank()
    }

    /// Turn the tile in place, keeping type and shape. Stored modulo 4.
    pub fn set_rotation(&mut self, rotation: u8) {
        self.rotation = rotation % 4;
    }

    /// Replace the tile's variant. Rotation is stored modulo 4.
    pub fn set_variant(&mut self, kind: TileType, shape: u8, rotation: u8) {
        self.kind = kind;
        self.shape = shape;
        self.rotation = rotation % 4;
    }

    /// Connectors presented by the current variant.
    pub fn open_paths(&self) -> PathSet {
        open_paths(self.kind, self.shape, self.rotation)
    }
}
