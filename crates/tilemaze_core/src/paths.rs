//! Connector sets and the tile connector table
//!
//! A tile's connectors are reported in the frame used by the connectivity
//! rules: for two tiles stacked vertically, the lower tile must list `South`
//! and the upper tile `North` for them to link (likewise `West`/`East` for a
//! horizontal pair). Rotating a tile by `r` quarter turns rotates every
//! connector clockwise by `r`.

use crate::{Direction, TileType};

/// A set of directions, stored as a 4-bit mask.
///
/// Iteration always yields directions in encoding order (N, E, S, W), so
/// "the first path" of a set is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PathSet(u8);

impl PathSet {
    pub const EMPTY: Self = PathSet(0);
    pub const ALL: Self = PathSet(0b1111);

    /// Build a set from a list of directions.
    pub fn from_directions(directions: &[Direction]) -> Self {
        directions.iter().copied().collect()
    }

    /// Raw bitmask, bit `d` set for direction `d`.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.index();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The lowest-encoded direction in the set.
    pub fn first(self) -> Option<Direction> {
        self.iter().next()
    }

    /// Directions in encoding order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Map every member to its opposite direction.
    pub fn inverted(self) -> Self {
        self.rotated(2)
    }

    /// Rotate every member clockwise by `quarter_turns`.
    pub fn rotated(self, quarter_turns: u8) -> Self {
        self.iter().map(|d| d.rotated(quarter_turns)).collect()
    }
}

impl FromIterator<Direction> for PathSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = PathSet::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// Connector mask of a tile type at rotation 0.
fn base_paths(kind: TileType) -> PathSet {
    use Direction::*;

    match kind {
        TileType::Blank => PathSet::EMPTY,
        TileType::DeadEnd => PathSet::from_directions(&[North]),
        TileType::Straight => PathSet::from_directions(&[North, South]),
        TileType::Bend => PathSet::from_directions(&[North, East]),
        TileType::Tee => PathSet::from_directions(&[North, East, South]),
        TileType::Cross => PathSet::ALL,
    }
}

/// The connectors a tile presents for a given type, shape and rotation.
///
/// Shape only selects a visual variant and never changes the result.
/// Rotation is taken modulo 4.
pub fn open_paths(kind: TileType, _shape: u8, rotation: u8) -> PathSet {
    base_paths(kind).rotated(rotation % 4)
}
