//! Compass directions

/// A compass direction.
///
/// The discriminants are the encoding used throughout the crate, including
/// the slot order of neighbour arrays: `[North, East, South, West]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The numeric encoding (0=N, 1=E, 2=S, 3=W).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a direction, wrapping any value into `[0, 3]`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// The opposite compass direction, `(d + 2) mod 4`.
    pub fn inverted(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Rotate clockwise by a number of quarter turns.
    pub fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self.index() + quarter_turns as usize)
    }

    /// Grid offset of the neighbour in this direction. `y` grows southwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_is_opposite() {
        assert_eq!(Direction::North.inverted(), Direction::South);
        assert_eq!(Direction::East.inverted(), Direction::West);
        assert_eq!(Direction::South.inverted(), Direction::North);
        assert_eq!(Direction::West.inverted(), Direction::East);
    }

    #[test]
    fn test_rotated_wraps_clockwise() {
        assert_eq!(Direction::North.rotated(1), Direction::East);
        assert_eq!(Direction::West.rotated(1), Direction::North);
        assert_eq!(Direction::East.rotated(6), Direction::West);
        assert_eq!(Direction::South.rotated(4), Direction::South);
    }

    #[test]
    fn test_index_round_trips_through_encoding() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), *dir);
        }
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.inverted().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
