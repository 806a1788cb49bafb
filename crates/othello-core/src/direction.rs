//! The eight ray directions used for capture checks.

/// A compass direction on the board. North is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
    NorthWest = 4,
    NorthEast = 5,
    SouthWest = 6,
    SouthEast = 7,
}

impl Direction {
    /// All directions in scan order. Capture sets are reported in this order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Return the `(row, col)` step for this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn all_deltas_distinct_and_unit() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (dr, dc) = a.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!((dr, dc) != (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }
}
