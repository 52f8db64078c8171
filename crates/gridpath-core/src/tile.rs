//! Map cell classification.

/// What a single map cell holds.
///
/// Only [`Tile::Wall`] blocks movement; `Start` and `Goal` are display
/// markers for the endpoint cells and are traversable like `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Whether this tile is impassable.
    #[inline]
    pub const fn blocks(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Decode from the integer map encoding (0 empty, 1 wall, 2 start,
    /// 3 goal). Unknown values decode as `Empty`.
    pub const fn from_value(v: i32) -> Self {
        match v {
            1 => Tile::Wall,
            2 => Tile::Start,
            3 => Tile::Goal,
            _ => Tile::Empty,
        }
    }

    /// The integer map encoding of this tile.
    pub const fn value(self) -> i32 {
        match self {
            Tile::Empty => 0,
            Tile::Wall => 1,
            Tile::Start => 2,
            Tile::Goal => 3,
        }
    }
}

impl From<i32> for Tile {
    fn from(v: i32) -> Self {
        Self::from_value(v)
    }
}

impl From<Tile> for i32 {
    fn from(t: Tile) -> Self {
        t.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_block() {
        assert!(Tile::Wall.blocks());
        assert!(!Tile::Empty.blocks());
        assert!(!Tile::Start.blocks());
        assert!(!Tile::Goal.blocks());
    }

    #[test]
    fn integer_encoding_round_trips() {
        for t in [Tile::Empty, Tile::Wall, Tile::Start, Tile::Goal] {
            assert_eq!(Tile::from_value(t.value()), t);
        }
        // Unknown values fall back to Empty.
        assert_eq!(Tile::from_value(7), Tile::Empty);
        assert_eq!(Tile::from_value(-1), Tile::Empty);
    }
}
