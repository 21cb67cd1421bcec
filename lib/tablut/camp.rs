use derive_more::Display;

/// One of the four clusters of camp tiles.
///
/// Camps are numbered in the order they are first met scanning the layout row by row,
/// which on a symmetric board is north, west, east and then south.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Camp {
    #[display(fmt = "north")]
    North,
    #[display(fmt = "west")]
    West,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "south")]
    South,
}

impl Camp {
    /// All camps in discovery order.
    pub const ALL: [Camp; 4] = [Camp::North, Camp::West, Camp::East, Camp::South];

    /// The camp assigned to the `n`-th cluster discovered, if there is one.
    pub fn nth(n: usize) -> Option<Self> {
        Self::ALL.get(n).copied()
    }
}
