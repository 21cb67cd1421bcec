use derive_more::Display;
use std::ops::Not;

/// One of the two players of a game of Tablut.
///
/// White defends the king, Black attacks it.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Side {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn side_implements_not_operator(s: Side) {
        assert_eq!(!!s, s);
        assert_ne!(!s, s);
    }
}
