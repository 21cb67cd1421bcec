use super::{Direction, Square};
use derive_more::{DebugCustom, Display, Error};
use std::cmp::Ordering::*;
use std::{iter::successors, str::FromStr};

/// A request to slide the piece on one [`Square`] to another.
///
/// A move is only a pair of squares, whether it is legal depends on the board.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Direction`] of a strictly horizontal or vertical move.
    ///
    /// Diagonal and null moves have no direction.
    pub fn direction(&self) -> Option<Direction> {
        let (a, b) = (self.whence(), self.whither());
        match (a.row().cmp(&b.row()), a.col().cmp(&b.col())) {
            (Greater, Equal) => Some(Direction::North),
            (Less, Equal) => Some(Direction::South),
            (Equal, Less) => Some(Direction::East),
            (Equal, Greater) => Some(Direction::West),
            _ => None,
        }
    }

    /// The squares strictly between the source and the destination.
    ///
    /// Empty unless the move has a [`Direction`].
    pub fn between(self) -> impl Iterator<Item = Square> {
        let direction = self.direction();
        let step = move |s: &Square| direction.and_then(|d| s.neighbor(d));
        successors(step(&self.whence()), step).take_while(move |&s| s != self.whither())
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move, expected a pair of squares such as `d1d2`")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match (s.len(), s.get(..2), s.get(2..)) {
            (4, Some(whence), Some(whither)) => Ok(Move(
                whence.parse().map_err(|_| ParseMoveError)?,
                whither.parse().map_err(|_| ParseMoveError)?,
            )),

            _ => Err(ParseMoveError),
        }
    }
}
