use super::{Board, Side, TileKind};
use derive_more::Display;

/// One of the possible outcomes of a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    /// The king reached an escape.
    #[display(fmt = "the king escaped, white wins")]
    Escape,

    /// The king was captured.
    #[display(fmt = "the king was captured, black wins")]
    Capture,

    /// A position was repeated.
    #[display(fmt = "draw by repetition")]
    Repetition,
}

impl Outcome {
    /// The winning side, if the outcome is decisive.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Escape => Some(Side::White),
            Outcome::Capture => Some(Side::Black),
            Outcome::Repetition => None,
        }
    }

    /// Whether the outcome is a draw.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }

    /// Whether the outcome is a decisive.
    pub fn is_decisive(&self) -> bool {
        !self.is_draw()
    }
}

impl Board {
    /// Whether the king stands on an escape.
    pub fn is_escaped(&self) -> bool {
        self.tiles()
            .any(|(_, t)| t.kind() == TileKind::Escape && t.is_occupied())
    }

    /// The [`Outcome`] of the game, if it has ended.
    ///
    /// A repetition is any earlier entry in the history matching the current position. Only
    /// the symbols on the board are compared, attackers that left their camp are not told
    /// apart from those that did not.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_escaped() {
            Some(Outcome::Escape)
        } else if self.king().is_none() {
            Some(Outcome::Capture)
        } else {
            let (current, past) = self.history().split_last()?;
            past.contains(current).then_some(Outcome::Repetition)
        }
    }
}
