use super::{Board, Move, Outcome, Report, Side, StepError};
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// Decides what happens when a [`Side`] plays a [`Move`].
#[cfg_attr(test, mockall::automock)]
pub trait Arbiter {
    /// Plays a [`Move`] on behalf of a [`Side`], see [`Board::play`].
    fn play(&mut self, side: Side, m: Move, trusted: bool) -> Result<Report, StepError>;
}

impl Arbiter for Board {
    fn play(&mut self, side: Side, m: Move, trusted: bool) -> Result<Report, StepError> {
        Board::play(self, side, m, trusted)
    }
}

/// The reason why a move was not accepted by the [`Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum GameError {
    #[display(fmt = "the game has ended, {_0}")]
    #[from(ignore)]
    GameHasEnded(#[error(not(source))] Outcome),

    #[display(fmt = "it is not {_0}'s turn")]
    #[from(ignore)]
    TurnOfTheOpponent(#[error(not(source))] Side),

    #[display(fmt = "{_0}")]
    InvalidMove(StepError),
}

/// A game of Tablut, alternating turns starting with white.
#[derive(Debug, Clone)]
pub struct Game<A = Board> {
    arbiter: A,
    turn: Side,
    outcome: Option<Outcome>,
}

impl<A: Default> Default for Game<A> {
    fn default() -> Self {
        Game::new(A::default())
    }
}

impl<A> Game<A> {
    /// Starts a new game with white to move.
    pub fn new(arbiter: A) -> Self {
        Game {
            arbiter,
            turn: Side::White,
            outcome: None,
        }
    }

    /// The side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The [`Outcome`] of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The board the game is played on.
    pub fn board(&self) -> &A {
        &self.arbiter
    }
}

impl<A: Arbiter> Game<A> {
    /// Plays a [`Move`] on behalf of a [`Side`] if it is its turn.
    ///
    /// A rejected move leaves the turn unchanged.
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(&mut self, side: Side, m: Move) -> Result<Report, GameError> {
        if let Some(o) = self.outcome {
            return Err(GameError::GameHasEnded(o));
        }

        if side != self.turn {
            return Err(GameError::TurnOfTheOpponent(side));
        }

        let report = self.arbiter.play(side, m, false)?;

        match report.outcome {
            Some(o) => {
                debug!(outcome = %o, "game has ended");
                self.outcome = Some(o);
            }

            None => self.turn = !side,
        }

        Ok(report)
    }

    /// Plays a [`Move`] on behalf of white.
    pub fn white_move(&mut self, m: Move) -> Result<Report, GameError> {
        self.execute(Side::White, m)
    }

    /// Plays a [`Move`] on behalf of black.
    pub fn black_move(&mut self, m: Move) -> Result<Report, GameError> {
        self.execute(Side::Black, m)
    }
}
