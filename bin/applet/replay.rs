use crate::build::{Build, Layout};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::tablut::{Board, Game, Move};
use tracing::{info, instrument};

/// Replays a sequence of moves and prints where the game stands.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    #[clap(flatten)]
    layout: Layout,

    /// Also print the final position.
    #[clap(short, long)]
    snapshot: bool,

    /// The moves to play, starting with white, such as `e3c3 d1d2`.
    #[clap(required = true)]
    moves: Vec<Move>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = self.replay(self.layout.clone().build()?)?;

        if self.snapshot {
            println!("{}", game.board().snapshot());
        }

        match game.outcome() {
            Some(o) => println!("{o}"),
            None => println!("{} to move", game.turn()),
        }

        Ok(())
    }

    fn replay(&self, board: Board) -> Result<Game, Anyhow> {
        let mut game = Game::new(board);

        for (i, &m) in self.moves.iter().enumerate() {
            let side = game.turn();
            let report = game
                .execute(side, m)
                .with_context(|| format!("move #{} `{m}` was rejected", i + 1))?;

            info!(%side, %m, captures = report.captures.count());
        }

        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::tablut::{GameError, Outcome, Side};

    fn replay(moves: &[&str]) -> Result<Game, Anyhow> {
        Replay {
            layout: Layout::default(),
            snapshot: false,
            moves: moves.iter().map(|m| m.parse().unwrap()).collect(),
        }
        .replay(Board::default())
    }

    #[test]
    fn moves_alternate_starting_with_white() {
        let game = replay(&["e3c3", "d1d2"]).unwrap();
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn replay_stops_at_the_first_rejected_move() {
        let e = replay(&["e3c3", "e3c3"]).unwrap_err();
        assert!(e.to_string().contains("#2"));
        assert!(matches!(
            e.downcast_ref::<GameError>(),
            Some(GameError::InvalidMove(_))
        ));
    }

    #[test]
    fn replay_reports_the_outcome() {
        let game = replay(&["d5d4", "d1d2", "d4d5", "d2c2", "d5d4", "c2d2"]).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Repetition));
    }
}
