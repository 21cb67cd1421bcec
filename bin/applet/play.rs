use crate::build::{Build, Layout};
use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::tablut::{Board, Game, Move};
use std::io::{stdin, stdout, Read, Write};
use tracing::{instrument, warn};

/// Plays a game reading moves such as `d1d2` from the standard input.
///
/// Type `board` to print the current position.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    #[clap(flatten)]
    layout: Layout,

    /// List the legal moves before every turn.
    #[clap(long)]
    hints: bool,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::new(self.layout.clone().build()?);
        let mut io = Io::new(stdout().lock(), stdin().lock());
        self.session(&mut game, &mut io)
    }

    fn session<W: Write, R: Read>(
        &self,
        game: &mut Game<Board>,
        io: &mut Io<W, R>,
    ) -> Result<(), Anyhow> {
        while game.outcome().is_none() {
            io.send(format_args!("{} to move", game.turn()))?;

            if self.hints {
                let moves: Vec<_> = game.board().moves(game.turn()).map(|m| m.to_string()).collect();
                io.send(moves.join(" "))?;
            }

            io.flush()?;

            let line = match io.recv()? {
                Some(line) => line,
                None => break,
            };

            if line == "board" {
                io.send(game.board().snapshot())?;
                continue;
            }

            let m: Move = match line.parse() {
                Ok(m) => m,
                Err(e) => {
                    io.send(format_args!("error: {e}"))?;
                    continue;
                }
            };

            match game.execute(game.turn(), m) {
                Err(e) => {
                    warn!(%e);
                    io.send(format_args!("error: {e}"))?;
                }

                Ok(report) => {
                    for sq in report.captures.squares() {
                        io.send(format_args!("captured {sq}"))?;
                    }

                    if report.captures.is_king_captured() {
                        io.send("captured the king")?;
                    }

                    if let Some(o) = report.outcome {
                        io.send(o)?;
                    }
                }
            }
        }

        Ok(io.flush()?)
    }
}
