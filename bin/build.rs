use anyhow::{Context, Error as Anyhow};
use clap::Args;
use lib::tablut::{Board, Snapshot};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Trait for types that build other types.
pub trait Build {
    /// The type to be built.
    type Output;

    /// The reason why [`Build::Output`] could not be built.
    type Error;

    /// Build an instance of [`Build::Output`].
    fn build(self) -> Result<Self::Output, Self::Error>;
}

/// The layout of the board to play on.
#[derive(Debug, Default, Clone, Args)]
pub struct Layout {
    /// A file with nine rows of nine symbols, defaults to the Ashton layout.
    #[clap(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,
}

impl Build for Layout {
    type Output = Board;
    type Error = Anyhow;

    fn build(self) -> Result<Self::Output, Self::Error> {
        let path = match self.layout {
            None => return Ok(Board::default()),
            Some(path) => path,
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read layout from `{}`", path.display()))?;

        let snapshot: Snapshot = text
            .parse()
            .with_context(|| format!("failed to parse layout from `{}`", path.display()))?;

        debug!(path = %path.display(), "loaded layout");
        Board::unpack(&snapshot).context("invalid layout")
    }
}
