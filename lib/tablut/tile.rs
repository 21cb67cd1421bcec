use super::{Camp, Piece};
use derive_more::Display;

/// The kind of a tile, fixed for the lifetime of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum TileKind {
    #[display(fmt = "open")]
    Open,
    #[display(fmt = "{_0} camp")]
    Camp(Camp),
    #[display(fmt = "castle")]
    Castle,
    #[display(fmt = "escape")]
    Escape,
}

impl TileKind {
    /// Whether a tile of this kind accepts a [`Piece`].
    ///
    /// * Open tiles accept anyone.
    /// * The castle accepts no one.
    /// * Escapes only accept the king.
    /// * Camps only accept attackers that started there and never left.
    pub fn accepts(&self, piece: &Piece) -> bool {
        match self {
            TileKind::Open => true,
            TileKind::Castle => false,
            TileKind::Escape => *piece == Piece::King,
            TileKind::Camp(c) => piece.camp() == Some(*c),
        }
    }

    /// Whether a tile of this kind blocks pieces sliding over it, even when empty.
    pub fn is_obstacle(&self) -> bool {
        matches!(self, TileKind::Camp(_) | TileKind::Castle)
    }

    /// Whether a tile of this kind takes part in captures as if it were an enemy piece.
    pub fn is_hostile(&self) -> bool {
        matches!(self, TileKind::Camp(_) | TileKind::Castle)
    }
}

/// A tile on the board and the [`Piece`] on it, if any.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Tile {
    kind: TileKind,
    occupant: Option<Piece>,
}

impl Tile {
    /// An empty tile of a certain kind.
    pub fn new(kind: TileKind) -> Self {
        Tile {
            kind,
            occupant: None,
        }
    }

    /// This tile's [`TileKind`].
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// The [`Piece`] on this tile, if any.
    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    /// Whether there is a piece on this tile.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.occupant.take()
    }

    pub(crate) fn put(&mut self, piece: Piece) {
        debug_assert!(self.occupant.is_none());
        self.occupant = Some(piece);
    }
}
