use super::{Camp, Captures, IllegalMove, Move, Outcome, Piece, Reason, Role, Side};
use super::{Snapshot, Square, Symbol, Tile, TileKind};
use derive_more::{Display, Error, From};
use std::ops::Index;
use tracing::{debug, instrument};

/// The reason why a layout cannot be turned into a [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalLayout {
    #[display(fmt = "the layout has no king")]
    MissingKing,
    #[display(fmt = "the layout has more than one king")]
    TooManyKings,
    #[display(fmt = "the layout has more than four camps")]
    TooManyCamps,
}

/// Attempted to remove a piece from an empty tile.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "tile `{_0}` is already empty")]
pub struct EmptyTile(#[error(not(source))] pub Square);

/// The reason why a piece cannot be placed on a tile.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlacementError {
    #[display(fmt = "tile `{_0}` is already occupied")]
    OccupiedTile(#[error(not(source))] Square),

    #[display(fmt = "{_1} tile `{_0}` does not accept a piece of role `{_2}`")]
    IllegalPlacement(Square, TileKind, Role),
}

/// The reason why playing a [`Move`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum StepError {
    #[display(fmt = "{_0}")]
    Illegal(IllegalMove),
    #[display(fmt = "{_0}")]
    Placement(PlacementError),
    #[display(fmt = "{_0}")]
    EmptyTile(EmptyTile),
}

/// What happened when a [`Move`] was played.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Report {
    /// The pieces captured by the move.
    pub captures: Captures,
    /// How the game ended, if it did.
    pub outcome: Option<Outcome>,
}

/// The Tablut board.
///
/// Holds the 9x9 grid of [`Tile`]s and the [`Snapshot`] of every position it went through,
/// starting with the layout it was unpacked from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    tiles: [Tile; Square::COUNT],
    history: Vec<Snapshot>,
}

impl Default for Board {
    fn default() -> Self {
        match Board::unpack(&Snapshot::ASHTON) {
            Ok(board) => board,
            Err(e) => unreachable!("{e}"),
        }
    }
}

impl Board {
    /// Builds a [`Board`] from a layout.
    ///
    /// Orthogonally adjacent camp tiles form a single [`Camp`]. Attackers that start outside
    /// of a camp are considered to have already left it.
    pub fn unpack(layout: &Snapshot) -> Result<Self, IllegalLayout> {
        let kinds = terrain(layout)?;
        let mut tiles = kinds.map(Tile::new);

        for (sq, symbol) in layout.iter() {
            let piece = match (symbol.role(), kinds[sq.index()]) {
                (None, _) => continue,
                (Some(Role::Defender), _) => Piece::Defender,
                (Some(Role::King), _) => Piece::King,
                (Some(Role::Attacker), TileKind::Camp(c)) => Piece::attacker(c),
                (Some(Role::Attacker), _) => Piece::Attacker {
                    camp: None,
                    exiled: true,
                },
            };

            tiles[sq.index()].put(piece);
        }

        match tiles.iter().filter(|t| t.occupant() == Some(Piece::King)).count() {
            0 => return Err(IllegalLayout::MissingKing),
            1 => {}
            _ => return Err(IllegalLayout::TooManyKings),
        }

        let mut board = Board {
            tiles,
            history: Vec::new(),
        };

        let snapshot = board.snapshot();
        board.history.push(snapshot);
        Ok(board)
    }

    /// The current [`Snapshot`] of the board.
    pub fn snapshot(&self) -> Snapshot {
        let mut rows = [[Symbol::Open; Square::SIZE as usize]; Square::SIZE as usize];

        for (sq, tile) in self.tiles() {
            rows[sq.row() as usize][sq.col() as usize] = (*tile).into();
        }

        Snapshot::new(rows)
    }

    /// Every [`Snapshot`] recorded so far, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// An iterator over every [`Square`] and its [`Tile`] in row-major order.
    pub fn tiles(&self) -> impl ExactSizeIterator<Item = (Square, &Tile)> + '_ {
        Square::iter().map(move |sq| (sq, &self[sq]))
    }

    /// The [`Tile`] at a [`Square`].
    #[inline(always)]
    pub fn tile(&self, sq: Square) -> &Tile {
        &self.tiles[sq.index()]
    }

    /// The [`Piece`] on a [`Square`], if any.
    #[inline(always)]
    pub fn piece(&self, sq: Square) -> Option<Piece> {
        self[sq].occupant()
    }

    /// An iterator over the pieces owned by a [`Side`].
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.tiles()
            .filter_map(|(sq, t)| t.occupant().map(|p| (sq, p)))
            .filter(move |(_, p)| p.side() == side)
    }

    /// How many pieces of a [`Role`] are on the board.
    pub fn count(&self, role: Role) -> usize {
        self.tiles()
            .filter(|(_, t)| t.occupant().map(|p| p.role()) == Some(role))
            .count()
    }

    /// Where the king stands, if it has not been captured.
    ///
    /// This is a full scan of the board.
    pub fn king(&self) -> Option<Square> {
        self.tiles()
            .find(|(_, t)| t.occupant() == Some(Piece::King))
            .map(|(sq, _)| sq)
    }

    /// Where the castle is, if the layout has one.
    pub fn castle(&self) -> Option<Square> {
        self.tiles()
            .find(|(_, t)| t.kind() == TileKind::Castle)
            .map(|(sq, _)| sq)
    }

    /// The squares that belong to a [`Camp`].
    pub fn camp(&self, c: Camp) -> impl Iterator<Item = Square> + '_ {
        self.tiles()
            .filter(move |(_, t)| t.kind() == TileKind::Camp(c))
            .map(|(sq, _)| sq)
    }

    /// Removes the [`Piece`] on a [`Square`].
    pub fn remove(&mut self, sq: Square) -> Result<Piece, EmptyTile> {
        self.tiles[sq.index()].take().ok_or(EmptyTile(sq))
    }

    /// Places a [`Piece`] on a [`Square`] if the tile accepts it.
    ///
    /// An attacker placed outside of a camp is marked as having left it.
    pub fn place(&mut self, sq: Square, mut piece: Piece) -> Result<(), PlacementError> {
        let tile = &mut self.tiles[sq.index()];

        if tile.is_occupied() {
            return Err(PlacementError::OccupiedTile(sq));
        }

        if !tile.kind().accepts(&piece) {
            return Err(PlacementError::IllegalPlacement(
                sq,
                tile.kind(),
                piece.role(),
            ));
        }

        if !matches!(tile.kind(), TileKind::Camp(_)) {
            piece.exile();
        }

        tile.put(piece);
        Ok(())
    }

    /// Plays a [`Move`] on behalf of a [`Side`].
    ///
    /// Unless the move is `trusted`, it is validated by [`Board::check`] first. Placement rules
    /// are enforced either way, and a move that fails leaves the board untouched.
    ///
    /// Once the piece lands, captures are resolved, the resulting [`Snapshot`] is appended
    /// to the history and the [`Outcome`] is evaluated.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn play(&mut self, side: Side, m: Move, trusted: bool) -> Result<Report, StepError> {
        if !trusted {
            self.check(side, m)?;
        } else if m.whence() == m.whither() {
            return Err(IllegalMove(m, Reason::NullMove).into());
        }

        let piece = self.remove(m.whence())?;
        if let Err(e) = self.place(m.whither(), piece) {
            self.tiles[m.whence().index()].put(piece);
            return Err(e.into());
        }

        let captures = self.capture(m.whither());
        let snapshot = self.snapshot();
        self.history.push(snapshot);

        let outcome = self.outcome();
        if let Some(o) = outcome {
            debug!(%side, %m, outcome = %o, "game over");
        }

        Ok(Report { captures, outcome })
    }
}

/// Retrieves the [`Tile`] at a given [`Square`].
impl Index<Square> for Board {
    type Output = Tile;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        self.tile(sq)
    }
}

/// Maps every square of a layout to its [`TileKind`], numbering camps as they are found.
fn terrain(layout: &Snapshot) -> Result<[TileKind; Square::COUNT], IllegalLayout> {
    let mut kinds = [TileKind::Open; Square::COUNT];
    let mut camps = 0;

    for (sq, symbol) in layout.iter() {
        if symbol.is_castle() {
            kinds[sq.index()] = TileKind::Castle;
        } else if symbol.is_escape() {
            kinds[sq.index()] = TileKind::Escape;
        } else if symbol.is_camp() && kinds[sq.index()] == TileKind::Open {
            let camp = TileKind::Camp(Camp::nth(camps).ok_or(IllegalLayout::TooManyCamps)?);
            camps += 1;

            kinds[sq.index()] = camp;
            let mut cluster = vec![sq];
            while let Some(s) = cluster.pop() {
                for n in s.neighbors() {
                    if layout[n].is_camp() && kinds[n.index()] == TileKind::Open {
                        kinds[n.index()] = camp;
                        cluster.push(n);
                    }
                }
            }
        }
    }

    Ok(kinds)
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{prelude::*, sample::Selector};

        (0..96usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut board = Board::default();
                let mut side = Side::White;

                for _ in 0..plies {
                    let moves: Vec<_> = board.moves(side).collect();
                    if moves.is_empty() {
                        break;
                    }

                    let m = selector.select(moves);

                    match board.play(side, m, true) {
                        Ok(Report { outcome: None, .. }) => side = !side,
                        Ok(_) => break,
                        Err(e) => panic!("legal move `{m}` failed: {e}"),
                    }
                }

                board
            })
            .no_shrink()
            .boxed()
    }
}
