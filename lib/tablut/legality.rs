use super::{Board, Direction, Move, Piece, Side, Square, TileKind};
use derive_more::{Display, Error};
use std::iter::successors;

/// The rule a [`Move`] breaks, in the order rules are checked.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Reason {
    #[display(fmt = "the piece must move somewhere")]
    NullMove,
    #[display(fmt = "there is no piece of the moving side to move")]
    NotOwned,
    #[display(fmt = "pieces only move horizontally or vertically")]
    NotOrthogonal,
    #[display(fmt = "the destination is occupied")]
    Occupied,
    #[display(fmt = "no piece may enter the castle")]
    Castle,
    #[display(fmt = "only attackers that never left it may enter this camp")]
    Camp,
    #[display(fmt = "only the king may enter an escape")]
    Escape,
    #[display(fmt = "the way is blocked at `{_0}`")]
    Obstructed(Square),
}

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "move `{_0}` is illegal: {_1}")]
pub struct IllegalMove(pub Move, pub Reason);

impl Board {
    /// Checks whether a [`Side`] may play a [`Move`] without changing the board.
    pub fn check(&self, side: Side, m: Move) -> Result<(), IllegalMove> {
        let reject = |reason| Err(IllegalMove(m, reason));
        let (whence, whither) = (m.whence(), m.whither());

        if whence == whither {
            return reject(Reason::NullMove);
        }

        let piece = match self.piece(whence) {
            Some(p) if p.side() == side => p,
            _ => return reject(Reason::NotOwned),
        };

        if m.direction().is_none() {
            return reject(Reason::NotOrthogonal);
        }

        let target = self.tile(whither);
        if target.is_occupied() {
            return reject(Reason::Occupied);
        }

        match target.kind() {
            TileKind::Castle => return reject(Reason::Castle),
            TileKind::Camp(_) if !target.kind().accepts(&piece) => return reject(Reason::Camp),
            TileKind::Escape if piece != Piece::King => return reject(Reason::Escape),
            _ => {}
        }

        let blocked = |sq: &Square| {
            let tile = self.tile(*sq);
            tile.is_occupied() || tile.kind().is_obstacle()
        };

        match m.between().find(blocked) {
            Some(sq) => reject(Reason::Obstructed(sq)),
            None => Ok(()),
        }
    }

    /// Whether a [`Side`] may play a [`Move`].
    pub fn is_legal(&self, side: Side, m: Move) -> bool {
        self.check(side, m).is_ok()
    }

    /// An iterator over the legal moves of a [`Side`].
    pub fn moves(&self, side: Side) -> impl Iterator<Item = Move> + '_ {
        self.pieces(side)
            .flat_map(|(whence, _)| {
                Direction::ALL.into_iter().flat_map(move |d| {
                    successors(whence.neighbor(d), move |s| s.neighbor(d))
                        .map(move |whither| Move(whence, whither))
                })
            })
            .filter(move |&m| self.is_legal(side, m))
    }
}
