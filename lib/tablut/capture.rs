use super::{Board, Direction, Piece, Role, Side, Square};
use arrayvec::ArrayVec;
use tracing::debug;

/// The pieces removed from the board by a single move.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Captures {
    squares: ArrayVec<Square, 4>,
    king: bool,
}

impl Captures {
    /// Where ordinary pieces were captured.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The number of ordinary pieces captured.
    pub fn count(&self) -> usize {
        self.squares.len()
    }

    /// Whether the king was captured.
    pub fn is_king_captured(&self) -> bool {
        self.king
    }
}

impl Board {
    /// Removes the enemies trapped by the piece that just landed on a [`Square`].
    ///
    /// Only the four neighbors of the moving piece are considered, so a piece that moves in
    /// between two enemies is never captured. The king is handled once ordinary captures
    /// have been resolved, as its fate depends on where it stands relative to the castle.
    pub fn capture(&mut self, whither: Square) -> Captures {
        let mut captures = Captures::default();

        let side = match self.piece(whither) {
            Some(p) => p.side(),
            None => return captures,
        };

        let mut king = None;
        for d in Direction::ALL {
            let (sq, victim) = match whither.neighbor(d).and_then(|s| Some((s, self.piece(s)?))) {
                Some((s, p)) if p.side() != side => (s, p),
                _ => continue,
            };

            if victim == Piece::King {
                king = Some((sq, d));
            } else if self.is_anvil(sq.neighbor(d), side) && self.remove(sq).is_ok() {
                captures.squares.push(sq);
                debug!(%whither, captured = %sq, role = %victim.role(), "capture");
            }
        }

        if let Some((sq, d)) = king {
            if self.is_king_trapped(sq, d) && self.remove(sq).is_ok() {
                captures.king = true;
                debug!(%whither, captured = %sq, "king captured");
            }
        }

        captures
    }

    /// Whether a square completes a sandwich on behalf of a [`Side`].
    ///
    /// The castle and the camps are hostile to everyone, whether occupied or not, while the
    /// king never helps its own side capture.
    fn is_anvil(&self, sq: Option<Square>, side: Side) -> bool {
        match sq.map(|s| self.tile(s)) {
            None => false,
            Some(t) if t.kind().is_hostile() => true,
            Some(t) => matches!(t.occupant(), Some(p) if p.side() == side && p != Piece::King),
        }
    }

    /// Whether the king on a [`Square`], attacked from a [`Direction`], is trapped.
    fn is_king_trapped(&self, sq: Square, d: Direction) -> bool {
        let is_attacker = |s: Square| self.piece(s).map(|p| p.role()) == Some(Role::Attacker);

        match self.castle() {
            Some(c) if c == sq => c.neighbors().all(is_attacker),
            Some(c) if sq.neighbors().any(|n| n == c) => {
                sq.neighbors().filter(|&n| n != c).all(is_attacker)
            }
            _ => self.is_anvil(sq.neighbor(d), Side::Black),
        }
    }
}
