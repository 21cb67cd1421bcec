use super::{Camp, Role, Side};

/// A Tablut piece.
///
/// Attackers remember the camp they started in, if any, and whether they have ever left it.
/// Once an attacker steps out of its camp it may never enter a camp again.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Piece {
    Defender,
    Attacker { camp: Option<Camp>, exiled: bool },
    King,
}

impl Piece {
    /// An attacker that has not yet left its starting camp.
    pub fn attacker(camp: Camp) -> Self {
        Piece::Attacker {
            camp: Some(camp),
            exiled: false,
        }
    }

    /// This piece's [`Role`].
    pub fn role(&self) -> Role {
        match self {
            Piece::Defender => Role::Defender,
            Piece::Attacker { .. } => Role::Attacker,
            Piece::King => Role::King,
        }
    }

    /// The [`Side`] that owns this piece.
    pub fn side(&self) -> Side {
        self.role().side()
    }

    /// The camp this piece may still move into, if any.
    pub fn camp(&self) -> Option<Camp> {
        match *self {
            Piece::Attacker {
                camp,
                exiled: false,
            } => camp,
            _ => None,
        }
    }

    /// Whether this piece is an attacker that has left its camp.
    pub fn is_exiled(&self) -> bool {
        matches!(self, Piece::Attacker { exiled: true, .. })
    }

    /// Marks an attacker as having left its camp, no-op for other pieces.
    pub(crate) fn exile(&mut self) {
        if let Piece::Attacker { exiled, .. } = self {
            *exiled = true;
        }
    }
}

impl From<Piece> for Role {
    fn from(p: Piece) -> Self {
        p.role()
    }
}
