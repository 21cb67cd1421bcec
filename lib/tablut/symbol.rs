use super::{Role, Tile, TileKind};
use derive_more::{Display, Error};
use std::str::FromStr;

/// The two-letter code of a tile and its occupant in a [`Snapshot`][`super::Snapshot`].
///
/// The first letter names the tile: `t` open, `c` camp, `e` escape and `k` the castle, also
/// known as the konakis. It is lowercase if the tile is empty, in which case the second letter
/// is `e`, otherwise it is uppercase and the second letter names the piece: `W` defender,
/// `B` attacker and `K` the king.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Symbol {
    #[display(fmt = "te")]
    Open,
    #[display(fmt = "TW")]
    OpenDefender,
    #[display(fmt = "TB")]
    OpenAttacker,
    #[display(fmt = "TK")]
    OpenKing,
    #[display(fmt = "ce")]
    Camp,
    #[display(fmt = "CB")]
    CampAttacker,
    #[display(fmt = "ee")]
    Escape,
    #[display(fmt = "EK")]
    EscapeKing,
    #[display(fmt = "ke")]
    Castle,
    #[display(fmt = "KK")]
    CastleKing,
}

impl Symbol {
    /// The [`Role`] of the piece on the tile, if any.
    pub fn role(&self) -> Option<Role> {
        use Symbol::*;
        match self {
            OpenDefender => Some(Role::Defender),
            OpenAttacker | CampAttacker => Some(Role::Attacker),
            OpenKing | EscapeKing | CastleKing => Some(Role::King),
            Open | Camp | Escape | Castle => None,
        }
    }

    /// Whether the tile is a camp.
    pub fn is_camp(&self) -> bool {
        matches!(self, Symbol::Camp | Symbol::CampAttacker)
    }

    /// Whether the tile is an escape.
    pub fn is_escape(&self) -> bool {
        matches!(self, Symbol::Escape | Symbol::EscapeKing)
    }

    /// Whether the tile is the castle.
    pub fn is_castle(&self) -> bool {
        matches!(self, Symbol::Castle | Symbol::CastleKing)
    }
}

#[doc(hidden)]
impl From<Tile> for Symbol {
    fn from(t: Tile) -> Self {
        use Symbol::*;
        match (t.kind(), t.occupant().map(|p| p.role())) {
            (TileKind::Open, None) => Open,
            (TileKind::Open, Some(Role::Defender)) => OpenDefender,
            (TileKind::Open, Some(Role::Attacker)) => OpenAttacker,
            (TileKind::Open, Some(Role::King)) => OpenKing,
            (TileKind::Camp(_), None) => Camp,
            (TileKind::Camp(_), Some(Role::Attacker)) => CampAttacker,
            (TileKind::Escape, None) => Escape,
            (TileKind::Escape, Some(Role::King)) => EscapeKing,
            (TileKind::Castle, None) => Castle,
            (TileKind::Castle, Some(Role::King)) => CastleKing,
            (k, Some(r)) => unreachable!("{k} tile does not accept a piece of role `{r}`"),
        }
    }
}

/// The reason why parsing [`Symbol`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse tile symbol")]
pub struct ParseSymbolError;

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Symbol::*;
        match s {
            "te" => Ok(Open),
            "TW" => Ok(OpenDefender),
            "TB" => Ok(OpenAttacker),
            "TK" => Ok(OpenKing),
            "ce" => Ok(Camp),
            "CB" => Ok(CampAttacker),
            "ee" => Ok(Escape),
            "EK" => Ok(EscapeKing),
            "ke" => Ok(Castle),
            "KK" => Ok(CastleKing),
            _ => Err(ParseSymbolError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tablut::{Camp, Piece};
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_symbol_is_an_identity(s: Symbol) {
        assert_eq!(s.to_string().parse(), Ok(s));
    }

    #[proptest]
    fn parsing_symbol_fails_for_unknown_codes(
        #[strategy("[a-zA-Z]{2}")]
        #[filter(#s.parse::<Symbol>().is_err())]
        s: String,
    ) {
        assert_eq!(s.parse::<Symbol>(), Err(ParseSymbolError));
    }

    #[proptest]
    fn symbol_is_lowercase_if_and_only_if_the_tile_is_empty(s: Symbol) {
        assert_eq!(s.to_string() == s.to_string().to_lowercase(), s.role().is_none());
    }

    #[proptest]
    fn tile_is_of_exactly_one_special_kind_at_most(s: Symbol) {
        let kinds = [s.is_camp(), s.is_escape(), s.is_castle()];
        assert!(kinds.into_iter().filter(|&k| k).count() <= 1);
    }

    #[proptest]
    fn symbol_of_a_tile_keeps_its_kind_and_role(c: Camp) {
        let mut camp = Tile::new(TileKind::Camp(c));
        assert_eq!(Symbol::from(camp), Symbol::Camp);
        camp.put(Piece::attacker(c));
        assert_eq!(Symbol::from(camp), Symbol::CampAttacker);

        let mut castle = Tile::new(TileKind::Castle);
        assert_eq!(Symbol::from(castle), Symbol::Castle);
        castle.put(Piece::King);
        assert_eq!(Symbol::from(castle), Symbol::CastleKing);
    }
}
