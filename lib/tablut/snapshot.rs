use super::{ParseSymbolError, Square, Symbol};
use derive_more::{Display, Error};
use std::{fmt, ops::Index, str::FromStr};

/// A comparable picture of the board, the [`Symbol`] of every tile row by row.
///
/// Snapshots only record the kind of each tile and the role of its occupant,
/// so two boards that differ only in the history of their attackers look the same.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Snapshot([[Symbol; Square::SIZE as usize]; Square::SIZE as usize]);

impl Snapshot {
    /// The starting layout of the Ashton ruleset.
    #[rustfmt::skip]
    pub const ASHTON: Snapshot = {
        use Symbol::{CampAttacker as A, CastleKing as K, Escape as E, Open as O, OpenDefender as D};

        Snapshot([
            [O, E, E, A, A, A, E, E, O],
            [E, O, O, O, A, O, O, O, E],
            [E, O, O, O, D, O, O, O, E],
            [A, O, O, O, D, O, O, O, A],
            [A, A, D, D, K, D, D, A, A],
            [A, O, O, O, D, O, O, O, A],
            [E, O, O, O, D, O, O, O, E],
            [E, O, O, O, A, O, O, O, E],
            [O, E, E, A, A, A, E, E, O],
        ])
    };

    /// Constructs a [`Snapshot`] from its rows.
    pub fn new(rows: [[Symbol; Square::SIZE as usize]; Square::SIZE as usize]) -> Self {
        Snapshot(rows)
    }

    /// An iterator over every [`Square`] and its [`Symbol`] in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Square, Symbol)> + '_ {
        Square::iter().map(|sq| (sq, self[sq]))
    }
}

impl Index<Square> for Snapshot {
    type Output = Symbol;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row() as usize][sq.col() as usize]
    }
}

/// Nine lines of nine symbols separated by spaces.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, symbol) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }

                fmt::Display::fmt(symbol, f)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Snapshot`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseSnapshotError {
    #[display(fmt = "expected 9 rows, found {_0}")]
    RowCount(#[error(not(source))] usize),

    #[display(fmt = "expected 9 symbols in row {}, found {}", "_0 + 1", _1)]
    ColumnCount(usize, usize),

    #[display(fmt = "invalid symbol at `{_0}`")]
    InvalidSymbol(Square, #[error(source)] ParseSymbolError),
}

impl FromStr for Snapshot {
    type Err = ParseSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<_> = s.lines().filter(|l| !l.trim().is_empty()).collect();

        if rows.len() != Square::SIZE as usize {
            return Err(ParseSnapshotError::RowCount(rows.len()));
        }

        let mut snapshot = [[Symbol::Open; Square::SIZE as usize]; Square::SIZE as usize];

        for (i, (line, row)) in rows.into_iter().zip(&mut snapshot).enumerate() {
            let symbols: Vec<_> = line.split_whitespace().collect();

            if symbols.len() != Square::SIZE as usize {
                return Err(ParseSnapshotError::ColumnCount(i, symbols.len()));
            }

            for (j, (s, symbol)) in symbols.into_iter().zip(row).enumerate() {
                *symbol = s
                    .parse()
                    .map_err(|e| ParseSnapshotError::InvalidSymbol(Square::new(i as _, j as _), e))?;
            }
        }

        Ok(Snapshot(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tablut::Role;
    use test_strategy::proptest;

    #[test]
    fn ashton_layout_has_one_king_eight_defenders_and_sixteen_attackers() {
        let count = |r| Snapshot::ASHTON.iter().filter(|(_, s)| s.role() == Some(r)).count();

        assert_eq!(count(Role::King), 1);
        assert_eq!(count(Role::Defender), 8);
        assert_eq!(count(Role::Attacker), 16);
        assert_eq!(Snapshot::ASHTON[Square::new(4, 4)], Symbol::CastleKing);
    }

    #[test]
    fn ashton_layout_is_symmetric_under_rotation() {
        for sq in Square::iter() {
            let rotated = Square::new(sq.col(), Square::SIZE - 1 - sq.row());
            assert_eq!(Snapshot::ASHTON[sq], Snapshot::ASHTON[rotated]);
        }
    }

    #[proptest]
    fn parsing_printed_snapshot_is_an_identity(s: Snapshot) {
        assert_eq!(s.to_string().parse(), Ok(s));
    }

    #[test]
    fn parsing_snapshot_ignores_blank_lines() {
        let s = format!("\n{}\n\n", Snapshot::ASHTON);
        assert_eq!(s.parse(), Ok(Snapshot::ASHTON));
    }

    #[proptest]
    fn parsing_snapshot_fails_if_a_row_is_missing(s: Snapshot) {
        let text = s.to_string();
        let truncated = text.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(
            truncated.parse::<Snapshot>(),
            Err(ParseSnapshotError::RowCount(8))
        );
    }

    #[proptest]
    fn parsing_snapshot_fails_if_a_symbol_is_missing(s: Snapshot) {
        let text = s.to_string();
        let truncated = text.replacen(' ', "", 1);
        assert_eq!(
            truncated.parse::<Snapshot>(),
            Err(ParseSnapshotError::ColumnCount(0, 8))
        );
    }

    #[test]
    fn parsing_snapshot_reports_the_invalid_square() {
        let text = Snapshot::ASHTON.to_string().replacen("CB", "XX", 1);
        assert_eq!(
            text.parse::<Snapshot>(),
            Err(ParseSnapshotError::InvalidSymbol(
                Square::new(0, 3),
                ParseSymbolError
            ))
        );
    }
}
