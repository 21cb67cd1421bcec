use derive_more::{DebugCustom, Display, Error};
use std::{fmt, ops::Not, str::FromStr};

/// One of the four orthogonal directions on the board.
///
/// North points towards the first row.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    #[display(fmt = "north")]
    North,
    #[display(fmt = "south")]
    South,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "west")]
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The (row, column) step taken when moving in this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// A square on the 9x9 Tablut board, addressed by (row, column).
#[derive(DebugCustom, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Square({self})")]
pub struct Square(
    #[cfg_attr(test, strategy(0..Square::SIZE))] u8,
    #[cfg_attr(test, strategy(0..Square::SIZE))] u8,
);

impl Square {
    /// The number of rows, and of columns.
    pub const SIZE: u8 = 9;

    /// The number of squares on the board.
    pub const COUNT: usize = (Self::SIZE * Self::SIZE) as usize;

    /// Constructs [`Square`] from a pair of row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range `0..9`.
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < Self::SIZE && col < Self::SIZE, "square out of bounds");
        Square(row, col)
    }

    /// Constructs [`Square`] from a pair of row and column, if both are on the board.
    #[inline(always)]
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        (row < Self::SIZE && col < Self::SIZE).then_some(Square(row, col))
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.0
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.1
    }

    /// This square's position in row-major order.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize * Self::SIZE as usize + self.1 as usize
    }

    /// All squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::COUNT as u8).map(|i| Square(i / Self::SIZE, i % Self::SIZE))
    }

    /// The adjacent square in a [`Direction`], unless it falls off the board.
    #[inline(always)]
    pub fn neighbor(&self, d: Direction) -> Option<Self> {
        let (dr, dc) = d.delta();
        Square::try_new(
            self.0.checked_add_signed(dr)?,
            self.1.checked_add_signed(dc)?,
        )
    }

    /// The orthogonally adjacent squares that are on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL.into_iter().filter_map(move |d| self.neighbor(d))
    }
}

/// Columns are lettered `a` through `i` and rows numbered `1` through `9`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.1), self.0 + 1)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected a letter in `a..=i` followed by a digit in `1..=9`")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[c @ b'a'..=b'i', r @ b'1'..=b'9'] => Ok(Square(r - b'1', c - b'a')),
            _ => Err(ParseSquareError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_square_from_pair_of_row_and_column(sq: Square) {
        assert_eq!(Square::new(sq.row(), sq.col()), sq);
    }

    #[proptest]
    fn try_new_rejects_coordinates_off_the_board(
        #[strategy(Square::SIZE..)] row: u8,
        #[strategy(0..Square::SIZE)] col: u8,
    ) {
        assert_eq!(Square::try_new(row, col), None);
        assert_eq!(Square::try_new(col, row), None);
    }

    #[test]
    fn iter_enumerates_every_square_once_in_row_major_order() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), Square::COUNT);
        assert_eq!(squares.iter().collect::<HashSet<_>>().len(), Square::COUNT);

        for (i, sq) in squares.into_iter().enumerate() {
            assert_eq!(sq.index(), i);
        }
    }

    #[proptest]
    fn neighbor_is_one_step_away(sq: Square, d: Direction) {
        if let Some(n) = sq.neighbor(d) {
            let (dr, dc) = d.delta();
            assert_eq!(n.row() as i8 - sq.row() as i8, dr);
            assert_eq!(n.col() as i8 - sq.col() as i8, dc);
            assert_eq!(n.neighbor(!d), Some(sq));
        }
    }

    #[test]
    fn neighbor_falls_off_the_board_at_the_edges() {
        assert_eq!(Square::new(0, 4).neighbor(Direction::North), None);
        assert_eq!(Square::new(8, 4).neighbor(Direction::South), None);
        assert_eq!(Square::new(4, 8).neighbor(Direction::East), None);
        assert_eq!(Square::new(4, 0).neighbor(Direction::West), None);
        assert_eq!(Square::new(0, 0).neighbors().count(), 2);
        assert_eq!(Square::new(4, 4).neighbors().count(), 4);
    }

    #[proptest]
    fn direction_implements_not_operator(d: Direction) {
        assert_eq!(!!d, d);
        assert_ne!(!d, d);
    }

    #[test]
    fn square_is_printed_as_column_letter_and_row_number() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(0, 3).to_string(), "d1");
        assert_eq!(Square::new(8, 8).to_string(), "i9");
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_column_invalid(
        #[filter(!('a'..='i').contains(&#c))] c: char,
        #[strategy(1..=9u8)] r: u8,
    ) {
        assert_eq!(format!("{c}{r}").parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_row_invalid(
        #[strategy("[a-i]")] c: String,
        #[filter(!('1'..='9').contains(&#r))] r: char,
    ) {
        assert_eq!(format!("{c}{r}").parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError));
    }
}
