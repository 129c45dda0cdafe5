//! Board coordinates.
//!
//! Externally a square is written as a column letter `a`..`i` followed by a row
//! number `1`..`10` (`"e1"`, `"i10"`). Internally both axes are 0-indexed.

use crate::constants::{FILES, RANKS};
use derive_more::Display;
use std::fmt;
use std::str::FromStr;

/// Defaults to `a1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    col: u8,
    row: u8,
}

/// Where a piece currently is. `Captured` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    On(Square),
    Captured,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseSquareError {
    #[display("empty coordinate")]
    Empty,
    #[display("column {:?} is not one of a-i", _0)]
    BadColumn(char),
    #[display("row {:?} is not a number between 1 and 10", _0)]
    BadRow(String),
}

impl std::error::Error for ParseSquareError {}

impl Square {
    /// Creates a square from 0-indexed column and row.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if (col as usize) < FILES && (row as usize) < RANKS {
            Some(Self { col, row })
        } else {
            None
        }
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// Column letter, `'a'`..`'i'`.
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// 1-indexed row as written in coordinates.
    pub fn rank_number(self) -> u8 {
        self.row + 1
    }

    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as u8, row as u8)
    }

    /// Column and row displacement from `self` to `other`.
    pub fn delta(self, other: Square) -> (i8, i8) {
        (other.col as i8 - self.col as i8, other.row as i8 - self.row as i8)
    }

    /// Squares strictly between `self` and `other` on a shared row or column.
    /// Empty when the two are not aligned or adjacent.
    pub fn between(self, other: Square) -> impl Iterator<Item = Square> {
        let (dc, dr) = self.delta(other);
        let aligned = (dc == 0) != (dr == 0);
        let steps = if aligned { dc.abs().max(dr.abs()) } else { 0 };
        let (sc, sr) = (dc.signum(), dr.signum());
        (1..steps).filter_map(move |i| self.offset(sc * i, sr * i))
    }

    /// All 90 squares, column by column.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..FILES as u8).flat_map(|col| (0..RANKS as u8).map(move |row| Square { col, row }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParseSquareError::Empty)?;
        if !('a'..='i').contains(&file) {
            return Err(ParseSquareError::BadColumn(file));
        }
        let rest = chars.as_str();
        let bad_row = || ParseSquareError::BadRow(rest.to_string());
        // No signs, no leading zeros.
        if rest.is_empty() || rest.starts_with('0') || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad_row());
        }
        let rank: u8 = rest.parse().map_err(|_| bad_row())?;
        if !(1..=RANKS as u8).contains(&rank) {
            return Err(bad_row());
        }
        Ok(Square { col: file as u8 - b'a', row: rank - 1 })
    }
}

impl Position {
    pub fn square(self) -> Option<Square> {
        match self {
            Position::On(sq) => Some(sq),
            Position::Captured => None,
        }
    }

    pub fn is_captured(self) -> bool {
        self == Position::Captured
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::On(sq) => write!(f, "{sq}"),
            Position::Captured => f.write_str("captured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corner_squares() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!((a1.col(), a1.row()), (0, 0));
        let i10: Square = "i10".parse().unwrap();
        assert_eq!((i10.col(), i10.row()), (8, 9));
        assert_eq!(i10.to_string(), "i10");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert_eq!("".parse::<Square>(), Err(ParseSquareError::Empty));
        assert_eq!("j1".parse::<Square>(), Err(ParseSquareError::BadColumn('j')));
        assert_eq!("A1".parse::<Square>(), Err(ParseSquareError::BadColumn('A')));
        assert!("a0".parse::<Square>().is_err());
        assert!("a11".parse::<Square>().is_err());
        assert!("a01".parse::<Square>().is_err());
        assert!("a+1".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e 1".parse::<Square>().is_err());
    }

    #[test]
    fn between_is_exclusive_and_aligned_only() {
        let a1: Square = "a1".parse().unwrap();
        let a5: Square = "a5".parse().unwrap();
        let got: Vec<String> = a1.between(a5).map(|s| s.to_string()).collect();
        assert_eq!(got, ["a2", "a3", "a4"]);
        let back: Vec<String> = a5.between(a1).map(|s| s.to_string()).collect();
        assert_eq!(back, ["a4", "a3", "a2"]);

        let c3: Square = "c3".parse().unwrap();
        assert_eq!(a1.between(c3).count(), 0);
        assert_eq!(a1.between(a1).count(), 0);
    }

    #[test]
    fn all_squares_are_unique() {
        let mut all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 90);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 90);
    }
}
