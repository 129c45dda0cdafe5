//! Defines the representation of a move in the engine.

use crate::square::{ParseSquareError, Square};
use std::fmt;
use std::str::FromStr;

/// A single move request: the piece on `from` goes to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses two coordinate strings, e.g. `Move::parse("b3", "e3")`.
    pub fn parse(from: &str, to: &str) -> Result<Self, ParseSquareError> {
        Ok(Self::new(from.trim().parse()?, to.trim().parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Accepts `"b3 e3"` or the joined form `"b3e3"`.
impl FromStr for Move {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) => Move::parse(from, to),
            (Some(joined), None, None) => {
                // The second coordinate starts at the second letter.
                let split = joined
                    .char_indices()
                    .skip(1)
                    .find(|(_, c)| c.is_ascii_alphabetic())
                    .map(|(i, _)| i)
                    .ok_or_else(|| ParseSquareError::BadRow(joined.to_string()))?;
                Move::parse(&joined[..split], &joined[split..])
            }
            (None, _, _) => Err(ParseSquareError::Empty),
            _ => Err(ParseSquareError::BadRow(s.to_string())),
        }
    }
}
