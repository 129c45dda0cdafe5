//! Building a starting position: the standard opening or an arbitrary one.

use crate::board::Board;
use crate::constants::{Color, PieceKind, RULE_TABLES, STANDARD_LAYOUT};
use crate::piece::Piece;
use crate::square::Square;
use derive_more::Display;

/// Pieces to place plus the side to move. Validated by [`crate::Engine::from_setup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    placements: Vec<(Color, PieceKind, Square)>,
    turn: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SetupError {
    #[display("{} is occupied twice", _0)]
    Occupied(Square),
    #[display("{} has no general", _0)]
    MissingGeneral(Color),
    #[display("{} has more than one general", _0)]
    ExtraGeneral(Color),
    #[display("the {} general stands outside its palace", _0)]
    GeneralOutsidePalace(Color),
    #[display("the generals face each other")]
    GeneralsFacing,
    #[display("{} is in check but it is not their move", _0)]
    WaitingSideInCheck(Color),
}

impl std::error::Error for SetupError {}

impl Setup {
    /// An empty board with `turn` to move.
    pub fn empty(turn: Color) -> Self {
        Self { placements: Vec::new(), turn }
    }

    /// The standard opening, Red to move.
    pub fn standard() -> Self {
        let placements = STANDARD_LAYOUT
            .iter()
            .filter_map(|&(color, kind, at)| at.parse().ok().map(|sq| (color, kind, sq)))
            .collect();
        Self { placements, turn: Color::Red }
    }

    pub fn place(mut self, color: Color, kind: PieceKind, sq: Square) -> Self {
        self.placements.push((color, kind, sq));
        self
    }

    pub fn with_turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn placements(&self) -> &[(Color, PieceKind, Square)] {
        &self.placements
    }

    /// Places every piece, checking occupancy and the one-general-per-side rule.
    pub(crate) fn build_board(&self) -> Result<Board, SetupError> {
        let mut board = Board::empty();
        let mut generals = [0usize; 2];

        for &(color, kind, sq) in &self.placements {
            if !board.is_empty(sq) {
                return Err(SetupError::Occupied(sq));
            }
            if kind == PieceKind::General {
                generals[color.index()] += 1;
                if !RULE_TABLES.palace[color.index()].contains(sq) {
                    return Err(SetupError::GeneralOutsidePalace(color));
                }
            }
            board.add_piece(Piece::new(color, kind, sq));
        }

        for color in [Color::Red, Color::Black] {
            match generals[color.index()] {
                0 => return Err(SetupError::MissingGeneral(color)),
                1 => {}
                _ => return Err(SetupError::ExtraGeneral(color)),
            }
        }
        Ok(board)
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn standard_has_sixteen_a_side() {
        let setup = Setup::standard();
        assert_eq!(setup.placements().len(), 32);
        let board = setup.build_board().unwrap();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.count(Color::Red), 16);
        assert_eq!(snapshot.count(Color::Black), 16);
        assert_eq!(board.general_square(Color::Red), Some(sq("e1")));
        assert_eq!(board.general_square(Color::Black), Some(sq("e10")));
    }

    #[test]
    fn rejects_double_occupancy() {
        let setup = Setup::empty(Color::Red)
            .place(Color::Red, PieceKind::General, sq("e1"))
            .place(Color::Black, PieceKind::General, sq("d10"))
            .place(Color::Red, PieceKind::Rook, sq("a1"))
            .place(Color::Black, PieceKind::Rook, sq("a1"));
        assert_eq!(setup.build_board(), Err(SetupError::Occupied(sq("a1"))));
    }

    #[test]
    fn rejects_bad_general_counts() {
        let none = Setup::empty(Color::Red).place(Color::Red, PieceKind::General, sq("e1"));
        assert_eq!(none.build_board(), Err(SetupError::MissingGeneral(Color::Black)));

        let two = none
            .clone()
            .place(Color::Black, PieceKind::General, sq("d10"))
            .place(Color::Red, PieceKind::General, sq("f2"));
        assert_eq!(two.build_board(), Err(SetupError::ExtraGeneral(Color::Red)));

        let outside = Setup::empty(Color::Red).place(Color::Red, PieceKind::General, sq("e5"));
        assert_eq!(outside.build_board(), Err(SetupError::GeneralOutsidePalace(Color::Red)));
    }
}
