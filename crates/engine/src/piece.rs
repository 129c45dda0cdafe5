//! Pieces and their identities.

use crate::board::Board;
use crate::constants::{Color, PieceKind};
use crate::rules;
use crate::square::{Position, Square};

/// Stable index of a piece in the board's arena. Never reused within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub position: Position,
    /// Set once a soldier's committed move lands across the river. Never cleared.
    pub crossed_river: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, sq: Square) -> Self {
        Self {
            color,
            kind,
            position: Position::On(sq),
            crossed_river: kind == PieceKind::Soldier && color.across_river(sq.row()),
        }
    }

    pub fn square(&self) -> Option<Square> {
        self.position.square()
    }

    pub fn is_live(&self) -> bool {
        !self.position.is_captured()
    }

    /// Whether this piece's movement rule allows `from` -> `to` on `board`.
    /// Ignores check and the engine-level face-off scan; never mutates anything.
    pub fn can_move(&self, from: Square, to: Square, board: &Board) -> bool {
        rules::can_move(self, from, to, board)
    }

    pub fn to_char(&self) -> char {
        self.kind.to_char(self.color)
    }
}
