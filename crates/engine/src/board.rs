//! The board: a 9 × 10 grid of cells over an arena of pieces.
//!
//! Cells hold [`PieceId`]s rather than pieces, so relocating or capturing a piece
//! only rewrites a couple of slots and can always be undone exactly.

use crate::constants::{Color, FILES, PieceKind, RANKS};
use crate::piece::{Piece, PieceId};
use crate::square::{Position, Square};
use std::fmt;

type Grid<T> = [[T; RANKS]; FILES];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Option<PieceId>>,
    pieces: Vec<Piece>,
    generals: [Option<PieceId>; 2],
}

/// Everything needed to reverse one [`Board::shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Undo {
    pub from: Square,
    pub to: Square,
    pub moved: PieceId,
    pub captured: Option<PieceId>,
}

/// What stands on a cell, without identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub color: Color,
    pub kind: PieceKind,
}

/// A read-only copy of all 90 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    cells: Grid<Option<Occupant>>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; RANKS]; FILES],
            pieces: Vec::with_capacity(32),
            generals: [None; 2],
        }
    }

    /// Adds a piece to the arena and puts it on its square.
    /// The caller guarantees the square is free.
    pub(crate) fn add_piece(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        if let Some(sq) = piece.square() {
            debug_assert!(self.is_empty(sq), "{sq} already occupied");
            self.cells[sq.col() as usize][sq.row() as usize] = Some(id);
        }
        if piece.kind == PieceKind::General {
            self.generals[piece.color.index()] = Some(id);
        }
        self.pieces.push(piece);
        id
    }

    /// The general of `color`, if one was placed.
    pub fn general(&self, color: Color) -> Option<PieceId> {
        self.generals[color.index()]
    }

    /// Square of the live general of `color`; `None` once it is captured.
    pub fn general_square(&self, color: Color) -> Option<Square> {
        self.general(color).and_then(|id| self.piece(id).square())
    }

    pub fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.col() as usize][sq.row() as usize]
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.id_at(sq).map(|id| self.piece(id))
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.id_at(sq).is_none()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// Every piece ever placed, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i as u8), p))
    }

    /// Number of occupied cells strictly between two squares on a shared line.
    pub fn count_between(&self, a: Square, b: Square) -> usize {
        a.between(b).filter(|&sq| !self.is_empty(sq)).count()
    }

    /// Moves the piece on `from` to `to`, marking any piece already on `to` as
    /// captured. Performs no legality checks. Returns `None` if `from` is empty.
    pub(crate) fn shift(&mut self, from: Square, to: Square) -> Option<Undo> {
        let moved = self.id_at(from)?;
        let captured = self.id_at(to);

        if let Some(victim) = captured {
            self.pieces[victim.index()].position = Position::Captured;
        }
        self.cells[from.col() as usize][from.row() as usize] = None;
        self.cells[to.col() as usize][to.row() as usize] = Some(moved);
        self.pieces[moved.index()].position = Position::On(to);

        Some(Undo { from, to, moved, captured })
    }

    /// Exact inverse of the `shift` that produced `undo`.
    pub(crate) fn unshift(&mut self, undo: Undo) {
        let Undo { from, to, moved, captured } = undo;

        self.cells[from.col() as usize][from.row() as usize] = Some(moved);
        self.pieces[moved.index()].position = Position::On(from);
        self.cells[to.col() as usize][to.row() as usize] = captured;
        if let Some(victim) = captured {
            self.pieces[victim.index()].position = Position::On(to);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[None; RANKS]; FILES];
        for sq in Square::all() {
            cells[sq.col() as usize][sq.row() as usize] = self.piece_at(sq).map(|p| Occupant {
                color: p.color,
                kind: p.kind,
            });
        }
        Snapshot { cells }
    }
}

impl Snapshot {
    pub fn get(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.col() as usize][sq.row() as usize]
    }

    /// Occupied cells, column by column.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|o| (sq, o)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.occupied().filter(|(_, o)| o.color == color).count()
    }
}

impl Occupant {
    pub fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    a b c d e f g h i")?;
        writeln!(f, "  +-------------------+")?;
        for row in (0..RANKS as u8).rev() {
            write!(f, "{:>2}| ", row + 1)?;
            for col in 0..FILES as u8 {
                let c = Square::new(col, row)
                    .and_then(|sq| self.get(sq))
                    .map_or('.', Occupant::to_char);
                write!(f, "{} ", c)?;
            }
            writeln!(f, "|")?;
            if row == 5 {
                writeln!(f, "  |~~~~~ river ~~~~~~|")?;
            }
        }
        writeln!(f, "  +-------------------+")?;
        writeln!(f, "    a b c d e f g h i")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
