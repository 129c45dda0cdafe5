//! Per-piece movement rules and the generals' face-off scan.
//!
//! Every function here is a pure predicate over a read-only board. Check and
//! self-check are the engine's business; see `engine.rs`.

use crate::board::Board;
use crate::constants::{Color, PieceKind, RULE_TABLES};
use crate::piece::Piece;
use crate::square::Square;

/// Shape, path and capture rules for `piece` moving `from` -> `to`.
pub fn can_move(piece: &Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to || board.color_at(to) == Some(piece.color) {
        return false;
    }
    match piece.kind {
        PieceKind::Rook => rook(from, to, board),
        PieceKind::Knight => knight(from, to, board),
        PieceKind::Elephant => elephant(piece.color, from, to, board),
        PieceKind::Advisor => advisor(piece.color, from, to),
        PieceKind::General => general(piece.color, from, to, board),
        PieceKind::Cannon => cannon(from, to, board),
        PieceKind::Soldier => soldier(piece, from, to),
    }
}

/// Same row or same column, but not both.
fn on_line(from: Square, to: Square) -> bool {
    let (dc, dr) = from.delta(to);
    (dc == 0) != (dr == 0)
}

fn rook(from: Square, to: Square, board: &Board) -> bool {
    on_line(from, to) && board.count_between(from, to) == 0
}

fn knight(from: Square, to: Square, board: &Board) -> bool {
    let (dc, dr) = from.delta(to);
    // The leg is the orthogonal step taken first, along the long axis.
    let leg = match (dc.abs(), dr.abs()) {
        (1, 2) => from.offset(0, dr.signum()),
        (2, 1) => from.offset(dc.signum(), 0),
        _ => return false,
    };
    leg.is_some_and(|sq| board.is_empty(sq))
}

fn elephant(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dc, dr) = from.delta(to);
    if dc.abs() != 2 || dr.abs() != 2 || !RULE_TABLES.elephant[color.index()].contains(to) {
        return false;
    }
    from.offset(dc / 2, dr / 2).is_some_and(|eye| board.is_empty(eye))
}

fn advisor(color: Color, from: Square, to: Square) -> bool {
    let (dc, dr) = from.delta(to);
    dc.abs() == 1 && dr.abs() == 1 && RULE_TABLES.advisor[color.index()].contains(to)
}

fn general(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dc, dr) = from.delta(to);
    dc.abs() + dr.abs() == 1
        && RULE_TABLES.palace[color.index()].contains(to)
        && !faces_enemy_general(board, color, from, to)
}

fn cannon(from: Square, to: Square, board: &Board) -> bool {
    if !on_line(from, to) {
        return false;
    }
    let screens = board.count_between(from, to);
    if board.is_empty(to) { screens == 0 } else { screens == 1 }
}

fn soldier(piece: &Piece, from: Square, to: Square) -> bool {
    match from.delta(to) {
        (0, dr) => dr == piece.color.forward(),
        (dc, 0) => dc.abs() == 1 && piece.crossed_river,
        _ => false,
    }
}

/// Whether a general of `color` standing on `to`, having left `from`, would see the
/// opposing general along an open column. With `from == to` this tests the board as
/// it stands. A captured opposing general faces nothing.
pub fn faces_enemy_general(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let Some(enemy) = board.general_square(color.opponent()) else {
        return false;
    };
    if enemy.col() != to.col() {
        return false;
    }
    !to.between(enemy).any(|sq| sq != from && !board.is_empty(sq))
}

/// The flying-general configuration: both generals on one column, nothing between.
pub fn generals_facing(board: &Board) -> bool {
    board
        .general_square(Color::Red)
        .is_some_and(|red| faces_enemy_general(board, Color::Red, red, red))
}
