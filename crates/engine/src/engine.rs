//! The game engine: move application, check detection and game-state tracking.
//!
//! Every move request goes through the same pipeline. The piece's own movement
//! rule is consulted first, then the move is played on the board and the two
//! global constraints are checked against the resulting position: the mover's
//! general must not be in check, and the generals must not face each other. A
//! failing move is undone from its [`Undo`] record, which restores the board
//! exactly. Probing a move with [`Engine::legal_move`] always undoes it.

use crate::board::{Board, Snapshot, Undo};
use crate::constants::{Color, PieceKind};
use crate::movelist::SquareList;
use crate::piece::{Piece, PieceId};
use crate::r#move::Move;
use crate::rules;
use crate::setup::{Setup, SetupError};
use crate::square::{ParseSquareError, Square};
use derive_more::Display;
use std::fmt;
use tracing::{debug, info, instrument, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Unfinished,
    RedWon,
    BlackWon,
}

/// Why a move request was refused. The board is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveRejection {
    #[display("the game is already over")]
    GameOver,
    #[display("there is no piece on {}", _0)]
    NoPiece(Square),
    #[display("it is {}'s turn", _0)]
    WrongTurn(Color),
    #[display("a {} cannot move like that", _0)]
    IllegalShape(PieceKind),
    #[display("that would leave the {} general in check", _0)]
    SelfCheck(Color),
    #[display("the generals would face each other")]
    GeneralsFacing,
    #[display("{}", _0)]
    BadCoordinate(ParseSquareError),
}

impl std::error::Error for MoveRejection {}

impl From<ParseSquareError> for MoveRejection {
    fn from(err: ParseSquareError) -> Self {
        MoveRejection::BadCoordinate(err)
    }
}

impl GameState {
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::Red => GameState::RedWon,
            Color::Black => GameState::BlackWon,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::Unfinished => None,
            GameState::RedWon => Some(Color::Red),
            GameState::BlackWon => Some(Color::Black),
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameState::Unfinished
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameState::Unfinished => "UNFINISHED",
            GameState::RedWon => "RED_WON",
            GameState::BlackWon => "BLACK_WON",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    /// Live pieces per color, indexed by `Color::index`.
    rosters: [Vec<PieceId>; 2],
    /// Legal destinations per piece, indexed by `PieceId`.
    legal: Vec<SquareList>,
    turn: Color,
    state: GameState,
    moves_played: usize,
}

impl Engine {
    /// A new game from the standard opening, Red to move.
    pub fn new() -> Self {
        let setup = Setup::standard();
        let mut board = Board::empty();
        for &(color, kind, sq) in setup.placements() {
            board.add_piece(Piece::new(color, kind, sq));
        }
        let mut engine = Self::assemble(board, setup.turn());
        engine.refresh_legal_moves();
        engine
    }

    /// A game from an arbitrary position.
    ///
    /// The generals may not face each other and the side that is not to move may
    /// not be in check. If the side to move has no legal move, the game is
    /// already over.
    pub fn from_setup(setup: &Setup) -> Result<Self, SetupError> {
        let mut engine = Self::assemble(setup.build_board()?, setup.turn());
        if engine.generals_facing() {
            return Err(SetupError::GeneralsFacing);
        }
        let waiting = engine.turn.opponent();
        if engine.is_in_check(waiting) {
            return Err(SetupError::WaitingSideInCheck(waiting));
        }
        engine.refresh_legal_moves();
        engine.update_state();
        Ok(engine)
    }

    fn assemble(board: Board, turn: Color) -> Self {
        let mut rosters = [Vec::with_capacity(16), Vec::with_capacity(16)];
        for (id, piece) in board.pieces() {
            if piece.is_live() {
                rosters[piece.color.index()].push(id);
            }
        }
        let legal = vec![SquareList::new(); board.pieces().count()];
        Self {
            board,
            rosters,
            legal,
            turn,
            state: GameState::Unfinished,
            moves_played: 0,
        }
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Number of moves committed so far.
    pub fn move_count(&self) -> usize {
        self.moves_played
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.piece_at(sq)
    }

    /// Live pieces of `color`, in roster order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.rosters[color.index()].iter().map(|&id| self.board.piece(id))
    }

    pub fn general(&self, color: Color) -> &Piece {
        match self.board.general(color) {
            Some(id) => self.board.piece(id),
            None => panic!("no {color} general on the board"),
        }
    }

    /// Panics if the general has been captured: a running game never allows it.
    fn general_square(&self, color: Color) -> Square {
        match self.general(color).square() {
            Some(sq) => sq,
            None => panic!("the {color} general was captured"),
        }
    }

    /// Legal destinations of the piece on `sq` as of the last commit.
    pub fn legal_moves_from(&self, sq: Square) -> &[Square] {
        match self.board.id_at(sq) {
            Some(id) => self.legal[id.index()].as_slice(),
            None => &[],
        }
    }

    /// Every legal move for `color` as of the last commit.
    pub fn legal_moves(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        self.rosters[color.index()].iter().flat_map(move |&id| {
            let from = self.board.piece(id).square();
            self.legal[id.index()]
                .iter()
                .filter_map(move |&to| from.map(|from| Move::new(from, to)))
        })
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.rosters[color.index()]
            .iter()
            .any(|&id| !self.legal[id.index()].is_empty())
    }

    /// Whether any live opposing piece could move onto `color`'s general.
    pub fn is_in_check(&self, color: Color) -> bool {
        let target = self.general_square(color);
        self.rosters[color.opponent().index()]
            .iter()
            .map(|&id| self.board.piece(id))
            .filter_map(|piece| piece.square().map(|sq| (piece, sq)))
            .any(|(piece, sq)| piece.can_move(sq, target, &self.board))
    }

    pub fn generals_facing(&self) -> bool {
        rules::generals_facing(&self.board)
    }

    /// Plays a move from textual coordinates such as `("b3", "e3")`.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        match Move::parse(from, to) {
            Ok(mv) => self.apply_move(mv.from, mv.to),
            Err(err) => {
                debug!(from, to, %err, "move rejected");
                false
            }
        }
    }

    /// Plays a move; `true` if it was committed.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Plays a move, reporting why it was refused.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveRejection> {
        let result = self.commit(from, to);
        if let Err(reason) = &result {
            debug!(%from, %to, %reason, "move rejected");
        }
        result
    }

    fn commit(&mut self, from: Square, to: Square) -> Result<(), MoveRejection> {
        if self.state.is_finished() {
            return Err(MoveRejection::GameOver);
        }
        let piece = self.board.piece_at(from).ok_or(MoveRejection::NoPiece(from))?;
        if piece.color != self.turn {
            return Err(MoveRejection::WrongTurn(self.turn));
        }
        let undo = self.speculate(from, to)?;
        self.finish(undo);
        Ok(())
    }

    /// Whether the piece on `from` may legally go to `to`, regardless of whose turn
    /// it is. The board is left exactly as it was.
    pub fn legal_move(&mut self, from: Square, to: Square) -> bool {
        if self.state.is_finished() {
            return false;
        }
        match self.speculate(from, to) {
            Ok(undo) => {
                self.board.unshift(undo);
                true
            }
            Err(_) => false,
        }
    }

    /// Plays `from` -> `to` on the board if the piece's rule allows it and the
    /// resulting position is legal. On `Err` the board is untouched; on `Ok` the
    /// caller owns the returned undo record.
    fn speculate(&mut self, from: Square, to: Square) -> Result<Undo, MoveRejection> {
        let piece = *self.board.piece_at(from).ok_or(MoveRejection::NoPiece(from))?;
        if !piece.can_move(from, to, &self.board) {
            return Err(MoveRejection::IllegalShape(piece.kind));
        }
        let undo = self.board.shift(from, to).ok_or(MoveRejection::NoPiece(from))?;

        let verdict = if rules::generals_facing(&self.board) {
            Err(MoveRejection::GeneralsFacing)
        } else if self.is_in_check(piece.color) {
            Err(MoveRejection::SelfCheck(piece.color))
        } else {
            Ok(undo)
        };
        if verdict.is_err() {
            self.board.unshift(undo);
        }
        verdict
    }

    /// Makes a speculated move permanent and advances the game.
    fn finish(&mut self, undo: Undo) {
        let mover = self.board.piece_mut(undo.moved);
        if mover.kind == PieceKind::Soldier && mover.color.across_river(undo.to.row()) {
            mover.crossed_river = true;
        }
        let color = mover.color;

        if let Some(victim) = undo.captured {
            let victim_color = self.board.piece(victim).color;
            self.rosters[victim_color.index()].retain(|&id| id != victim);
            self.legal[victim.index()] = SquareList::new();
        }
        self.moves_played += 1;
        debug!(
            from = %undo.from,
            to = %undo.to,
            captured = undo.captured.is_some(),
            "{color} moved"
        );

        self.refresh_legal_moves();
        self.turn = color.opponent();
        self.update_state();
    }

    /// Recomputes the legal destinations of every live piece by probing all 90 squares.
    fn refresh_legal_moves(&mut self) {
        let mut total = 0;
        for color in [Color::Red, Color::Black] {
            let roster = self.rosters[color.index()].clone();
            for id in roster {
                let mut targets = SquareList::new();
                if let Some(from) = self.board.piece(id).square() {
                    for to in Square::all() {
                        if self.legal_move(from, to) {
                            targets.add(to);
                        }
                    }
                }
                total += targets.len();
                self.legal[id.index()] = targets;
            }
        }
        trace!(total, "legal moves recomputed");
    }

    /// A side with nothing to play loses, whether or not it is in check.
    fn update_state(&mut self) {
        if self.state.is_finished() || self.has_legal_moves(self.turn) {
            return;
        }
        self.state = GameState::won_by(self.turn.opponent());
        info!(
            state = %self.state,
            in_check = self.is_in_check(self.turn),
            moves = self.moves_played,
            "game over"
        );
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({} to move, {})", self.turn, self.state)?;
        write!(f, "{}", self.board)
    }
}
