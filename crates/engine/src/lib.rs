pub mod board;
pub mod constants;
pub mod engine;
pub mod movelist;
pub mod piece;
pub mod r#move;
pub mod rules;
pub mod setup;
pub mod square;

pub use board::{Board, Occupant, Snapshot};
pub use constants::{Color, PieceKind};
pub use engine::{Engine, GameState, MoveRejection};
pub use piece::{Piece, PieceId};
pub use r#move::Move;
pub use setup::{Setup, SetupError};
pub use square::{ParseSquareError, Position, Square};
