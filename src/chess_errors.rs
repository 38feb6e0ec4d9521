//! Errors used throughout the chess core.
//!
//! `ChessError` is the single error type returned by move validation, move
//! execution, history handling and settings updates. A successful operation
//! is simply `Ok(..)`.
//!
//! Validation reports the most specific failure in pipeline order: a move
//! with an off-board square is reported as `InvalidPosition` even if it would
//! also be geometrically illegal.

use thiserror::Error;

use crate::game_state::chess_types::Position;

/// Unified error type for the chess core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A setting value outside its enum's valid range.
    ///
    /// Payload: the setting name and the rejected raw code.
    #[error("invalid argument: {setting} does not accept {value}")]
    InvalidArgument { setting: &'static str, value: i32 },

    /// A referenced square lies outside the 8x8 board.
    #[error("position ({}, {}) is off the board", .0.file, .0.rank)]
    InvalidPosition(Position),

    /// The source square is empty or holds a piece of the side not moving.
    #[error("position {0} holds no piece of the moving side")]
    EmptyPosition(Position),

    /// The piece cannot move that way, or the destination holds a friendly piece.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// The mover was in check and the move does not resolve it.
    #[error("king is still threatened after {from} to {to}")]
    KingStillThreatened { from: Position, to: Position },

    /// The move would expose the mover's own king.
    #[error("king would be threatened after {from} to {to}")]
    KingWillBeThreatened { from: Position, to: Position },

    /// Undo was requested with no recorded moves.
    #[error("no moves left in history")]
    EmptyHistory,
}

pub type ChessResult<T> = Result<T, ChessError>;
