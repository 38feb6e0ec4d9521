//! Legal move enumeration.
//!
//! Every destination square is probed through the full legality pipeline,
//! so a generated move is always playable. Moves come out in scan order:
//! origin file, origin rank, destination file, destination rank.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, MoveKind, Position};
use crate::move_generation::legal_move_apply::SpeculativeMove;
use crate::move_generation::legal_move_checks::{is_king_in_check, validate_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    /// The move with `captured` and `player` already filled in.
    pub mv: Move,
    pub kind: MoveKind,
}

pub trait MoveGenerator: Send + Sync {
    /// Legal moves of the piece on `origin`, for whichever side owns it.
    fn generate_moves_from(
        &self,
        board: &Board,
        origin: Position,
    ) -> ChessResult<Vec<GeneratedMove>>;

    /// Legal moves of every piece belonging to `side`.
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        let mut out = Vec::new();
        for (origin, _) in board.pieces_of(side) {
            if let Ok(moves) = self.generate_moves_from(board, origin) {
                out.extend(moves);
            }
        }
        out
    }
}

/// Classifies every move, including whether it gives check.
pub struct LegalMoveGenerator;

/// Skips the check probe; `kind` is only `Standard` or `Capture`.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves_from(
        &self,
        board: &Board,
        origin: Position,
    ) -> ChessResult<Vec<GeneratedMove>> {
        generate_moves_from_internal(board, origin, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_moves_from(
        &self,
        board: &Board,
        origin: Position,
    ) -> ChessResult<Vec<GeneratedMove>> {
        generate_moves_from_internal(board, origin, false)
    }
}

/// Legal moves of the piece on `origin`, classified.
///
/// The mover is the owner of the origin piece, whether or not it is that
/// side's turn; nothing about the turn is read or changed.
pub fn legal_moves_from(board: &Board, origin: Position) -> ChessResult<Vec<GeneratedMove>> {
    LegalMoveGenerator.generate_moves_from(board, origin)
}

/// True as soon as one piece of `side` has a legal move.
pub fn any_legal_move(board: &Board, side: Color) -> bool {
    board.pieces_of(side).any(|(origin, _)| {
        FastLegalMoveGenerator
            .generate_moves_from(board, origin)
            .is_ok_and(|moves| !moves.is_empty())
    })
}

fn generate_moves_from_internal(
    board: &Board,
    origin: Position,
    annotate: bool,
) -> ChessResult<Vec<GeneratedMove>> {
    if !origin.is_on_board() {
        return Err(ChessError::InvalidPosition(origin));
    }
    let Some(piece) = board.piece_at(origin) else {
        return Err(ChessError::EmptyPosition(origin));
    };

    let mut scratch = *board;
    let mut out = Vec::new();
    for to in Position::all() {
        let candidate = Move::new(origin, to);
        if validate_move(&mut scratch, &candidate, piece.color).is_err() {
            continue;
        }
        out.push(classify_move(&mut scratch, candidate, annotate));
    }

    Ok(out)
}

fn classify_move(board: &mut Board, candidate: Move, annotate: bool) -> GeneratedMove {
    let is_capture = !board.is_empty_at(candidate.to);
    let trial = SpeculativeMove::new(board, candidate);
    let mv = *trial.applied();
    let gives_check = match (annotate, mv.player) {
        (true, Some(mover)) => is_king_in_check(&trial, mover.opposite()),
        _ => false,
    };

    GeneratedMove {
        mv,
        kind: MoveKind::from_flags(is_capture, gives_check),
    }
}
