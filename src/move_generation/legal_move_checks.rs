//! Attack detection and the full move-legality pipeline.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, PieceKind, Position};
use crate::move_generation::legal_move_apply::SpeculativeMove;
use crate::moves::movement_rules::is_legal_geometry;

/// First square (file-major) holding the king of `color`.
pub fn king_position(board: &Board, color: Color) -> Option<Position> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// True if some piece of `attacker` can geometrically move onto `target`.
pub fn is_square_attacked(board: &Board, target: Position, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, _)| is_legal_geometry(board, &Move::new(from, target)))
}

/// A board without a king of `color` is never "in check".
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_position(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Full legality check of `mv` for `mover`, short-circuiting in this order:
/// positions on board, origin owned by `mover`, geometry, check-safety.
///
/// The board is mutated only for the duration of the check-safety probe.
pub fn validate_move(board: &mut Board, mv: &Move, mover: Color) -> ChessResult<()> {
    if !mv.from.is_on_board() {
        return Err(ChessError::InvalidPosition(mv.from));
    }
    if !mv.to.is_on_board() {
        return Err(ChessError::InvalidPosition(mv.to));
    }
    if board.color_at(mv.from) != Some(mover) {
        return Err(ChessError::EmptyPosition(mv.from));
    }
    if !is_legal_geometry(board, mv) {
        return Err(ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    let was_in_check = is_king_in_check(board, mover);
    let stays_in_check = {
        let trial = SpeculativeMove::new(board, *mv);
        is_king_in_check(&trial, mover)
    };

    match (was_in_check, stays_in_check) {
        (true, true) => Err(ChessError::KingStillThreatened {
            from: mv.from,
            to: mv.to,
        }),
        (false, true) => Err(ChessError::KingWillBeThreatened {
            from: mv.from,
            to: mv.to,
        }),
        _ => Ok(()),
    }
}
