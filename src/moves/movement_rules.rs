//! Geometric move legality.
//!
//! `is_legal_geometry` answers "can the piece on `mv.from` reach `mv.to`"
//! from board contents alone. It knows nothing about check; see
//! `move_generation::legal_move_checks` for the full legality pipeline.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind, Position};
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::is_king_move;
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::is_pawn_move;
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

/// Friendly-fire check plus the per-kind rule of the piece standing on
/// `mv.from`. Returns `false` for an empty origin or off-board endpoints.
pub fn is_legal_geometry(board: &Board, mv: &Move) -> bool {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return false;
    }
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    if board.color_at(mv.to) == Some(piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_pawn_move(board, mv, piece.color),
        PieceKind::Rook => is_rook_move(board, mv),
        PieceKind::Knight => is_knight_move(mv),
        PieceKind::Bishop => is_bishop_move(board, mv),
        PieceKind::Queen => is_queen_move(board, mv),
        PieceKind::King => is_king_move(mv),
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares share a file, rank or diagonal.
pub(crate) fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let file_step = (to.file - from.file).signum();
    let rank_step = (to.rank - from.rank).signum();

    let mut file = from.file + file_step;
    let mut rank = from.rank + rank_step;
    while file != to.file || rank != to.rank {
        if !board.is_empty_at(Position::new(file, rank)) {
            return false;
        }
        file += file_step;
        rank += rank_step;
    }

    true
}
