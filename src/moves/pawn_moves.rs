//! Pawn movement rule.
//!
//! Forward only. One step onto an empty square, two steps from the start
//! rank onto an empty square, or one step diagonally onto an enemy piece.
//! No en passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};

pub fn is_pawn_move(board: &Board, mv: &Move, color: Color) -> bool {
    let forward = mv.rank_delta() * color.pawn_direction();
    let sideways = mv.file_delta().abs();
    let target = board.piece_at(mv.to);
    let is_capture = matches!(target, Some(piece) if piece.color != color);

    // The square passed over by a double step is not inspected.
    let single_step = target.is_none() && forward == 1 && sideways == 0;
    let double_step = target.is_none()
        && mv.from.rank == color.pawn_start_rank()
        && forward == 2
        && sideways == 0;
    let diagonal_capture = is_capture && forward == 1 && sideways == 1;

    single_step || double_step || diagonal_capture
}
