//! Rook movement rule: along one file or one rank, nothing in between.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::moves::movement_rules::path_is_clear;

pub fn is_rook_move(board: &Board, mv: &Move) -> bool {
    let moves_file = mv.file_delta() != 0;
    let moves_rank = mv.rank_delta() != 0;
    if moves_file == moves_rank {
        return false;
    }
    path_is_clear(board, mv.from, mv.to)
}
