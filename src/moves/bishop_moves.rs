//! Bishop movement rule: along a diagonal, nothing in between.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::moves::movement_rules::path_is_clear;

pub fn is_bishop_move(board: &Board, mv: &Move) -> bool {
    let file_delta = mv.file_delta().abs();
    let rank_delta = mv.rank_delta().abs();
    if file_delta != rank_delta || file_delta == 0 {
        return false;
    }
    if file_delta == 1 {
        return true;
    }
    path_is_clear(board, mv.from, mv.to)
}
