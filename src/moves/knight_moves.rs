//! Knight movement rule: an L-shape, blockers irrelevant.

use crate::game_state::chess_types::Move;

pub fn is_knight_move(mv: &Move) -> bool {
    let file_delta = mv.file_delta().abs();
    let rank_delta = mv.rank_delta().abs();
    matches!((file_delta, rank_delta), (1, 2) | (2, 1))
}
