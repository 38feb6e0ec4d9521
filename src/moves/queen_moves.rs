//! Queen movement rule: rook rule or bishop rule.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::rook_moves::is_rook_move;

#[inline]
pub fn is_queen_move(board: &Board, mv: &Move) -> bool {
    is_rook_move(board, mv) || is_bishop_move(board, mv)
}

#[cfg(test)]
mod tests {
    use super::is_queen_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Move, Position};

    #[test]
    fn queen_on_d4_reaches_twenty_seven_squares_on_empty_board() {
        let board = Board::empty();
        let from = Position::new(3, 3);
        let reachable = Position::all()
            .filter(|to| is_queen_move(&board, &Move::new(from, *to)))
            .count();
        assert_eq!(reachable, 27);
    }

    #[test]
    fn queen_cannot_leave_the_initial_back_rank() {
        let board = Board::initial();
        let from = Position::new(3, 0);
        let reachable = Position::all()
            .filter(|to| board.color_at(*to).is_none())
            .filter(|to| is_queen_move(&board, &Move::new(from, *to)))
            .count();
        assert_eq!(reachable, 0);
    }
}
