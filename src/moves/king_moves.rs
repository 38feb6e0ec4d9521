//! King movement rule: one square in any direction. No castling.

use crate::game_state::chess_types::Move;

pub fn is_king_move(mv: &Move) -> bool {
    let file_delta = mv.file_delta().abs();
    let rank_delta = mv.rank_delta().abs();
    file_delta <= 1 && rank_delta <= 1 && (file_delta, rank_delta) != (0, 0)
}

#[cfg(test)]
mod tests {
    use super::is_king_move;
    use crate::game_state::chess_types::{Move, Position};

    #[test]
    fn king_from_d4_has_eight_targets() {
        let from = Position::new(3, 3);
        let targets = Position::all()
            .filter(|to| is_king_move(&Move::new(from, *to)))
            .count();
        assert_eq!(targets, 8);
    }

    #[test]
    fn king_rejects_null_and_two_square_moves() {
        let from = Position::new(4, 0);
        assert!(!is_king_move(&Move::new(from, from)));
        assert!(!is_king_move(&Move::new(from, Position::new(6, 0))));
    }
}
