//! Terminal-state classification, computed fresh on every call.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::any_legal_move;

pub fn game_status(board: &Board, side_to_move: Color) -> GameStatus {
    let in_check = is_king_in_check(board, side_to_move);
    let has_moves = any_legal_move(board, side_to_move);

    match (in_check, has_moves) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Draw,
        (false, true) => GameStatus::Running,
    }
}

#[cfg(test)]
mod tests {
    use super::game_status;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Position};

    fn place(board: &mut Board, file: i8, rank: i8, kind: PieceKind, color: Color) {
        board.set_piece(Position::new(file, rank), Some(Piece::new(kind, color)));
    }

    #[test]
    fn initial_position_is_running() {
        assert_eq!(game_status(&Board::initial(), Color::White), GameStatus::Running);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let mut board = Board::empty();
        place(&mut board, 6, 7, PieceKind::King, Color::Black);
        for file in 5..8 {
            place(&mut board, file, 6, PieceKind::Pawn, Color::Black);
        }
        place(&mut board, 0, 7, PieceKind::Rook, Color::White);
        place(&mut board, 6, 0, PieceKind::King, Color::White);
        assert_eq!(game_status(&board, Color::Black), GameStatus::Checkmate);
    }

    #[test]
    fn escapable_check_is_check() {
        let mut board = Board::empty();
        place(&mut board, 6, 7, PieceKind::King, Color::Black);
        place(&mut board, 0, 7, PieceKind::Rook, Color::White);
        place(&mut board, 6, 0, PieceKind::King, Color::White);
        assert_eq!(game_status(&board, Color::Black), GameStatus::Check);
    }

    #[test]
    fn stalemate_is_draw() {
        let mut board = Board::empty();
        place(&mut board, 7, 7, PieceKind::King, Color::Black);
        place(&mut board, 6, 5, PieceKind::Queen, Color::White);
        place(&mut board, 0, 0, PieceKind::King, Color::White);
        assert_eq!(game_status(&board, Color::Black), GameStatus::Draw);
        assert_eq!(game_status(&board, Color::White), GameStatus::Running);
    }
}
