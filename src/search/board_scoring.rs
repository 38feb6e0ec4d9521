//! Pluggable static evaluation.
//!
//! Scores are from the point of view of the search's maximizing side
//! (`root`). Mate is always scored in favour of the side not to move and
//! stalemate is zero.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::move_generation::game_status::game_status;

pub const CHECKMATE_SCORE: i32 = 999;

pub trait BoardScorer: Send + Sync {
    /// Score of `board` with `side_to_move` on move, as seen by `root`.
    fn score(&self, board: &Board, side_to_move: Color, root: Color) -> i32;
}

/// Counts only the side to move's own material, unsigned; the opponent's
/// pieces are not subtracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoverMaterialScorer;

impl BoardScorer for MoverMaterialScorer {
    fn score(&self, board: &Board, side_to_move: Color, root: Color) -> i32 {
        match game_status(board, side_to_move) {
            GameStatus::Draw => 0,
            GameStatus::Checkmate => mate_score(side_to_move, root),
            GameStatus::Running | GameStatus::Check => material_of(board, side_to_move),
        }
    }
}

/// Own material minus the opponent's, taken from the side to move and
/// negated when that is not `root`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialBalanceScorer;

impl BoardScorer for MaterialBalanceScorer {
    fn score(&self, board: &Board, side_to_move: Color, root: Color) -> i32 {
        match game_status(board, side_to_move) {
            GameStatus::Draw => 0,
            GameStatus::Checkmate => mate_score(side_to_move, root),
            GameStatus::Running | GameStatus::Check => {
                let balance = material_of(board, side_to_move)
                    - material_of(board, side_to_move.opposite());
                if side_to_move == root {
                    balance
                } else {
                    -balance
                }
            }
        }
    }
}

#[inline]
fn mate_score(mated: Color, root: Color) -> i32 {
    if mated == root {
        -CHECKMATE_SCORE
    } else {
        CHECKMATE_SCORE
    }
}

#[inline]
pub fn material_of(board: &Board, color: Color) -> i32 {
    board.pieces_of(color).map(|(_, piece)| piece.kind.value()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Position};

    fn place(board: &mut Board, file: i8, rank: i8, kind: PieceKind, color: Color) {
        board.set_piece(Position::new(file, rank), Some(Piece::new(kind, color)));
    }

    #[test]
    fn initial_material_is_one_hundred_thirty_nine() {
        // 8 pawns, 2 knights, 2 bishops, 2 rooks, queen, king.
        let board = Board::initial();
        assert_eq!(material_of(&board, Color::White), 8 + 6 + 6 + 10 + 9 + 100);
        assert_eq!(MoverMaterialScorer.score(&board, Color::Black, Color::Black), 139);
        assert_eq!(MoverMaterialScorer.score(&board, Color::Black, Color::White), 139);
        assert_eq!(MaterialBalanceScorer.score(&board, Color::Black, Color::White), 0);
    }

    #[test]
    fn mover_material_ignores_opponent_pieces() {
        let mut board = Board::empty();
        place(&mut board, 0, 0, PieceKind::King, Color::White);
        place(&mut board, 7, 7, PieceKind::King, Color::Black);
        place(&mut board, 3, 3, PieceKind::Queen, Color::Black);
        assert_eq!(MoverMaterialScorer.score(&board, Color::White, Color::White), 100);
        assert_eq!(MoverMaterialScorer.score(&board, Color::White, Color::Black), 100);
        assert_eq!(MaterialBalanceScorer.score(&board, Color::White, Color::White), -9);
        assert_eq!(MaterialBalanceScorer.score(&board, Color::White, Color::Black), 9);
    }

    #[test]
    fn terminal_positions_use_fixed_scores() {
        let mut mate = Board::empty();
        place(&mut mate, 6, 7, PieceKind::King, Color::Black);
        for file in 5..8 {
            place(&mut mate, file, 6, PieceKind::Pawn, Color::Black);
        }
        place(&mut mate, 0, 7, PieceKind::Rook, Color::White);
        place(&mut mate, 6, 0, PieceKind::King, Color::White);
        assert_eq!(
            MoverMaterialScorer.score(&mate, Color::Black, Color::Black),
            -CHECKMATE_SCORE
        );
        assert_eq!(
            MoverMaterialScorer.score(&mate, Color::Black, Color::White),
            CHECKMATE_SCORE
        );

        let mut stalemate = Board::empty();
        place(&mut stalemate, 7, 7, PieceKind::King, Color::Black);
        place(&mut stalemate, 6, 5, PieceKind::Queen, Color::White);
        place(&mut stalemate, 0, 0, PieceKind::King, Color::White);
        assert_eq!(MoverMaterialScorer.score(&stalemate, Color::Black, Color::White), 0);
        assert_eq!(MaterialBalanceScorer.score(&stalemate, Color::Black, Color::White), 0);
    }
}
