//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! self-play binary's reports.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..Board::SIZE as i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..Board::SIZE as i8 {
            match board.piece_at(Position::new(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a line naming the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let side = match game_state.turn {
        Color::White => "White",
        Color::Black => "Black",
    };
    format!("{}\n{side} to move", render_board(&game_state.board))
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
