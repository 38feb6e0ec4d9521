//! 8x8 mailbox board.
//!
//! Squares are addressed `[file][rank]` with `(0, 0) == a1`. Off-board
//! lookups return `None` so rule code can probe freely.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const SIZE: usize = BOARD_SIZE;

    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting layout, White on ranks 0-1.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            board.squares[file][0] = Some(Piece::new(*kind, Color::White));
            board.squares[file][1] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[file][6] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[file][7] = Some(Piece::new(*kind, Color::Black));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.squares[pos.file as usize][pos.rank as usize]
    }

    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Place (or clear with `None`) a square, returning what was there.
    /// Off-board writes are ignored.
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        std::mem::replace(&mut self.squares[pos.file as usize][pos.rank as usize], piece)
    }

    /// Occupied squares in file-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}
