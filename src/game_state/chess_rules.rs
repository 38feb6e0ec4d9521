//! Canonical chess-rule constants.
//!
//! Static rule literals: the back-rank layout used to set up a new game and
//! the number of moves that can be taken back.

use crate::game_state::chess_types::PieceKind;

/// Number of moves kept for undo. Older moves are forgotten.
pub const HISTORY_CAPACITY: usize = 6;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
