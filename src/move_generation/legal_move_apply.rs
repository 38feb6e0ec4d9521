//! Board-level move application.
//!
//! `apply_move` / `revert_move` are exact inverses and touch nothing but the
//! board. Turn and history bookkeeping lives in `GameState`.
//! `SpeculativeMove` scopes a trial application: the move is reverted when
//! the guard is dropped, whichever way the caller leaves the scope.

use std::ops::Deref;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;

/// Move the piece on `mv.from` to `mv.to`, recording the captured piece and
/// the mover's color into `mv`.
pub fn apply_move(board: &mut Board, mv: &mut Move) {
    let moving = board.set_piece(mv.from, None);
    mv.player = moving.map(|piece| piece.color);
    mv.captured = board.set_piece(mv.to, moving);
}

/// Undo a move previously returned by `apply_move`.
pub fn revert_move(board: &mut Board, mv: &Move) {
    let moved = board.set_piece(mv.to, mv.captured);
    board.set_piece(mv.from, moved);
}

pub struct SpeculativeMove<'a> {
    board: &'a mut Board,
    applied: Move,
}

impl<'a> SpeculativeMove<'a> {
    pub fn new(board: &'a mut Board, mv: Move) -> Self {
        let mut applied = mv;
        apply_move(board, &mut applied);
        Self { board, applied }
    }

    /// The move as recorded by `apply_move` (captured piece and player set).
    #[inline]
    pub fn applied(&self) -> &Move {
        &self.applied
    }
}

impl Deref for SpeculativeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        revert_move(self.board, &self.applied);
    }
}
