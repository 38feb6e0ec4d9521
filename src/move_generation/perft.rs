//! Move-path enumeration for validating the generator.
//!
//! Walks the game tree with in-place apply/revert and counts leaf nodes,
//! captures and checks. Checkmates are counted among leaves that give check
//! and leave the opponent without a reply.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, MoveKind};
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_generator::{any_legal_move, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side_to_move: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = *board;
    let mut counts = PerftCounts::default();
    perft_recurse(generator, &mut scratch, side_to_move, depth, &mut counts);
    counts
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    side_to_move: Color,
    depth: u8,
    counts: &mut PerftCounts,
) {
    for generated in generator.generate_legal_moves(board, side_to_move) {
        let mut mv = generated.mv;
        apply_move(board, &mut mv);

        if depth == 1 {
            counts.nodes += 1;
            if matches!(generated.kind, MoveKind::Capture | MoveKind::Both) {
                counts.captures += 1;
            }
            if matches!(generated.kind, MoveKind::Threatened | MoveKind::Both) {
                counts.checks += 1;
                if !any_legal_move(board, side_to_move.opposite()) {
                    counts.checkmates += 1;
                }
            }
        } else {
            perft_recurse(generator, board, side_to_move.opposite(), depth - 1, counts);
        }

        revert_move(board, &mv);
    }
}
