//! Fixed-depth, full-width minimax.
//!
//! The root side maximizes, the other side minimizes. There is no pruning.
//! Moves are explored in generator scan order and only a strictly better
//! score replaces the current best, so the first of several equal moves wins
//! and repeated searches of the same position return the same move.
//!
//! The search never touches the caller's `GameState`: it copies the board
//! once and walks the tree with in-place apply/revert on its own move stack.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead. Zero returns the static evaluation and no move.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score as reported by the scorer for the root side.
    pub best_score: i32,
    pub nodes: u64,
}

pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut searcher = Searcher {
        board: game_state.board,
        side_to_move: game_state.turn,
        root: game_state.turn,
        move_stack: Vec::with_capacity(usize::from(config.depth)),
        nodes: 0,
        generator,
        scorer,
    };

    let (best_move, best_score) = searcher.minimax(config.depth);
    debug_assert!(searcher.move_stack.is_empty());

    debug!(
        depth = config.depth,
        nodes = searcher.nodes,
        score = best_score,
        best_move = ?best_move.map(|mv| mv.to_string()),
        "minimax search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes: searcher.nodes,
    }
}

struct Searcher<'a, G, S> {
    board: Board,
    side_to_move: Color,
    root: Color,
    move_stack: Vec<Move>,
    nodes: u64,
    generator: &'a G,
    scorer: &'a S,
}

impl<G: MoveGenerator, S: BoardScorer> Searcher<'_, G, S> {
    fn minimax(&mut self, depth: u8) -> (Option<Move>, i32) {
        self.nodes += 1;

        if depth == 0 {
            return (None, self.evaluate());
        }

        let moves = self
            .generator
            .generate_legal_moves(&self.board, self.side_to_move);
        if moves.is_empty() {
            return (None, self.evaluate());
        }

        let maximizing = self.side_to_move == self.root;
        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for generated in moves {
            self.make(generated.mv);
            let (_, score) = self.minimax(depth - 1);
            let played = self.unmake();

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = played;
            }
        }

        (best_move, best_score)
    }

    fn evaluate(&self) -> i32 {
        self.scorer.score(&self.board, self.side_to_move, self.root)
    }

    fn make(&mut self, mut mv: Move) {
        apply_move(&mut self.board, &mut mv);
        self.move_stack.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    fn unmake(&mut self) -> Option<Move> {
        let mv = self.move_stack.pop()?;
        revert_move(&mut self.board, &mv);
        self.side_to_move = self.side_to_move.opposite();
        Some(mv)
    }
}
