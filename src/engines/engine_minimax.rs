//! Minimax engine.
//!
//! Wraps `minimax_search` behind the `Engine` trait. Depth comes from the
//! configured difficulty unless the caller overrides it through `GoParams`.

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Difficulty;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, MoverMaterialScorer};
use crate::search::minimax::{minimax_search, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = MoverMaterialScorer> {
    difficulty: Difficulty,
    scorer: S,
}

impl MinimaxEngine<MoverMaterialScorer> {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_scorer(difficulty, MoverMaterialScorer)
    }
}

impl Default for MinimaxEngine<MoverMaterialScorer> {
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(difficulty: Difficulty, scorer: S) -> Self {
        Self { difficulty, scorer }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.difficulty.search_depth()),
        };
        let result = minimax_search(game_state, &FastLegalMoveGenerator, &self.scorer, config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            best_score: Some(result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} score {}",
            config.depth, result.nodes, result.best_score
        ));
        if let Some(mv) = result.best_move {
            out.info_lines
                .push(format!("info string minimax_engine best_move {mv}"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::{Color, Difficulty, Piece, PieceKind, Position};
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::MaterialBalanceScorer;

    #[test]
    fn depth_override_takes_precedence() {
        let state = GameState::new_game();
        let mut engine = MinimaxEngine::new(Difficulty::Expert);
        let out = engine
            .choose_move(&state, &GoParams { depth: Some(1) })
            .expect("search should not fail");
        assert!(out.best_move.is_some());
        assert!(out.info_lines[0].starts_with("info depth 1 nodes "));
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut state = GameState::new_game();
        state.clear_board();
        for (pos, kind, color) in [
            (Position::new(4, 0), PieceKind::King, Color::White),
            (Position::new(0, 3), PieceKind::Bishop, Color::White),
            (Position::new(4, 7), PieceKind::King, Color::Black),
            (Position::new(3, 6), PieceKind::Queen, Color::Black),
        ] {
            state
                .set_piece(pos, Some(Piece::new(kind, color)))
                .expect("square should be on board");
        }

        let mut engine = MinimaxEngine::with_scorer(Difficulty::Amateur, MaterialBalanceScorer);
        let out = engine
            .choose_move(&state, &GoParams::default())
            .expect("search should not fail");
        let mv = out.best_move.expect("white has moves");
        assert_eq!(mv.to, Position::new(3, 6));
    }

    #[test]
    fn no_move_when_mated() {
        let mut state = GameState::new_game();
        for (from, to) in [((5, 1), (5, 2)), ((4, 6), (4, 4)), ((6, 1), (6, 3)), ((3, 7), (7, 3))] {
            state
                .commit_move(Position::new(from.0, from.1), Position::new(to.0, to.1))
                .expect("scripted move should be legal");
        }
        let out = MinimaxEngine::default()
            .choose_move(&state, &GoParams::default())
            .expect("search should not fail");
        assert_eq!(out.best_move, None);
        assert_eq!(out.best_score, Some(-999));
    }
}
