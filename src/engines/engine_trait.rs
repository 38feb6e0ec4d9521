//! Engine abstraction used by the self-play harness.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be swapped behind a single trait interface.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the engine's own depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Score for the side that searched, when the engine computes one.
    pub best_score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
