//! The live game.
//!
//! `GameState` owns the board, the side to move, the per-game settings and
//! the capped undo history. Every mutating operation either succeeds fully
//! or leaves the state untouched. Read-only queries (status, move lists,
//! computer move choice) take `&self` and speculate on private copies.

use tracing::{debug, trace, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::HISTORY_CAPACITY;
use crate::game_state::chess_types::{
    Color, Difficulty, GameMode, GameStatus, Move, Piece, PlayerType, Position,
};
use crate::game_state::game_settings::GameSettings;
use crate::game_state::history_stack::HistoryStack;
use crate::move_generation::game_status::game_status;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::validate_move;
use crate::move_generation::legal_move_generator::{
    self, FastLegalMoveGenerator, GeneratedMove, LegalMoveGenerator, MoveGenerator,
};
use crate::search::board_scoring::MoverMaterialScorer;
use crate::search::minimax::{minimax_search, SearchConfig, SearchResult};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub settings: GameSettings,
    history: HistoryStack<Move, HISTORY_CAPACITY>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Initial position, White to move, default settings, empty history.
    pub fn new_game() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
            settings: GameSettings::default(),
            history: HistoryStack::new(),
        }
    }

    /// Back to the initial position. Settings are kept.
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.turn = Color::White;
        self.history.clear();
        debug!("game reset");
    }

    pub fn set_default_settings(&mut self) {
        self.settings = GameSettings::default();
    }

    /// `1` = one player, `2` = two players.
    pub fn set_game_mode(&mut self, code: i32) -> ChessResult<()> {
        self.settings.mode = GameMode::from_code(code)?;
        Ok(())
    }

    /// `1` (Amateur) through `5` (Expert).
    pub fn set_difficulty(&mut self, code: i32) -> ChessResult<()> {
        self.settings.difficulty = Difficulty::from_code(code)?;
        Ok(())
    }

    /// `0` = Black, `1` = White.
    pub fn set_user_color(&mut self, code: i32) -> ChessResult<()> {
        self.settings.user_color = Color::from_code(code)?;
        Ok(())
    }

    /// Who should produce the next move for the side to move.
    pub fn current_player_type(&self) -> PlayerType {
        match self.settings.mode {
            GameMode::OnePlayer if self.turn != self.settings.user_color => PlayerType::Computer,
            _ => PlayerType::Human,
        }
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.board, self.turn)
    }

    /// Run the full legality pipeline for the side to move without playing.
    pub fn is_legal_move(&self, mv: &Move) -> ChessResult<()> {
        let mut scratch = self.board;
        validate_move(&mut scratch, mv, self.turn)
    }

    /// Validate and play a move for the side to move.
    ///
    /// On success the move (with `captured` and `player` filled in) is
    /// pushed onto the history and the turn passes to the opponent. On
    /// failure nothing changes.
    pub fn commit_move(&mut self, from: Position, to: Position) -> ChessResult<Move> {
        let mut mv = Move::new(from, to);
        validate_move(&mut self.board, &mv, self.turn)?;

        apply_move(&mut self.board, &mut mv);
        if let Some(forgotten) = self.history.push(mv) {
            warn!(mv = %forgotten, "history full, oldest move can no longer be undone");
        }
        self.turn = self.turn.opposite();

        debug!(
            mv = %mv,
            captured = ?mv.captured.map(|piece| piece.kind),
            history = self.history.len(),
            "move committed"
        );
        Ok(mv)
    }

    /// Take back the most recent recorded move.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let mv = self.history.pop().ok_or(ChessError::EmptyHistory)?;
        revert_move(&mut self.board, &mv);
        self.turn = self.turn.opposite();

        debug!(mv = %mv, history = self.history.len(), "move undone");
        Ok(mv)
    }

    /// Legal moves of the piece on `origin`, for whichever side owns it.
    /// The turn is neither read nor changed.
    pub fn legal_moves_from(&self, origin: Position) -> ChessResult<Vec<GeneratedMove>> {
        legal_move_generator::legal_moves_from(&self.board, origin)
    }

    /// Every legal move of the side to move, in scan order.
    pub fn all_legal_moves(&self) -> Vec<GeneratedMove> {
        LegalMoveGenerator.generate_legal_moves(&self.board, self.turn)
    }

    pub fn any_legal_move(&self) -> bool {
        legal_move_generator::any_legal_move(&self.board, self.turn)
    }

    /// Minimax at the configured difficulty. The state is not modified.
    pub fn choose_computer_move(&self) -> SearchResult {
        let config = SearchConfig {
            depth: self.settings.difficulty.search_depth(),
        };
        trace!(depth = config.depth, side = ?self.turn, "choosing computer move");
        minimax_search(self, &FastLegalMoveGenerator, &MoverMaterialScorer, config)
    }

    /// Remove every piece. History is dropped; the turn is kept.
    pub fn clear_board(&mut self) {
        self.board = Board::empty();
        self.history.clear();
    }

    /// Place or remove a piece, returning what was on the square.
    /// History is dropped since it no longer describes the board.
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) -> ChessResult<Option<Piece>> {
        if !pos.is_on_board() {
            return Err(ChessError::InvalidPosition(pos));
        }
        self.history.clear();
        Ok(self.board.set_piece(pos, piece))
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.piece_at(pos)
    }

    /// Number of moves that can currently be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Recorded moves from oldest to newest.
    pub fn history(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter()
    }
}
