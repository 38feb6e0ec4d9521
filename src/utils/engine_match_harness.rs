//! Engine-vs-engine self-play for local testing.
//!
//! Every engine move goes through `GameState::commit_move`, so an engine
//! that proposes an illegal move fails the match with the rejection error.
//! Openings are a seeded run of random legal plies; a series alternates
//! colors deterministically from its base seed.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 6,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesGame {
    pub seed: u64,
    pub player1_is_white: bool,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub engine_moves: u32,
    pub elapsed_ms: u128,
    pub games: Vec<SeriesGame>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_ms = if self.engine_moves == 0 {
            0.0
        } else {
            self.elapsed_ms as f64 / f64::from(self.engine_moves)
        };
        format!(
            "games={} player1_wins={} player2_wins={} draws={} moves={} avg_ms_per_move={avg_ms:.3}",
            self.games.len(),
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.engine_moves,
        )
    }
}

/// Play a seeded match from the initial position.
pub fn play_engine_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    let mut state = GameState::new_game();
    state.set_game_mode(2)?;
    let opening_moves = play_random_opening(&mut state, seed, &config)?;
    play_engine_match_from_state(white, black, state, opening_moves, config)
}

/// Play from a caller-provided state; `opening_moves` is carried into the
/// result untouched.
pub fn play_engine_match_from_state(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    mut state: GameState,
    opening_moves: Vec<String>,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    white.new_game();
    black.new_game();

    let mut played_moves = Vec::new();
    let mut outcome = terminal_outcome(&state);

    while outcome.is_none() && played_moves.len() < usize::from(config.max_plies) {
        let engine: &mut dyn Engine = match state.turn {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let out = engine.choose_move(&state, &config.go_params)?;
        let Some(chosen) = out
            .best_move
            .or_else(|| state.all_legal_moves().first().map(|generated| generated.mv))
        else {
            break;
        };

        let played = state.commit_move(chosen.from, chosen.to)?;
        debug!(engine = engine.name(), mv = %played, "engine move");
        played_moves.push(played.to_string());
        outcome = terminal_outcome(&state);
    }

    Ok(MatchResult {
        outcome: outcome.unwrap_or(MatchOutcome::DrawMaxPlies),
        final_state: state,
        opening_moves,
        played_moves,
    })
}

/// Play `config.games` matches between two engine factories.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats::default();
    let mut color_rng = StdRng::seed_from_u64(config.base_seed);
    let started = Instant::now();

    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game));
        let player1_is_white = color_rng.random_bool(0.5);
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
        };

        match result.outcome.winner() {
            Some(Color::White) if player1_is_white => stats.player1_wins += 1,
            Some(Color::Black) if !player1_is_white => stats.player1_wins += 1,
            Some(_) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }
        stats.engine_moves += result.played_moves.len() as u32;
        stats.games.push(SeriesGame {
            seed,
            player1_is_white,
            outcome: result.outcome,
        });

        info!(
            game = game + 1,
            seed,
            player1_is_white,
            outcome = ?result.outcome,
            plies = result.played_moves.len(),
            "game finished"
        );
    }

    stats.elapsed_ms = started.elapsed().as_millis();
    Ok(stats)
}

fn terminal_outcome(state: &GameState) -> Option<MatchOutcome> {
    match state.status() {
        GameStatus::Checkmate => Some(match state.turn {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }),
        GameStatus::Draw => Some(MatchOutcome::DrawStalemate),
        GameStatus::Running | GameStatus::Check => None,
    }
}

fn play_random_opening(
    state: &mut GameState,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = config.opening_min_plies.min(config.opening_max_plies);
    let high = config.opening_min_plies.max(config.opening_max_plies);
    let plies = rng.random_range(low..=high);

    let mut moves = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        let legal = state.all_legal_moves();
        if legal.is_empty() {
            break;
        }
        let chosen = legal[rng.random_range(0..legal.len())].mv;
        moves.push(state.commit_move(chosen.from, chosen.to)?.to_string());
    }
    Ok(moves)
}
