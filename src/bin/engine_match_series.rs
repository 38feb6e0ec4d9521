//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `RUST_LOG=info cargo run --release --bin engine_match_series`
//!
//! Environment overrides:
//! `MINIMAX_CHESS_GAMES`, `MINIMAX_CHESS_SEED`, `MINIMAX_CHESS_MAX_PLIES`,
//! `MINIMAX_CHESS_P1_DIFFICULTY`, `MINIMAX_CHESS_P2_DIFFICULTY` (1-5, or 0
//! for the random engine).

use std::str::FromStr;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use minimax_chess::chess_errors::ChessResult;
use minimax_chess::engines::engine_minimax::MinimaxEngine;
use minimax_chess::engines::engine_random::RandomEngine;
use minimax_chess::engines::engine_trait::Engine;
use minimax_chess::game_state::chess_types::Difficulty;
use minimax_chess::utils::engine_match_harness::{
    play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use minimax_chess::utils::render_game_state::render_game_state;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn engine_factory(code: i32) -> ChessResult<impl Fn() -> Box<dyn Engine>> {
    let difficulty = match code {
        0 => None,
        code => Some(Difficulty::from_code(code)?),
    };
    Ok(move || match difficulty {
        Some(difficulty) => Box::new(MinimaxEngine::new(difficulty)) as Box<dyn Engine>,
        None => Box::new(RandomEngine::new()) as Box<dyn Engine>,
    })
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let player1_code = env_or("MINIMAX_CHESS_P1_DIFFICULTY", 2);
    let player2_code = env_or("MINIMAX_CHESS_P2_DIFFICULTY", 0);
    let player1 = engine_factory(player1_code)?;
    let player2 = engine_factory(player2_code)?;

    let per_game = MatchConfig {
        max_plies: env_or("MINIMAX_CHESS_MAX_PLIES", 120),
        opening_min_plies: 2,
        opening_max_plies: 6,
        ..MatchConfig::default()
    };
    let config = MatchSeriesConfig {
        games: env_or("MINIMAX_CHESS_GAMES", 6),
        base_seed: env_or("MINIMAX_CHESS_SEED", 1234),
        per_game,
    };

    let started = Local::now();
    let stats = play_engine_match_series(&player1, &player2, config)?;

    println!(
        "[{}] player1={} player2={}",
        started.format("%Y-%m-%d %H:%M:%S"),
        player1_code,
        player2_code
    );
    println!("{}", stats.report());
    for game in &stats.games {
        println!(
            "seed={} player1={} outcome={:?}",
            game.seed,
            if game.player1_is_white { "white" } else { "black" },
            game.outcome
        );
    }

    // One exhibition game with player1 as White, to eyeball the final position.
    let mut white = player1();
    let mut black = player2();
    let exhibition = play_engine_match(white.as_mut(), black.as_mut(), config.base_seed, per_game)?;
    println!(
        "\nexhibition: {:?} after {} plies\n{}",
        exhibition.outcome,
        exhibition.opening_moves.len() + exhibition.played_moves.len(),
        render_game_state(&exhibition.final_state)
    );
    println!(
        "finished in {} ms",
        (Local::now() - started).num_milliseconds()
    );
    Ok(())
}
