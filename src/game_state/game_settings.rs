//! Per-game settings chosen before play starts.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Color, Difficulty, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Color played by the human in one-player mode.
    pub user_color: Color,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::OnePlayer,
            difficulty: Difficulty::Easy,
            user_color: Color::White,
        }
    }
}

impl GameSettings {
    /// Build settings from raw codes, rejecting any out-of-range value.
    pub fn from_codes(mode: i32, difficulty: i32, user_color: i32) -> ChessResult<Self> {
        Ok(Self {
            mode: GameMode::from_code(mode)?,
            difficulty: Difficulty::from_code(difficulty)?,
            user_color: Color::from_code(user_color)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GameSettings;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, Difficulty, GameMode};

    #[test]
    fn defaults_are_one_player_easy_white() {
        let settings = GameSettings::default();
        assert_eq!(settings.mode, GameMode::OnePlayer);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.user_color, Color::White);
    }

    #[test]
    fn from_codes_reports_the_offending_setting() {
        let settings = GameSettings::from_codes(2, 4, 0).expect("codes should be valid");
        assert_eq!(settings.mode, GameMode::TwoPlayer);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.user_color, Color::Black);

        assert_eq!(
            GameSettings::from_codes(1, 9, 1),
            Err(ChessError::InvalidArgument {
                setting: "difficulty",
                value: 9
            })
        );
    }
}
