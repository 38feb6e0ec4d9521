//! Value types shared by the board, rules, generator and search.
//!
//! Empty squares are `None` rather than a dedicated "no piece" variant, so an
//! empty square can never carry a color.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank direction a pawn of this color advances in.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Raw code used by settings collaborators (Black = 0, White = 1).
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    pub fn from_code(code: i32) -> ChessResult<Self> {
        match code {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            value => Err(ChessError::InvalidArgument {
                setting: "user color",
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the static evaluation.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Off-board values are representable so they can be
/// reported back to the caller instead of being unconstructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0
            && self.file < Board::SIZE as i8
            && self.rank >= 0
            && self.rank < Board::SIZE as i8
    }

    /// All 64 squares, file-major (a1, a2, .., a8, b1, ..).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Board::SIZE as i8)
            .flat_map(|file| (0..Board::SIZE as i8).map(move |rank| Position::new(file, rank)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file_char = char::from(b'a' + self.file as u8);
            let rank_char = char::from(b'1' + self.rank as u8);
            write!(f, "{file_char}{rank_char}")
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// A move request or a move record.
///
/// `captured` and `player` are filled in when the move is applied to a board;
/// a freshly built request has neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    pub player: Option<Color>,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: None,
            player: None,
        }
    }

    #[inline]
    pub fn file_delta(&self) -> i8 {
        self.to.file - self.from.file
    }

    #[inline]
    pub fn rank_delta(&self) -> i8 {
        self.to.rank - self.from.rank
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Classification attached by move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Standard,
    Capture,
    /// The move puts the opponent's king in check.
    Threatened,
    /// Capture that also gives check.
    Both,
}

impl MoveKind {
    #[inline]
    pub const fn from_flags(is_capture: bool, gives_check: bool) -> Self {
        match (is_capture, gives_check) {
            (true, true) => MoveKind::Both,
            (false, true) => MoveKind::Threatened,
            (true, false) => MoveKind::Capture,
            (false, false) => MoveKind::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Check,
    Checkmate,
    /// Stalemate: no legal move and not in check.
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    OnePlayer,
    TwoPlayer,
}

impl GameMode {
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            GameMode::OnePlayer => 1,
            GameMode::TwoPlayer => 2,
        }
    }

    pub fn from_code(code: i32) -> ChessResult<Self> {
        match code {
            1 => Ok(GameMode::OnePlayer),
            2 => Ok(GameMode::TwoPlayer),
            value => Err(ChessError::InvalidArgument {
                setting: "game mode",
                value,
            }),
        }
    }
}

/// Computer strength. Ordered; the code doubles as the search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Amateur,
    Easy,
    Moderate,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Amateur,
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Difficulty::Amateur => 1,
            Difficulty::Easy => 2,
            Difficulty::Moderate => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    #[inline]
    pub const fn search_depth(self) -> u8 {
        self.code() as u8
    }

    pub fn from_code(code: i32) -> ChessResult<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.code() == code)
            .ok_or(ChessError::InvalidArgument {
                setting: "difficulty",
                value: code,
            })
    }
}

/// Who is expected to produce the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    Human,
    Computer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display_uses_algebraic_on_board() {
        assert_eq!(Position::new(4, 1).to_string(), "e2");
        assert_eq!(Position::new(8, 0).to_string(), "(8, 0)");
    }

    #[test]
    fn all_positions_are_file_major() {
        let squares: Vec<Position> = Position::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Position::new(0, 0));
        assert_eq!(squares[1], Position::new(0, 1));
        assert_eq!(squares[8], Position::new(1, 0));
    }

    #[test]
    fn setting_codes_reject_out_of_range_values() {
        assert_eq!(Difficulty::from_code(3), Ok(Difficulty::Moderate));
        assert!(matches!(
            Difficulty::from_code(0),
            Err(ChessError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Difficulty::from_code(6),
            Err(ChessError::InvalidArgument { .. })
        ));
        assert_eq!(GameMode::from_code(2), Ok(GameMode::TwoPlayer));
        assert!(GameMode::from_code(3).is_err());
        assert_eq!(Color::from_code(0), Ok(Color::Black));
        assert!(Color::from_code(2).is_err());
    }

    #[test]
    fn move_kind_combines_flags() {
        assert_eq!(MoveKind::from_flags(true, true), MoveKind::Both);
        assert_eq!(MoveKind::from_flags(false, true), MoveKind::Threatened);
        assert_eq!(MoveKind::from_flags(true, false), MoveKind::Capture);
        assert_eq!(MoveKind::from_flags(false, false), MoveKind::Standard);
    }
}
