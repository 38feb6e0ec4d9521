//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Position`
//! values, plus the four-character move form (`e2e4`) used by the harness
//! and diagnostics.

use crate::game_state::chess_types::{Move, Position};

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Position::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert an on-board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> Result<String, String> {
    if !position.is_on_board() {
        return Err(format!(
            "Position out of bounds: ({}, {})",
            position.file, position.rank
        ));
    }

    let file_char = char::from(b'a' + position.file as u8);
    let rank_char = char::from(b'1' + position.rank as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a coordinate move such as "g1f3" into an unapplied `Move`.
pub fn algebraic_to_move(text: &str) -> Result<Move, String> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("Invalid coordinate move: {text}"));
    }
    let from = algebraic_to_position(&text[..2])?;
    let to = algebraic_to_position(&text[2..])?;
    Ok(Move::new(from, to))
}
