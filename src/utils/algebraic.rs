//! Position conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Position`
//! values reused by FEN parsing, rendering and error messages.

use crate::board_location::Position;
use crate::chess_errors::ChessErrors;

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(Position::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert an on-board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_on_board() {
        return Err(ChessErrors::InvalidFileOrRank(
            position.file(),
            position.rank(),
        ));
    }

    let file_char = char::from(b'a' + position.file() as u8);
    let rank_char = char::from(b'1' + position.rank() as u8);

    Ok(format!("{file_char}{rank_char}"))
}
