//! Errors used throughout the move-legality core.
//!
//! `ChessErrors` is the single error type across the crate so that board
//! setup, move generation and move execution can all be propagated with `?`
//! and matched in one place.
//!
//! Usage guidelines:
//! - Parsing and setup variants (`InvalidAlgebraicString`, `InvalidFENtoken`,
//!   `BoardLocationOccupied`, ...) are recoverable and suitable for showing to
//!   a user.
//! - `IllegalMove` is the normal rejection of `move_piece`; the board is left
//!   unchanged and the caller should ask for the legal moves again.
//! - `CorruptedBoard` signals a broken board invariant (for example two pieces
//!   claiming one square). It indicates a bug and is not meant to be recovered
//!   from by normal library users.

use thiserror::Error;

use crate::board_location::Position;
use crate::game_state::chess_types::PieceId;

/// Unified error type for the move-legality core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Attempted to move a location by `(d_file, d_rank)` which would place it
    /// off the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    #[error("moving {0} by ({1}, {2}) leaves the board")]
    TriedToMoveOutOfBounds(Position, i8, i8),

    /// Invalid file or rank indices were provided (outside 0..=7).
    ///
    /// Payload: (file_index, rank_index) zero-based.
    #[error("invalid file or rank: ({0}, {1})")]
    InvalidFileOrRank(i8, i8),

    /// A single character used during algebraic parsing was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic square string failed to parse.
    #[error("invalid algebraic square \"{0}\"")]
    InvalidAlgebraicString(String),

    /// Attempted to place a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    BoardLocationOccupied(Position),

    /// Attempted to view, remove or edit a square that is empty.
    #[error("square {0} is empty")]
    TryToViewOrEditEmptySquare(Position),

    /// The id does not refer to a piece that is still on the board.
    #[error("no piece with id {0} is on the board")]
    UnknownPiece(PieceId),

    /// `move_piece` was asked for a target outside the piece's legal moves.
    #[error("illegal move for piece {piece}: {from} -> {to}")]
    IllegalMove {
        piece: PieceId,
        from: Position,
        to: Position,
    },

    /// Found an unexpected token while parsing a FEN string.
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// FEN string had malformed structure.
    #[error("malformed FEN: {0}")]
    InvalidFENstringForm(String),

    /// The board's occupancy grid and piece records disagree. Indicates a bug
    /// in whoever mutated the board.
    #[error("board invariant violated: {0}")]
    CorruptedBoard(String),
}
