//! Canonical chess-rule constants.
//!
//! Static rule literals used by board setup and the movement rules.

/// Files and ranks per side of the board.
pub const BOARD_SIZE: i8 = 8;

/// Rank distance of a pawn's opening double step.
pub const DOUBLE_STEP_DISTANCE: i8 = 2;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
