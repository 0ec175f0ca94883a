use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

/// A square on the board, addressed by zero-based `(file, rank)`.
///
/// `a1` is `(0, 0)` and `h8` is `(7, 7)`. The value is immutable; moving a
/// location produces a new one. `Position::new` does not range-check so that
/// off-board coordinates can be described and then rejected by the rules
/// (`is_on_board` is false for them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: i8,
    rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Build a position that is guaranteed to be on the board.
    pub fn try_new(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        let position = Self::new(file, rank);
        if position.is_on_board() {
            Ok(position)
        } else {
            Err(ChessErrors::InvalidFileOrRank(file, rank))
        }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Moves a board location by a specified file and rank offset.
    ///
    /// # Returns
    ///
    /// * `Result<Position, ChessErrors>` - the new location if it is on the
    ///   board, otherwise `TriedToMoveOutOfBounds`.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        let moved = Self::new(self.file.saturating_add(d_file), self.rank.saturating_add(d_rank));
        if moved.is_on_board() {
            Ok(moved)
        } else {
            Err(ChessErrors::TriedToMoveOutOfBounds(self, d_file, d_rank))
        }
    }

    /// File and rank distance to `other` as `(d_file, d_rank)`.
    #[inline]
    pub const fn delta_to(self, other: Position) -> (i8, i8) {
        (
            other.file.saturating_sub(self.file),
            other.rank.saturating_sub(self.rank),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match position_to_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "({},{})", self.file, self.rank),
        }
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}
