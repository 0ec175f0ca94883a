//! Shared value types for the board, pieces and move rules.

use std::fmt;

/// A side. Carries the orientation used by every pawn rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of one forward pawn step: +1 for Light, -1 for Dark.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// True for the side that moves first.
    #[inline]
    pub const fn is_first_side(self) -> bool {
        matches!(self, Color::Light)
    }

    /// Rank index pawns of this side start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }
}

/// Piece kind (color is represented separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase FEN letter for the kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let lower = ch.to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.fen_char() == lower)
            .map(|kind| (color, kind))
    }
}

/// Handle to a piece record owned by a `Board`.
///
/// Ids are handed out by `Board::place_piece` and never reused within one
/// board, so comparing ids is comparing piece identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
