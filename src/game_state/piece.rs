//! Piece records stored in a `Board`'s arena.
//!
//! A `Piece` is created once per placement and lives until it is captured.
//! Its position and move counter only change through `Board::apply`; the
//! pawn-specific flags only change through move execution or the explicit
//! en-passant flag setter.

use crate::board_location::Position;
use crate::game_state::chess_types::{Color, PieceId, PieceKind};

/// History flags carried by a pawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnFlags {
    /// False only while the pawn sits on its home rank and has never moved.
    pub has_moved: bool,
    /// Whether the pawn's most recent move was an en-passant capture.
    pub has_made_en_passant: bool,
}

/// Closed set of piece variants with their variant-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceVariant {
    Pawn(PawnFlags),
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceVariant {
    /// Fresh variant state for a piece of `kind` placed by `color` at `position`.
    pub fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        match kind {
            PieceKind::Pawn => PieceVariant::Pawn(PawnFlags {
                has_moved: position.rank() != color.pawn_home_rank(),
                has_made_en_passant: false,
            }),
            PieceKind::Knight => PieceVariant::Knight,
            PieceKind::Bishop => PieceVariant::Bishop,
            PieceKind::Rook => PieceVariant::Rook,
            PieceKind::Queen => PieceVariant::Queen,
            PieceKind::King => PieceVariant::King,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        match self {
            PieceVariant::Pawn(_) => PieceKind::Pawn,
            PieceVariant::Knight => PieceKind::Knight,
            PieceVariant::Bishop => PieceKind::Bishop,
            PieceVariant::Rook => PieceKind::Rook,
            PieceVariant::Queen => PieceKind::Queen,
            PieceVariant::King => PieceKind::King,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) color: Color,
    pub(crate) position: Position,
    pub(crate) move_count: u32,
    pub(crate) variant: PieceVariant,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            id,
            color,
            position,
            move_count: 0,
            variant: PieceVariant::new(kind, color, position),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of moves this piece has completed.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.variant.kind()
    }

    #[inline]
    pub fn variant(&self) -> &PieceVariant {
        &self.variant
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        matches!(self.variant, PieceVariant::Pawn(_))
    }

    /// Pawn flags, or `None` for every other variant.
    #[inline]
    pub fn pawn_flags(&self) -> Option<PawnFlags> {
        match self.variant {
            PieceVariant::Pawn(flags) => Some(flags),
            _ => None,
        }
    }

    /// For pawns, whether the double step has been spent. Other pieces report
    /// whether they have completed any move.
    pub fn has_moved(&self) -> bool {
        match self.variant {
            PieceVariant::Pawn(flags) => flags.has_moved,
            _ => self.move_count > 0,
        }
    }

    /// Whether the piece's most recent move was an en-passant capture.
    pub fn has_made_en_passant(&self) -> bool {
        self.pawn_flags()
            .map(|flags| flags.has_made_en_passant)
            .unwrap_or(false)
    }

    /// Overwrite the en-passant flag (used when rewinding a move). No effect
    /// on non-pawns.
    pub fn set_has_made_en_passant(&mut self, value: bool) {
        if let PieceVariant::Pawn(flags) = &mut self.variant {
            flags.has_made_en_passant = value;
        }
    }

    /// Record the end of a completed move in the variant flags.
    pub(crate) fn record_move_flags(&mut self, was_en_passant: bool) {
        if let PieceVariant::Pawn(flags) = &mut self.variant {
            flags.has_moved = true;
            flags.has_made_en_passant = was_en_passant;
        }
    }

    /// FEN letter: uppercase for Light, lowercase for Dark.
    pub fn fen_char(&self) -> char {
        let ch = self.kind().fen_char();
        match self.color {
            Color::Light => ch.to_ascii_uppercase(),
            Color::Dark => ch,
        }
    }
}
