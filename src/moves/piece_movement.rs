//! Shared movement contract implemented once per piece variant.
//!
//! The rules here are purely geometric plus occupancy: none of them consult
//! whose turn it is or whether the mover's king ends up in check. King safety
//! is layered on top by `move_generation::legal_move_generator`.

use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::piece::{Piece, PieceVariant};
use crate::moves::bishop_moves::BishopMovement;
use crate::moves::king_moves::KingMovement;
use crate::moves::knight_moves::KnightMovement;
use crate::moves::pawn_moves::PawnMovement;
use crate::moves::queen_moves::QueenMovement;
use crate::moves::rook_moves::RookMovement;

pub trait PieceMovement: Send + Sync {
    /// Geometric destinations worth testing, in a fixed order. May contain
    /// squares that `is_valid_move` rejects.
    fn candidate_targets(&self, board: &Board, piece: &Piece) -> Vec<Position>;

    /// Whether `piece` may move to `target` by its own movement and capture
    /// rules. Off-board targets are always rejected.
    fn is_valid_move(&self, board: &Board, piece: &Piece, target: Position) -> bool;

    /// Whether `piece` could capture on `square` by geometry alone, whatever
    /// currently stands there.
    fn threatens(&self, board: &Board, piece: &Piece, square: Position) -> bool;
}

/// Movement rules for a piece's variant.
pub fn movement_for(variant: &PieceVariant) -> &'static dyn PieceMovement {
    match variant {
        PieceVariant::Pawn(_) => &PawnMovement,
        PieceVariant::Knight => &KnightMovement,
        PieceVariant::Bishop => &BishopMovement,
        PieceVariant::Rook => &RookMovement,
        PieceVariant::Queen => &QueenMovement,
        PieceVariant::King => &KingMovement,
    }
}
