//! Attack queries and the king-safety filter.
//!
//! `is_square_attacked` asks every enemy piece whether it threatens a square
//! by its raw geometry. `SimulatedKingSafety` uses it on a scratch copy of the
//! board to decide whether a candidate move would leave the mover's own king
//! capturable.

use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::plan_move;
use crate::moves::piece_movement::movement_for;

/// Decides whether moving `piece` to `target` would expose its own king.
pub trait KingSafetyOracle {
    fn would_expose_own_king(&self, board: &Board, piece: &Piece, target: Position) -> bool;
}

/// Plays the move on a copy of the board and looks for attackers on the
/// mover's king afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedKingSafety;

impl KingSafetyOracle for SimulatedKingSafety {
    fn would_expose_own_king(&self, board: &Board, piece: &Piece, target: Position) -> bool {
        let mut scratch = board.clone();
        let plan = plan_move(board, piece, target);
        if scratch.apply(&plan).is_err() {
            // Not a move the board can represent, so it cannot be played safely.
            return true;
        }
        is_king_in_check(&scratch, piece.color())
    }
}

/// Never reports a king as exposed. Useful for analysing raw movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreKingSafety;

impl KingSafetyOracle for IgnoreKingSafety {
    fn would_expose_own_king(&self, _board: &Board, _piece: &Piece, _target: Position) -> bool {
        false
    }
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board.king_of(color).map(Piece::position)
}

/// A side without a king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|piece| movement_for(piece.variant()).threatens(board, piece, square))
}

pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
) -> Vec<(Position, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|piece| movement_for(piece.variant()).threatens(board, piece, square))
        .map(|piece| (piece.position(), piece.kind()))
        .collect()
}
