//! Pawn movement: straight advance, opening double step, forward diagonal
//! capture and en passant.
//!
//! Every rule is oriented by the owner's `forward_direction`, so the same code
//! serves both sides.

use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::DOUBLE_STEP_DISTANCE;
use crate::game_state::piece::Piece;
use crate::moves::piece_movement::PieceMovement;

pub struct PawnMovement;

impl PieceMovement for PawnMovement {
    /// One forward, forward-left, forward-right, then the double step while
    /// the pawn has not moved.
    fn candidate_targets(&self, _board: &Board, pawn: &Piece) -> Vec<Position> {
        let from = pawn.position();
        let dir = pawn.color().forward_direction();
        let mut out = Vec::with_capacity(4);

        for d_file in [0, -1, 1] {
            if let Ok(to) = from.offset(d_file, dir) {
                out.push(to);
            }
        }
        if !pawn.has_moved() {
            if let Ok(to) = from.offset(0, DOUBLE_STEP_DISTANCE * dir) {
                out.push(to);
            }
        }

        out
    }

    fn is_valid_move(&self, board: &Board, pawn: &Piece, target: Position) -> bool {
        if !target.is_on_board() {
            return false;
        }
        if target.file() != pawn.position().file() {
            return is_valid_capture_move(board, pawn, target);
        }
        is_valid_straight_move(board, pawn, target)
    }

    fn threatens(&self, _board: &Board, pawn: &Piece, square: Position) -> bool {
        is_forward_diagonal(pawn, square)
    }
}

/// One file away and one rank forward.
#[inline]
pub fn is_forward_diagonal(pawn: &Piece, square: Position) -> bool {
    let (d_file, d_rank) = pawn.position().delta_to(square);
    d_file.unsigned_abs() == 1 && d_rank == pawn.color().forward_direction()
}

fn is_valid_straight_move(board: &Board, pawn: &Piece, target: Position) -> bool {
    let from = pawn.position();
    if from.file() != target.file() {
        return false;
    }
    if !board.is_empty_at(target) {
        return false;
    }

    let dir = pawn.color().forward_direction();
    let (_, d_rank) = from.delta_to(target);
    if d_rank == dir {
        return true;
    }

    // The double step may not jump over anything.
    !pawn.has_moved()
        && d_rank == DOUBLE_STEP_DISTANCE * dir
        && from
            .offset(0, dir)
            .is_ok_and(|middle| board.is_empty_at(middle))
}

fn is_valid_capture_move(board: &Board, pawn: &Piece, target: Position) -> bool {
    if !is_forward_diagonal(pawn, target) {
        return false;
    }
    if move_is_en_passant(board, pawn, target) {
        return true;
    }
    match board.occupant_at(target) {
        Some(occupant) => occupant.color() != pawn.color(),
        None => false,
    }
}

/// The pawn that `pawn` would capture en passant by moving to `target`.
///
/// Qualifies only when the target is an empty forward diagonal, the square
/// behind it holds an enemy pawn, that pawn is the last piece moved, its only
/// move so far was that last move, and that move was a straight double step.
pub fn en_passant_victim<'a>(board: &'a Board, pawn: &Piece, target: Position) -> Option<&'a Piece> {
    if !target.is_on_board() || !is_forward_diagonal(pawn, target) {
        return None;
    }
    if !board.is_empty_at(target) {
        return None;
    }

    let behind = target.offset(0, -pawn.color().forward_direction()).ok()?;
    let victim = board.occupant_at(behind)?;
    if !victim.is_pawn() || victim.color() == pawn.color() {
        return None;
    }

    let last = board.last_move()?;
    if last.piece != victim.id() || victim.move_count() != 1 {
        return None;
    }
    let (d_file, d_rank) = last.from.delta_to(last.to);
    if d_file != 0 || d_rank.unsigned_abs() != DOUBLE_STEP_DISTANCE.unsigned_abs() {
        return None;
    }

    Some(victim)
}

#[inline]
pub fn move_is_en_passant(board: &Board, pawn: &Piece, target: Position) -> bool {
    en_passant_victim(board, pawn, target).is_some()
}
