//! Full legal move generation pipeline.
//!
//! Per piece: take the variant's geometric candidates, keep the ones its own
//! movement rules accept, and drop any that would leave the mover's king in
//! check. Per side: run that for every piece and play each survivor on a copy
//! of the board.

use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::plan_move;
use crate::move_generation::legal_move_checks::{
    is_king_in_check, KingSafetyOracle, SimulatedKingSafety,
};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::piece_movement::movement_for;

/// Whether `piece` may move to `target` by its own movement rules. King safety
/// is not considered. Has no side effects.
#[inline]
pub fn is_valid_move(board: &Board, piece: &Piece, target: Position) -> bool {
    movement_for(piece.variant()).is_valid_move(board, piece, target)
}

/// Whether `piece` geometrically threatens `square`, whatever stands there.
#[inline]
pub fn threatening(board: &Board, piece: &Piece, square: Position) -> bool {
    movement_for(piece.variant()).threatens(board, piece, square)
}

/// Legal destinations of `piece`, in candidate order.
pub fn legal_moves(board: &Board, piece: &Piece) -> Vec<Position> {
    legal_moves_with(board, piece, &SimulatedKingSafety)
}

/// Legal destinations of `piece` under a caller-chosen king-safety oracle.
///
/// The board is only read. Calling this twice without an intervening move
/// yields the same list.
pub fn legal_moves_with<O: KingSafetyOracle + ?Sized>(
    board: &Board,
    piece: &Piece,
    oracle: &O,
) -> Vec<Position> {
    let movement = movement_for(piece.variant());
    movement
        .candidate_targets(board, piece)
        .into_iter()
        .filter(|&target| movement.is_valid_move(board, piece, target))
        .filter(|&target| !oracle.would_expose_own_king(board, piece, target))
        .collect()
}

/// Side-wide generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator<O = SimulatedKingSafety> {
    oracle: O,
}

impl LegalMoveGenerator<SimulatedKingSafety> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: KingSafetyOracle> LegalMoveGenerator<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }
}

impl<O: KingSafetyOracle + Send + Sync> MoveGenerator for LegalMoveGenerator<O> {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut legal = Vec::<GeneratedMove>::with_capacity(48);

        for piece in board.pieces_of(side) {
            for target in legal_moves_with(board, piece, &self.oracle) {
                let plan = plan_move(board, piece, target);
                let captured = plan
                    .captured
                    .and_then(|capture| board.piece(capture.piece))
                    .map(Piece::kind);

                let mut next = board.clone();
                next.apply(&plan)?;

                legal.push(GeneratedMove {
                    piece: piece.id(),
                    moved_kind: piece.kind(),
                    from: plan.from,
                    to: plan.to,
                    captured,
                    en_passant: plan.en_passant,
                    gives_check: is_king_in_check(&next, side.opposite()),
                    board_after_move: next,
                });
            }
        }

        Ok(legal)
    }
}
