use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{can_land_on, offsets_from, KING_STEPS};
use crate::moves::piece_movement::PieceMovement;

/// One step in any direction. Castling is not modelled.
pub struct KingMovement;

impl PieceMovement for KingMovement {
    fn candidate_targets(&self, board: &Board, king: &Piece) -> Vec<Position> {
        offsets_from(king.position(), &KING_STEPS)
            .filter(|&to| can_land_on(board, king.color(), to))
            .collect()
    }

    fn is_valid_move(&self, board: &Board, king: &Piece, target: Position) -> bool {
        self.threatens(board, king, target) && can_land_on(board, king.color(), target)
    }

    fn threatens(&self, _board: &Board, king: &Piece, square: Position) -> bool {
        square.is_on_board() && KING_STEPS.contains(&king.position().delta_to(square))
    }
}
