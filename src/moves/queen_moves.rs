use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{can_land_on, is_clear_line, KING_STEPS};
use crate::moves::piece_movement::PieceMovement;
use crate::moves::rook_moves::slider_targets;

/// Rook and bishop lines combined. `KING_STEPS` lists exactly those eight
/// unit directions.
pub struct QueenMovement;

impl PieceMovement for QueenMovement {
    fn candidate_targets(&self, board: &Board, queen: &Piece) -> Vec<Position> {
        slider_targets(board, queen, &KING_STEPS)
    }

    fn is_valid_move(&self, board: &Board, queen: &Piece, target: Position) -> bool {
        self.threatens(board, queen, target) && can_land_on(board, queen.color(), target)
    }

    fn threatens(&self, board: &Board, queen: &Piece, square: Position) -> bool {
        is_clear_line(board, queen.position(), square, &KING_STEPS)
    }
}
