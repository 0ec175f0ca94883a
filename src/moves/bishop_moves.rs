use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{can_land_on, is_clear_line, DIAGONAL_DIRECTIONS};
use crate::moves::piece_movement::PieceMovement;
use crate::moves::rook_moves::slider_targets;

pub struct BishopMovement;

impl PieceMovement for BishopMovement {
    fn candidate_targets(&self, board: &Board, bishop: &Piece) -> Vec<Position> {
        slider_targets(board, bishop, &DIAGONAL_DIRECTIONS)
    }

    fn is_valid_move(&self, board: &Board, bishop: &Piece, target: Position) -> bool {
        self.threatens(board, bishop, target) && can_land_on(board, bishop.color(), target)
    }

    fn threatens(&self, board: &Board, bishop: &Piece, square: Position) -> bool {
        is_clear_line(board, bishop.position(), square, &DIAGONAL_DIRECTIONS)
    }
}
