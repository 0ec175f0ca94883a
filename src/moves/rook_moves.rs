use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{
    can_land_on, is_clear_line, walk_ray, ORTHOGONAL_DIRECTIONS,
};
use crate::moves::piece_movement::PieceMovement;

pub struct RookMovement;

impl PieceMovement for RookMovement {
    fn candidate_targets(&self, board: &Board, rook: &Piece) -> Vec<Position> {
        slider_targets(board, rook, &ORTHOGONAL_DIRECTIONS)
    }

    fn is_valid_move(&self, board: &Board, rook: &Piece, target: Position) -> bool {
        self.threatens(board, rook, target) && can_land_on(board, rook.color(), target)
    }

    fn threatens(&self, board: &Board, rook: &Piece, square: Position) -> bool {
        is_clear_line(board, rook.position(), square, &ORTHOGONAL_DIRECTIONS)
    }
}

/// Every square a slider reaches along `directions`, direction by direction.
pub fn slider_targets(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    for &direction in directions {
        walk_ray(board, piece.position(), direction, piece.color(), &mut out);
    }
    out
}
