use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{can_land_on, offsets_from, KNIGHT_JUMPS};
use crate::moves::piece_movement::PieceMovement;

pub struct KnightMovement;

impl PieceMovement for KnightMovement {
    fn candidate_targets(&self, board: &Board, knight: &Piece) -> Vec<Position> {
        offsets_from(knight.position(), &KNIGHT_JUMPS)
            .filter(|&to| can_land_on(board, knight.color(), to))
            .collect()
    }

    fn is_valid_move(&self, board: &Board, knight: &Piece, target: Position) -> bool {
        self.threatens(board, knight, target) && can_land_on(board, knight.color(), target)
    }

    fn threatens(&self, _board: &Board, knight: &Piece, square: Position) -> bool {
        square.is_on_board() && KNIGHT_JUMPS.contains(&knight.position().delta_to(square))
    }
}

#[cfg(test)]
mod tests {
    use super::KnightMovement;
    use crate::board_location::Position;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::moves::piece_movement::PieceMovement;

    fn sq(name: &str) -> Position {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let mut board = Board::new_empty();
        let id = board
            .place_piece(PieceKind::Knight, Color::Light, sq("a1"))
            .expect("a1 is empty");
        let knight = board.piece(id).expect("knight");
        assert_eq!(
            KnightMovement.candidate_targets(&board, knight),
            vec![sq("b3"), sq("c2")]
        );
    }

    #[test]
    fn knight_jumps_over_pieces_but_not_onto_friends() {
        let board = Board::new_game();
        let knight = board.occupant_at(sq("g1")).expect("knight on g1");
        assert_eq!(
            KnightMovement.candidate_targets(&board, knight),
            vec![sq("h3"), sq("f3")]
        );
        assert!(!KnightMovement.is_valid_move(&board, knight, sq("e2")));
        assert!(KnightMovement.threatens(&board, knight, sq("e2")));
    }
}
