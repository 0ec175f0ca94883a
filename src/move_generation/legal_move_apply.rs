//! Move execution.
//!
//! `move_piece` is the only way rules code mutates a board: it re-derives the
//! piece's legal moves, rejects anything outside them, and hands a resolved
//! `MovePlan` to `Board::apply`.

use crate::board_location::Position;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, Capture, MovePlan};
use crate::game_state::chess_types::{PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::{KingSafetyOracle, SimulatedKingSafety};
use crate::move_generation::legal_move_generator::legal_moves_with;
use crate::moves::pawn_moves::en_passant_victim;

/// Outcome of a successful `move_piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    /// Kind of the piece removed by the move, if any.
    pub captured: Option<PieceKind>,
    pub en_passant: bool,
}

/// Resolve what moving `piece` to `target` would do to `board`, including the
/// en-passant victim that is not on the target square. Does not check
/// legality.
pub fn plan_move(board: &Board, piece: &Piece, target: Position) -> MovePlan {
    let en_passant = if piece.is_pawn() {
        en_passant_victim(board, piece, target)
    } else {
        None
    };

    let captured = en_passant
        .or_else(|| board.occupant_at(target))
        .filter(|victim| victim.id() != piece.id())
        .map(|victim| Capture {
            piece: victim.id(),
            position: victim.position(),
        });

    MovePlan {
        piece: piece.id(),
        from: piece.position(),
        to: target,
        captured,
        en_passant: en_passant.is_some(),
    }
}

/// Move a piece, enforcing the king-safety rule.
pub fn move_piece(board: &mut Board, piece: PieceId, target: Position) -> Result<AppliedMove, ChessErrors> {
    move_piece_with(board, piece, target, &SimulatedKingSafety)
}

/// Move a piece to `target` if it is one of its legal moves under `oracle`.
///
/// On rejection the board is unchanged and `IllegalMove` is returned; the
/// caller should ask for the legal moves again and pick one of them.
pub fn move_piece_with<O: KingSafetyOracle + ?Sized>(
    board: &mut Board,
    piece: PieceId,
    target: Position,
    oracle: &O,
) -> Result<AppliedMove, ChessErrors> {
    let mover = board.require_piece(piece)?;
    if !legal_moves_with(board, mover, oracle).contains(&target) {
        return Err(ChessErrors::IllegalMove {
            piece,
            from: mover.position(),
            to: target,
        });
    }

    let plan = plan_move(board, mover, target);
    let captured = match plan.captured {
        Some(capture) => Some(board.require_piece(capture.piece)?.kind()),
        None => None,
    };

    board.apply(&plan)?;

    Ok(AppliedMove {
        piece,
        from: plan.from,
        to: plan.to,
        captured,
        en_passant: plan.en_passant,
    })
}

#[cfg(test)]
mod tests {
    use super::{move_piece, move_piece_with, plan_move};
    use crate::board_location::Position;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceId, PieceKind};
    use crate::move_generation::legal_move_checks::IgnoreKingSafety;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::render_board::render_board;

    fn sq(name: &str) -> Position {
        name.parse().expect("test square should parse")
    }

    fn id_at(board: &Board, square: &str) -> PieceId {
        board
            .occupant_at(sq(square))
            .map(|piece| piece.id())
            .expect("square should be occupied")
    }

    #[test]
    fn illegal_target_is_rejected_without_mutation() {
        let mut board = Board::new_game();
        let pawn = id_at(&board, "e2");
        let before = board.clone();

        let result = move_piece(&mut board, pawn, sq("e5"));
        assert_eq!(
            result,
            Err(ChessErrors::IllegalMove {
                piece: pawn,
                from: sq("e2"),
                to: sq("e5"),
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn unknown_piece_is_reported() {
        let mut board = Board::new_game();
        let pawn = id_at(&board, "a2");
        board.remove_piece(sq("a2")).expect("a2 holds a pawn");
        assert_eq!(
            move_piece(&mut board, pawn, sq("a3")),
            Err(ChessErrors::UnknownPiece(pawn))
        );
    }

    #[test]
    fn double_step_is_spent_by_the_first_move() {
        let mut board = Board::new_game();
        let pawn = id_at(&board, "c2");

        let applied = move_piece(&mut board, pawn, sq("c3")).expect("c2-c3 is legal");
        assert_eq!(applied.captured, None);
        assert!(!applied.en_passant);

        let moved = board.piece(pawn).expect("pawn still on the board");
        assert_eq!(moved.position(), sq("c3"));
        assert_eq!(moved.move_count(), 1);
        assert!(moved.has_moved());
        assert_eq!(legal_moves(&board, moved), vec![sq("c4")]);
    }

    #[test]
    fn en_passant_capture_removes_the_victim() {
        let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen should parse");
        let attacker = id_at(&board, "e5");
        let victim = id_at(&board, "d7");

        move_piece(&mut board, victim, sq("d5")).expect("d7-d5 is legal");
        let pawn = board.piece(attacker).expect("attacker");
        assert!(
            legal_moves(&board, pawn).contains(&sq("d6")),
            "{}",
            render_board(&board)
        );

        let applied = move_piece(&mut board, attacker, sq("d6")).expect("exd6 e.p. is legal");
        assert!(applied.en_passant);
        assert_eq!(applied.captured, Some(PieceKind::Pawn));
        assert!(board.piece(victim).is_none());
        assert!(board.is_empty_at(sq("d5")));

        let pawn = board.piece(attacker).expect("attacker");
        assert_eq!(pawn.position(), sq("d6"));
        assert!(pawn.has_made_en_passant());
        assert_eq!(board.pieces_of(Color::Dark).count(), 1);
    }

    #[test]
    fn en_passant_window_closes_after_another_move() {
        let mut board =
            Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("fen should parse");
        let attacker = id_at(&board, "e5");
        let victim = id_at(&board, "d7");
        let light_king = id_at(&board, "e1");
        let dark_king = id_at(&board, "e8");

        move_piece(&mut board, victim, sq("d5")).expect("d7-d5 is legal");
        move_piece(&mut board, light_king, sq("f1")).expect("Kf1 is legal");
        move_piece(&mut board, dark_king, sq("f8")).expect("Kf8 is legal");

        let pawn = board.piece(attacker).expect("attacker");
        assert!(!legal_moves(&board, pawn).contains(&sq("d6")));
    }

    #[test]
    fn single_steps_do_not_enable_en_passant() {
        // d6-d5 is the victim's first move but only a single step.
        let mut board = Board::from_fen("4k3/8/3p4/4P3/8/8/8/4K3 b - - 0 1").expect("fen should parse");
        let attacker = id_at(&board, "e5");
        let victim = id_at(&board, "d6");

        move_piece(&mut board, victim, sq("d5")).expect("d6-d5 is legal");
        assert_eq!(board.piece(victim).map(|p| p.move_count()), Some(1));

        let pawn = board.piece(attacker).expect("attacker");
        assert!(!legal_moves(&board, pawn).contains(&sq("d6")));
    }

    #[test]
    fn plain_capture_reports_captured_kind() {
        let mut board = Board::from_fen("4k3/8/8/3n4/4P3/8/8/4K3 w - - 0 1").expect("fen should parse");
        let pawn = id_at(&board, "e4");
        let knight = id_at(&board, "d5");

        let applied = move_piece(&mut board, pawn, sq("d5")).expect("exd5 is legal");
        assert_eq!(applied.captured, Some(PieceKind::Knight));
        assert!(!applied.en_passant);
        assert!(board.piece(knight).is_none());
        assert!(!board.piece(pawn).expect("pawn").has_made_en_passant());
    }

    #[test]
    fn plan_resolves_en_passant_victim_square() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("fen should parse");
        let attacker = id_at(&board, "e5");
        let pawn = board.piece(attacker).expect("attacker");
        let plan = plan_move(&board, pawn, sq("d6"));
        assert!(plan.en_passant);
        assert_eq!(plan.captured.map(|c| c.position), Some(sq("d5")));

        // Without the king-safety rule the same move still goes through.
        let applied = move_piece_with(&mut board, attacker, sq("d6"), &IgnoreKingSafety)
            .expect("exd6 e.p. is legal");
        assert!(applied.en_passant);
    }
}
