//! Move-path enumeration used to check the whole legality core against
//! published node counts.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.checks += rhs.checks;
    }
}

/// Count leaf move paths `depth` plies deep, sides alternating from `side`.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side)? {
        perft_recurse(generator, &mv, side.opposite(), depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Per-root-move node counts, labelled like `e2e4`, sorted by label.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    side: Color,
    depth: u8,
) -> MoveGenResult<Vec<(String, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut lines = Vec::new();
    for mv in generator.generate_legal_moves(board, side)? {
        let mut local = PerftCounts::default();
        perft_recurse(generator, &mv, side.opposite(), depth, 1, &mut local)?;
        lines.push((format!("{}{}", mv.from, mv.to), local.nodes));
    }
    lines.sort();
    Ok(lines)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    side_to_move: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.merge(PerftCounts {
            nodes: 1,
            captures: usize::from(mv.captured.is_some()),
            en_passant: usize::from(mv.en_passant),
            checks: usize::from(mv.gives_check),
        });
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.board_after_move, side_to_move)? {
        perft_recurse(
            generator,
            &child,
            side_to_move.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::utils::fen_parser::parse_fen;

    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&LegalMoveGenerator::new(), &Board::new_empty(), Color::Light, 0)
            .expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let generator = LegalMoveGenerator::new();
        let board = Board::new_game();
        let expected = [20, 400, 8902];
        for (idx, nodes) in expected.iter().enumerate() {
            let counts = perft(&generator, &board, Color::Light, idx as u8 + 1).expect("perft should run");
            assert_eq!(counts.nodes, *nodes, "depth {}", idx + 1);
        }
    }

    #[test]
    fn start_position_depth_three_metrics() {
        let counts = perft(&LegalMoveGenerator::new(), &Board::new_game(), Color::Light, 3)
            .expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                checks: 12,
            }
        );
    }

    #[test]
    fn rook_and_pawn_endgame_includes_en_passant() {
        let parsed = parse_fen(POSITION_3_FEN).expect("fen should parse");
        let generator = LegalMoveGenerator::new();

        let depth_1 = perft(&generator, &parsed.board, parsed.side_to_move, 1).expect("perft should run");
        assert_eq!(depth_1.nodes, 14);

        let depth_2 = perft(&generator, &parsed.board, parsed.side_to_move, 2).expect("perft should run");
        assert_eq!(depth_2.nodes, 191);

        let depth_3 = perft(&generator, &parsed.board, parsed.side_to_move, 3).expect("perft should run");
        assert_eq!(
            depth_3,
            PerftCounts {
                nodes: 2812,
                captures: 209,
                en_passant: 2,
                checks: 267,
            }
        );
    }

    #[test]
    fn divide_sums_to_total() {
        let generator = LegalMoveGenerator::new();
        let board = Board::new_game();
        let lines = perft_divide(&generator, &board, Color::Light, 2).expect("divide should run");
        assert_eq!(lines.len(), 20);
        assert_eq!(lines.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
        assert!(lines.contains(&("e2e4".to_owned(), 20)));
    }
}
