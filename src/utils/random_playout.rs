//! Random playouts.
//!
//! Plays uniformly random legal moves from a position. Callers pass the RNG
//! so a seeded generator reproduces the same game.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

#[derive(Debug, Clone)]
pub struct PlayoutSummary {
    pub plies_played: usize,
    pub final_board: Board,
    pub side_to_move: Color,
    /// The side to move had no legal move when the playout stopped.
    pub ended_without_moves: bool,
    pub captures: usize,
    pub en_passant_captures: usize,
    pub info_lines: Vec<String>,
}

/// Pick one of `side`'s legal moves uniformly. `None` when there are none.
pub fn choose_random_legal_move<G, R>(
    generator: &G,
    board: &Board,
    side: Color,
    rng: &mut R,
) -> MoveGenResult<Option<GeneratedMove>>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    let legal_moves = generator.generate_legal_moves(board, side)?;
    Ok(legal_moves.as_slice().choose(rng).cloned())
}

/// Play up to `max_plies` random moves, alternating sides from `side`.
pub fn play_random_game<G, R>(
    generator: &G,
    board: Board,
    side: Color,
    max_plies: usize,
    rng: &mut R,
) -> MoveGenResult<PlayoutSummary>
where
    G: MoveGenerator + ?Sized,
    R: Rng + ?Sized,
{
    let mut summary = PlayoutSummary {
        plies_played: 0,
        final_board: board,
        side_to_move: side,
        ended_without_moves: false,
        captures: 0,
        en_passant_captures: 0,
        info_lines: Vec::new(),
    };

    while summary.plies_played < max_plies {
        let mover = summary.side_to_move;
        let Some(picked) = choose_random_legal_move(generator, &summary.final_board, mover, rng)? else {
            summary.ended_without_moves = true;
            let in_check = is_king_in_check(&summary.final_board, mover);
            summary.info_lines.push(format!(
                "info string playout no_legal_moves side {:?} in_check {}",
                mover, in_check
            ));
            break;
        };

        summary.plies_played += 1;
        if picked.captured.is_some() {
            summary.captures += 1;
        }
        if picked.en_passant {
            summary.en_passant_captures += 1;
        }
        summary.info_lines.push(format!(
            "info string playout ply {} {:?} {:?} {}{}{}",
            summary.plies_played,
            mover,
            picked.moved_kind,
            picked.from,
            picked.to,
            if picked.en_passant { " ep" } else { "" }
        ));

        summary.final_board = picked.board_after_move;
        summary.side_to_move = mover.opposite();
    }

    Ok(summary)
}
