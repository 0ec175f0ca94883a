//! Crate root module declarations for the Plum rules core.
//!
//! This file exposes the board model, per-piece movement rules, legal move
//! generation with the king-safety filter, and utility helpers (FEN setup,
//! rendering, random playouts) so tests, benches and external tooling can
//! import stable module paths.

pub mod board_location;
pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_movement;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_board;
}
