//! FEN-to-Board parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. Castling rights
//! are validated but not modelled. An en-passant square is turned into move
//! history: the pawn standing behind it is recorded as the last moved piece,
//! having just made its first move, a double step.

use crate::board_location::Position;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::{Board, LastMove};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::algebraic::algebraic_to_position;

/// Everything a FEN string describes that the rules core keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub side_to_move: Color,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

/// Parse a FEN string. Placement and side to move are required; the
/// castling, en-passant and clock fields may be omitted.
pub fn parse_fen(fen: &str) -> Result<FenPosition, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing side to move".to_owned()))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFENstringForm(
            "extra trailing fields".to_owned(),
        ));
    }

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board)?;
    let side_to_move = parse_side_to_move(side_part)?;
    validate_castling_rights(castling_part)?;
    if en_passant_part != "-" {
        let square = algebraic_to_position(en_passant_part)?;
        mark_double_step(&mut board, square, side_to_move)?;
    }

    let halfmove_clock = halfmove_part.parse::<u16>().map_err(|_| {
        ChessErrors::InvalidFENstringForm(format!("invalid halfmove clock: {halfmove_part}"))
    })?;
    let fullmove_number = fullmove_part.parse::<u16>().map_err(|_| {
        ChessErrors::InvalidFENstringForm(format!("invalid fullmove number: {fullmove_part}"))
    })?;

    Ok(FenPosition {
        board,
        side_to_move,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "board layout has {} ranks",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = BOARD_SIZE - 1 - fen_rank_idx as i8;
        let mut file: i8 = 0;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                file += empty_count as i8;
                if file > BOARD_SIZE {
                    return Err(ChessErrors::InvalidFENstringForm(format!(
                        "rank '{rank_str}' has too many files"
                    )));
                }
                continue;
            }

            let (color, kind) = PieceKind::from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            if file >= BOARD_SIZE {
                return Err(ChessErrors::InvalidFENstringForm(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }
            board.place_piece(kind, color, Position::new(file, rank))?;
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank '{rank_str}' does not cover 8 files"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "invalid side to move: {side_part}"
        ))),
    }
}

fn validate_castling_rights(castling_part: &str) -> Result<(), ChessErrors> {
    if castling_part == "-" {
        return Ok(());
    }
    match castling_part.chars().find(|ch| !matches!(ch, 'K' | 'Q' | 'k' | 'q')) {
        Some(ch) => Err(ChessErrors::InvalidFENtoken(ch)),
        None => Ok(()),
    }
}

/// Record the double step that produced the en-passant `square`.
fn mark_double_step(board: &mut Board, square: Position, side_to_move: Color) -> Result<(), ChessErrors> {
    let mover_color = side_to_move.opposite();
    let step = mover_color.forward_direction();
    let landed = square.offset(0, step)?;
    let from = square.offset(0, -step)?;

    let pawn = board
        .occupant_at(landed)
        .filter(|piece| piece.kind() == PieceKind::Pawn && piece.color() == mover_color)
        .map(|piece| piece.id())
        .ok_or_else(|| {
            ChessErrors::InvalidFENstringForm(format!(
                "en-passant square {square} has no {mover_color:?} pawn on {landed}"
            ))
        })?;

    board.set_move_count(pawn, 1)?;
    board.set_last_move(Some(LastMove {
        piece: pawn,
        from,
        to: landed,
    }))
}
