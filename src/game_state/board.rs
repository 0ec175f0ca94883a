//! Board: authoritative occupancy and piece ownership.
//!
//! The board owns every piece record in an arena indexed by `PieceId` and an
//! 8x8 grid mapping squares to ids. Rules code only reads it; the single
//! mutation entry point for moves is `Board::apply`, which validates a
//! `MovePlan` completely before touching any state so a partially applied
//! move can never be observed.

use crate::board_location::Position;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceId, PieceKind};
use crate::game_state::piece::Piece;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The most recent move applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
}

/// A piece removed by a move, and the square it was removed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub piece: PieceId,
    pub position: Position,
}

/// Fully resolved description of one move, ready for `Board::apply`.
///
/// For an en-passant capture `captured.position` is the square behind `to`,
/// not `to` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Capture>,
    pub en_passant: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pieces: Vec<Option<Piece>>,
    last_move: Option<LastMove>,
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting array.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            let file = file as i8;
            board.insert(kind, Color::Light, Position::new(file, 0));
            board.insert(PieceKind::Pawn, Color::Light, Position::new(file, 1));
            board.insert(PieceKind::Pawn, Color::Dark, Position::new(file, 6));
            board.insert(kind, Color::Dark, Position::new(file, 7));
        }
        board
    }

    /// Build a board from the piece-placement, side and en-passant fields of
    /// a FEN string. The side to move is discarded; use
    /// `utils::fen_parser::parse_fen` to keep it.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        crate::utils::fen_parser::parse_fen(fen).map(|parsed| parsed.board)
    }

    /// Put a new piece on an empty square.
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        position: Position,
    ) -> Result<PieceId, ChessErrors> {
        if !position.is_on_board() {
            return Err(ChessErrors::InvalidFileOrRank(
                position.file(),
                position.rank(),
            ));
        }
        if self.id_at(position).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(position));
        }
        if self.pieces.len() >= u16::MAX as usize {
            return Err(ChessErrors::CorruptedBoard(
                "piece arena exhausted".to_owned(),
            ));
        }
        Ok(self.insert(kind, color, position))
    }

    /// Take the piece on `position` off the board.
    pub fn remove_piece(&mut self, position: Position) -> Result<Piece, ChessErrors> {
        let id = self
            .id_at(position)
            .ok_or(ChessErrors::TryToViewOrEditEmptySquare(position))?;
        let piece = self
            .pieces
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or_else(|| {
                ChessErrors::CorruptedBoard(format!("square {position} points at missing piece {id}"))
            })?;
        self.set_square(position, None);
        if self.last_move.is_some_and(|last| last.piece == id) {
            self.last_move = None;
        }
        Ok(piece)
    }

    /// The piece standing on `position`; `None` for empty or off-board squares.
    #[inline]
    pub fn occupant_at(&self, position: Position) -> Option<&Piece> {
        self.id_at(position).and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.id_at(position).is_none()
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    /// Like `piece`, but reports an unknown or captured id as an error.
    pub fn require_piece(&self, id: PieceId) -> Result<&Piece, ChessErrors> {
        self.piece(id).ok_or(ChessErrors::UnknownPiece(id))
    }

    /// All pieces still on the board, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color() == color)
    }

    /// The first king of `color`, if that side has one.
    pub fn king_of(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color)
            .find(|piece| piece.kind() == PieceKind::King)
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// The piece that moved most recently, if it is still on the board.
    pub fn last_moved_piece(&self) -> Option<&Piece> {
        self.last_move.and_then(|last| self.piece(last.piece))
    }

    /// Overwrite the last-move record. Intended for position setup, where the
    /// history leading to the position is not replayed.
    pub fn set_last_move(&mut self, last_move: Option<LastMove>) -> Result<(), ChessErrors> {
        if let Some(last) = last_move {
            let piece = self.require_piece(last.piece)?;
            if piece.position() != last.to {
                return Err(ChessErrors::CorruptedBoard(format!(
                    "last move of {} ends on {} but the piece stands on {}",
                    last.piece,
                    last.to,
                    piece.position()
                )));
            }
        }
        self.last_move = last_move;
        Ok(())
    }

    /// Overwrite how many moves a piece has made. Intended for position setup.
    pub fn set_move_count(&mut self, id: PieceId, move_count: u32) -> Result<(), ChessErrors> {
        let piece = self.piece_mut(id)?;
        piece.move_count = move_count;
        Ok(())
    }

    /// Overwrite a pawn's en-passant flag (for example when rewinding a move).
    pub fn set_has_made_en_passant(&mut self, id: PieceId, value: bool) -> Result<(), ChessErrors> {
        self.piece_mut(id)?.set_has_made_en_passant(value);
        Ok(())
    }

    /// Apply a resolved move as one step.
    ///
    /// Removes the mover from its source, removes the captured piece (which
    /// for en passant is not on the target square), places the mover on the
    /// target, updates its position, move counter and pawn flags, and records
    /// the last move. Every precondition is checked first; on error nothing
    /// has changed.
    pub fn apply(&mut self, plan: &MovePlan) -> Result<(), ChessErrors> {
        self.validate_plan(plan)?;

        self.set_square(plan.from, None);
        if let Some(capture) = plan.captured {
            self.set_square(capture.position, None);
            self.pieces[capture.piece.index()] = None;
        }
        self.set_square(plan.to, Some(plan.piece));

        let piece = self.piece_mut(plan.piece)?;
        piece.position = plan.to;
        piece.move_count += 1;
        piece.record_move_flags(plan.en_passant);

        self.last_move = Some(LastMove {
            piece: plan.piece,
            from: plan.from,
            to: plan.to,
        });
        Ok(())
    }

    fn validate_plan(&self, plan: &MovePlan) -> Result<(), ChessErrors> {
        if !plan.from.is_on_board() || !plan.to.is_on_board() {
            return Err(ChessErrors::CorruptedBoard(format!(
                "move {} -> {} leaves the board",
                plan.from, plan.to
            )));
        }

        let mover = self.require_piece(plan.piece)?;
        if mover.position() != plan.from || self.id_at(plan.from) != Some(plan.piece) {
            return Err(ChessErrors::CorruptedBoard(format!(
                "piece {} is not on {}",
                plan.piece, plan.from
            )));
        }

        let mut target_owner = self.id_at(plan.to);
        if let Some(capture) = plan.captured {
            let victim = self.require_piece(capture.piece)?;
            if capture.piece == plan.piece
                || victim.position() != capture.position
                || self.id_at(capture.position) != Some(capture.piece)
            {
                return Err(ChessErrors::CorruptedBoard(format!(
                    "captured piece {} is not on {}",
                    capture.piece, capture.position
                )));
            }
            if target_owner == Some(capture.piece) {
                target_owner = None;
            }
        }

        if target_owner.is_some() && plan.to != plan.from {
            return Err(ChessErrors::CorruptedBoard(format!(
                "target {} is still occupied after the capture",
                plan.to
            )));
        }
        Ok(())
    }

    fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, ChessErrors> {
        self.pieces
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(ChessErrors::UnknownPiece(id))
    }

    fn insert(&mut self, kind: PieceKind, color: Color, position: Position) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Some(Piece::new(id, kind, color, position)));
        self.set_square(position, Some(id));
        id
    }

    #[inline]
    fn id_at(&self, position: Position) -> Option<PieceId> {
        if !position.is_on_board() {
            return None;
        }
        self.squares[position.rank() as usize][position.file() as usize]
    }

    #[inline]
    fn set_square(&mut self, position: Position, id: Option<PieceId>) {
        self.squares[position.rank() as usize][position.file() as usize] = id;
    }
}
