use crate::board_location::Position;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceId, PieceKind};

pub type MoveGenResult<T> = Result<T, ChessErrors>;

/// One legal move for a side, together with the board it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub piece: PieceId,
    pub moved_kind: PieceKind,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceKind>,
    pub en_passant: bool,
    /// Whether the move leaves the opponent's king attacked.
    pub gives_check: bool,
    pub board_after_move: Board,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> MoveGenResult<Vec<GeneratedMove>>;
}
