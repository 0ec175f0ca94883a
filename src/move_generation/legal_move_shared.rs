use crate::board_location::Position;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

#[inline]
pub fn is_enemy_at(board: &Board, color: Color, square: Position) -> bool {
    board
        .occupant_at(square)
        .is_some_and(|piece| piece.color() != color)
}

#[inline]
pub fn is_friend_at(board: &Board, color: Color, square: Position) -> bool {
    board
        .occupant_at(square)
        .is_some_and(|piece| piece.color() == color)
}

/// On the board and either empty or holding an enemy of `color`.
#[inline]
pub fn can_land_on(board: &Board, color: Color, square: Position) -> bool {
    square.is_on_board() && !is_friend_at(board, color, square)
}

/// On-board squares reached from `from` by each offset, in offset order.
pub fn offsets_from(from: Position, offsets: &[(i8, i8)]) -> impl Iterator<Item = Position> + '_ {
    offsets
        .iter()
        .filter_map(move |&(d_file, d_rank)| from.offset(d_file, d_rank).ok())
}

/// Push every square along `direction` from `from` up to the first occupied
/// square. The blocker is pushed too when it belongs to the other side.
pub fn walk_ray(
    board: &Board,
    from: Position,
    direction: (i8, i8),
    color: Color,
    out: &mut Vec<Position>,
) {
    let mut current = from;
    while let Ok(next) = current.offset(direction.0, direction.1) {
        match board.occupant_at(next) {
            None => out.push(next),
            Some(blocker) => {
                if blocker.color() != color {
                    out.push(next);
                }
                return;
            }
        }
        current = next;
    }
}

/// Unit step from `from` towards `to` if the two lie on a common line in one
/// of `directions`.
pub fn line_direction(from: Position, to: Position, directions: &[(i8, i8)]) -> Option<(i8, i8)> {
    let (d_file, d_rank) = from.delta_to(to);
    if d_file == 0 && d_rank == 0 {
        return None;
    }
    let aligned = d_file == 0 || d_rank == 0 || d_file.unsigned_abs() == d_rank.unsigned_abs();
    if !aligned {
        return None;
    }
    let step = (d_file.signum(), d_rank.signum());
    directions.contains(&step).then_some(step)
}

/// Squares strictly between `from` and `to` along `step`.
pub fn squares_between(from: Position, to: Position, step: (i8, i8)) -> Vec<Position> {
    let mut out = Vec::new();
    let mut current = from;
    while let Ok(next) = current.offset(step.0, step.1) {
        if next == to {
            break;
        }
        out.push(next);
        current = next;
    }
    out
}

/// True when `from` and `to` share a line in `directions` and nothing stands
/// strictly between them.
pub fn is_clear_line(board: &Board, from: Position, to: Position, directions: &[(i8, i8)]) -> bool {
    if !to.is_on_board() {
        return false;
    }
    match line_direction(from, to, directions) {
        Some(step) => squares_between(from, to, step)
            .into_iter()
            .all(|square| board.is_empty_at(square)),
        None => false,
    }
}
