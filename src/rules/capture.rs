//! Capture rules for Reversi (bracketing-line flips)
//!
//! A move is legal iff it lands on an empty square and, in at least one of
//! the 8 directions, a run of one-or-more opponent discs is immediately
//! followed by the mover's own disc with no empty cell in between. Applying
//! a move recolors every bracketed run around the placed disc.

use crate::board::{Board, Cell, Player, Square, BOARD_SIZE};

/// Direction vectors for bracket scanning (8 directions), as (dcol, drow)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // ↖
    (0, -1),  // ↑
    (1, -1),  // ↗
    (-1, 0),  // ←
    (1, 0),   // →
    (-1, 1),  // ↙
    (0, 1),   // ↓
    (1, 1),   // ↘
];

/// Check whether placing `player`'s disc at `square` captures along `dir`.
///
/// Walks outward from `square`. Opponent discs extend the run; an empty
/// cell or the board edge ends it with no capture. The mover's own disc
/// closes the bracket iff at least one opponent disc was passed on the way.
pub fn captures_in_direction(
    board: &Board,
    square: Square,
    player: Player,
    dir: (i32, i32),
) -> bool {
    let (dc, dr) = dir;
    let opponent = player.opponent().disc();
    let mut col = square.col as i32 + dc;
    let mut row = square.row as i32 + dr;
    let mut bracketed = false;

    while Square::in_bounds(col, row) {
        match board.get(Square::new(col as u8, row as u8)) {
            Cell::Empty => return false,
            cell if cell == opponent => bracketed = true,
            _ => return bracketed,
        }
        col += dc;
        row += dr;
    }

    false
}

/// Check if a move would capture in any direction.
#[inline]
pub fn has_capture(board: &Board, square: Square, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| captures_in_direction(board, square, player, dir))
}

/// Check whether `square` is playable for `player`: empty and capturing.
#[inline]
pub fn is_legal_move(board: &Board, square: Square, player: Player) -> bool {
    board.is_empty(square) && has_capture(board, square, player)
}

/// All legal squares for `player`, in raster (row-major) order.
///
/// The order is load-bearing: the search expands children in this order and
/// the engine breaks value ties by keeping the earliest candidate.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Square> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let square = Square::new(col, row);
            if is_legal_move(board, square, player) {
                moves.push(square);
            }
        }
    }
    moves
}

/// Recolor the bracketed run from `square` along `dir`.
///
/// Only called after `captures_in_direction` confirmed the bracket; the walk
/// stops at the mover's closing disc.
fn flip_in_direction(board: &mut Board, square: Square, player: Player, dir: (i32, i32)) {
    let (dc, dr) = dir;
    let opponent = player.opponent().disc();
    let mut col = square.col as i32 + dc;
    let mut row = square.row as i32 + dr;

    while Square::in_bounds(col, row) {
        let sq = Square::new(col as u8, row as u8);
        if board.get(sq) != opponent {
            break;
        }
        board.set(sq, player.disc());
        col += dc;
        row += dr;
    }
}

/// Place `player`'s disc at `square` and flip every bracketed run.
///
/// Directions are resolved independently; a single move may capture along
/// several at once. The square must be empty. Beyond the per-direction
/// bracket tests no further legality checking happens here.
pub fn apply_move(board: &mut Board, square: Square, player: Player) {
    board.set(square, player.disc());
    for &dir in &DIRECTIONS {
        if captures_in_direction(board, square, player, dir) {
            flip_in_direction(board, square, player, dir);
        }
    }
}
