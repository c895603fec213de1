//! Position evaluation
//!
//! A single material term: the engine's disc count minus the human's.
//! Positive values favor the engine regardless of which color it plays,
//! so the search can maximize the same score from either side.

use crate::game::Position;

/// Score `position` from the engine's point of view.
pub fn evaluate(position: &Position) -> i32 {
    let own = i32::from(position.score(position.automated_player()));
    let opponent = i32::from(position.score(position.human_player()));
    own - opponent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell, Player, Square, TOTAL_CELLS};
    use crate::clock::ManualClock;

    fn split_board(black_discs: usize) -> Board {
        let mut board = Board::new();
        for index in 0..TOTAL_CELLS {
            let cell = if index < black_discs { Cell::Black } else { Cell::White };
            board.set(Square::from_index(index), cell);
        }
        board
    }

    #[test]
    fn test_start_is_balanced() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);
        assert_eq!(evaluate(&position), 0);
    }

    #[test]
    fn test_counts_engine_minus_human() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);

        // Black (the engine side) plays d3 and leads four discs to one
        let next = position.simulate(Square::new(3, 2));
        assert_eq!(evaluate(&next), 3);
    }

    #[test]
    fn test_sign_follows_engine_side() {
        let board = split_board(34);

        let engine_is_white = Position::fixture(board, Player::White, Player::Black);
        assert_eq!(evaluate(&engine_is_white), -4);

        let engine_is_black = Position::fixture(board, Player::Black, Player::White);
        assert_eq!(evaluate(&engine_is_black), 4);
    }

    #[test]
    fn test_full_board_differential() {
        let board = split_board(40);
        let position = Position::fixture(board, Player::Black, Player::White);
        assert_eq!(evaluate(&position), 16);
    }
}
