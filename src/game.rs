//! Game state: board, turn, termination, and per-player clocks

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::board::{Board, Cell, Player, Square, BOARD_SIZE};
use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::rules;

/// Full state of one Reversi game.
///
/// The board grid plus whose turn it is, which side the human controls,
/// whether the game has ended, and the per-player move clocks. Cloning a
/// `Position` yields an independent copy; the search relies on this to
/// explore moves without touching the live game.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    current_player: Player,
    human_player: Player,
    game_over: bool,
    player_time: [Duration; 2],
    turn_started: Option<Instant>,
}

impl Position {
    /// Blank board, game not started.
    ///
    /// The not-started state reads as over; [`start`](Position::start)
    /// begins an actual game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            human_player: Player::White,
            game_over: true,
            player_time: [Duration::ZERO; 2],
            turn_started: None,
        }
    }

    /// Standard starting layout, with `human_player` taking the human side.
    ///
    /// The four center discs alternate colors, Black moves first, and the
    /// turn clock starts counting from `clock.now()`.
    pub fn start(human_player: Player, clock: &dyn Clock) -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        let mut board = Board::new();
        board.set(Square::new(mid - 1, mid - 1), Cell::White);
        board.set(Square::new(mid, mid - 1), Cell::Black);
        board.set(Square::new(mid, mid), Cell::White);
        board.set(Square::new(mid - 1, mid), Cell::Black);

        Self {
            board,
            current_player: Player::Black,
            human_player,
            game_over: false,
            player_time: [Duration::ZERO; 2],
            turn_started: Some(clock.now()),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn human_player(&self) -> Player {
        self.human_player
    }

    /// The side the engine decides for
    #[inline]
    pub fn automated_player(&self) -> Player {
        self.human_player.opponent()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of discs `player` has on the board
    #[inline]
    pub fn score(&self, player: Player) -> u8 {
        self.board.disc_count(player)
    }

    /// Legal squares for the player on move, in raster order
    pub fn legal_moves(&self) -> Vec<Square> {
        rules::legal_moves(&self.board, self.current_player)
    }

    /// Accumulated thinking time for `player`.
    ///
    /// While the game is running, the player on move is also charged the
    /// live delta since their turn began.
    pub fn elapsed(&self, player: Player, clock: &dyn Clock) -> Duration {
        let mut total = self.player_time[player.index()];
        if !self.game_over && player == self.current_player {
            if let Some(started) = self.turn_started {
                total += clock.now().duration_since(started);
            }
        }
        total
    }

    /// Winner by disc count once the game is over.
    ///
    /// `None` while the game is running or when the counts tie.
    pub fn winner(&self) -> Option<Player> {
        if !self.game_over {
            return None;
        }
        match self.score(Player::Black).cmp(&self.score(Player::White)) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }

    /// Play `square` for the player on move.
    ///
    /// Places the disc, flips every bracketed run, charges the mover's
    /// clock, and hands the turn over. If the new mover has no legal move
    /// the game ends on the spot; the turn is never passed back.
    pub fn apply_move(&mut self, square: Square, clock: &dyn Clock) -> Result<()> {
        if self.game_over {
            return Err(Error::GameOver);
        }
        if !Square::in_bounds(i32::from(square.col), i32::from(square.row)) {
            return Err(Error::InvalidMove { square });
        }
        if !self.board.is_empty(square) {
            return Err(Error::InvalidMove { square });
        }

        rules::apply_move(&mut self.board, square, self.current_player);

        let now = clock.now();
        if let Some(started) = self.turn_started {
            self.player_time[self.current_player.index()] += now.duration_since(started);
        }
        self.turn_started = Some(now);

        self.advance_turn();
        Ok(())
    }

    /// Copy of this position with `square` played, clocks untouched.
    ///
    /// Simulation path for the search; the move must come from
    /// [`legal_moves`](Position::legal_moves).
    pub fn simulate(&self, square: Square) -> Position {
        let mut next = self.clone();
        rules::apply_move(&mut next.board, square, next.current_player);
        next.advance_turn();
        next
    }

    fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        if rules::legal_moves(&self.board, self.current_player).is_empty() {
            self.game_over = true;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Position {
    /// Test fixture: a running game over an arbitrary board.
    pub(crate) fn fixture(board: Board, current_player: Player, human_player: Player) -> Self {
        Self {
            board,
            current_player,
            human_player,
            game_over: false,
            player_time: [Duration::ZERO; 2],
            turn_started: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_new_game_reads_as_over() {
        let position = Position::new();
        assert!(position.is_game_over());
        assert_eq!(position.board().total_discs(), 0);
        assert_eq!(position.score(Player::Black), 0);
        assert_eq!(position.score(Player::White), 0);
    }

    #[test]
    fn test_default_matches_new() {
        let position = Position::default();
        assert!(position.is_game_over());
        assert_eq!(position.board().total_discs(), 0);
    }

    #[test]
    fn test_start_layout() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);

        assert!(!position.is_game_over());
        assert_eq!(position.current_player(), Player::Black);
        assert_eq!(position.human_player(), Player::White);
        assert_eq!(position.automated_player(), Player::Black);
        assert_eq!(position.score(Player::Black), 2);
        assert_eq!(position.score(Player::White), 2);

        let board = position.board();
        assert_eq!(board.get(Square::new(3, 3)), Cell::White);
        assert_eq!(board.get(Square::new(4, 3)), Cell::Black);
        assert_eq!(board.get(Square::new(3, 4)), Cell::Black);
        assert_eq!(board.get(Square::new(4, 4)), Cell::White);
    }

    #[test]
    fn test_opening_legal_moves() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);

        // d3, c4, f5, e6 in raster order
        assert_eq!(
            position.legal_moves(),
            vec![
                Square::new(3, 2),
                Square::new(2, 3),
                Square::new(5, 4),
                Square::new(4, 5),
            ]
        );
    }

    #[test]
    fn test_apply_move_flips_and_swaps_turn() {
        let clock = ManualClock::new();
        let mut position = Position::start(Player::White, &clock);

        position.apply_move(Square::new(3, 2), &clock).unwrap();

        assert_eq!(position.score(Player::Black), 4);
        assert_eq!(position.score(Player::White), 1);
        assert_eq!(position.current_player(), Player::White);
        assert!(!position.is_game_over());

        // White's answers to d3: c3, e3, c5 in raster order
        assert_eq!(
            position.legal_moves(),
            vec![Square::new(2, 2), Square::new(4, 2), Square::new(2, 4)]
        );
    }

    #[test]
    fn test_apply_rejects_occupied_square() {
        let clock = ManualClock::new();
        let mut position = Position::start(Player::White, &clock);

        let result = position.apply_move(Square::new(3, 3), &clock);
        assert!(matches!(result, Err(Error::InvalidMove { .. })));
        assert_eq!(position.board().total_discs(), 4);
    }

    #[test]
    fn test_apply_rejects_off_board_square() {
        let clock = ManualClock::new();
        let mut position = Position::start(Player::White, &clock);

        let err = position
            .apply_move(Square { col: 8, row: 0 }, &clock)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMove { .. }));
        assert_eq!(
            err.to_string(),
            "invalid move: square (8, 0) is occupied or out of range"
        );
        assert_eq!(position.board().total_discs(), 4);
        assert_eq!(position.current_player(), Player::Black);
    }

    #[test]
    fn test_apply_rejects_finished_game() {
        let clock = ManualClock::new();
        let mut position = Position::new();

        let result = position.apply_move(Square::new(0, 0), &clock);
        assert!(matches!(result, Err(Error::GameOver)));
    }

    #[test]
    fn test_no_legal_reply_ends_game() {
        // Row 1: B W _  -> Black plays the end, White is wiped out and
        // has nowhere to go. No pass: the game ends.
        let mut board = Board::new();
        board.set(Square::new(0, 0), Cell::Black);
        board.set(Square::new(1, 0), Cell::White);
        let mut position = Position::fixture(board, Player::Black, Player::White);

        let clock = ManualClock::new();
        position.apply_move(Square::new(2, 0), &clock).unwrap();

        assert!(position.is_game_over());
        assert_eq!(position.score(Player::Black), 3);
        assert_eq!(position.score(Player::White), 0);
        assert_eq!(position.winner(), Some(Player::Black));
    }

    #[test]
    fn test_winner_hidden_while_running() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);
        assert_eq!(position.winner(), None);
    }

    #[test]
    fn test_winner_tie_is_none() {
        // Fill every square but h8, leaving Black a single one-disc
        // capture there. 30 Black and 33 White discs become 32 apiece
        // once the move lands, and the full board ends the game level.
        let mut board = Board::new();
        board.set(Square::new(6, 7), Cell::White);
        board.set(Square::new(5, 7), Cell::Black);
        board.set(Square::new(7, 6), Cell::Black);
        board.set(Square::new(6, 6), Cell::Black);

        let mut black_left = 27;
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let square = Square::new(col, row);
                if square == Square::new(7, 7) || !board.is_empty(square) {
                    continue;
                }
                if black_left > 0 {
                    board.set(square, Cell::Black);
                    black_left -= 1;
                } else {
                    board.set(square, Cell::White);
                }
            }
        }

        let mut position = Position::fixture(board, Player::Black, Player::White);
        let clock = ManualClock::new();
        position.apply_move(Square::new(7, 7), &clock).unwrap();

        assert!(position.is_game_over());
        assert_eq!(position.score(Player::Black), 32);
        assert_eq!(position.score(Player::White), 32);
        assert_eq!(position.winner(), None);
    }

    #[test]
    fn test_clock_charges_the_mover() {
        let clock = ManualClock::new();
        let mut position = Position::start(Player::White, &clock);

        clock.advance(Duration::from_secs(5));
        position.apply_move(Square::new(3, 2), &clock).unwrap();

        // Black banked the 5s; White is now on the clock
        assert_eq!(position.elapsed(Player::Black, &clock), Duration::from_secs(5));
        assert_eq!(position.elapsed(Player::White, &clock), Duration::ZERO);

        clock.advance(Duration::from_secs(3));
        assert_eq!(position.elapsed(Player::White, &clock), Duration::from_secs(3));
        assert_eq!(position.elapsed(Player::Black, &clock), Duration::from_secs(5));

        position.apply_move(Square::new(2, 2), &clock).unwrap();
        assert_eq!(position.elapsed(Player::White, &clock), Duration::from_secs(3));
    }

    #[test]
    fn test_clock_frozen_after_game_over() {
        let mut board = Board::new();
        board.set(Square::new(0, 0), Cell::Black);
        board.set(Square::new(1, 0), Cell::White);
        let mut position = Position::fixture(board, Player::Black, Player::White);

        let clock = ManualClock::new();
        position.apply_move(Square::new(2, 0), &clock).unwrap();
        assert!(position.is_game_over());

        clock.advance(Duration::from_secs(10));
        assert_eq!(position.elapsed(Player::Black, &clock), Duration::ZERO);
        assert_eq!(position.elapsed(Player::White, &clock), Duration::ZERO);
    }

    #[test]
    fn test_simulate_leaves_original_untouched() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);

        let next = position.simulate(Square::new(3, 2));

        assert_eq!(position.score(Player::Black), 2);
        assert_eq!(position.current_player(), Player::Black);
        assert_eq!(next.score(Player::Black), 4);
        assert_eq!(next.current_player(), Player::White);
    }

    #[test]
    fn test_simulate_matches_apply() {
        let clock = ManualClock::new();
        let position = Position::start(Player::White, &clock);
        let square = Square::new(3, 2);

        let simulated = position.simulate(square);
        let mut applied = position.clone();
        applied.apply_move(square, &clock).unwrap();

        assert_eq!(simulated.board(), applied.board());
        assert_eq!(simulated.current_player(), applied.current_player());
        assert_eq!(simulated.is_game_over(), applied.is_game_over());
    }

    #[test]
    fn test_full_game_terminates() {
        let clock = ManualClock::new();
        let mut position = Position::start(Player::White, &clock);

        let mut plies = 0;
        while !position.is_game_over() {
            let moves = position.legal_moves();
            position = position.simulate(moves[0]);
            plies += 1;
            assert!(plies <= 60, "game ran past the board capacity");
        }

        assert!(position.board().total_discs() <= 64);
        assert!(position.legal_moves().is_empty());
    }
}
