//! Decision engine: picks the engine's move for the current position
//!
//! For every legal candidate the engine simulates the move and grows a
//! game tree under the shared expansion budget, then backs a minimax
//! value out of it. Candidates are visited in raster order and a later
//! one must be strictly better to displace an earlier one, so ties go to
//! the first square found. Each candidate's tree is dropped before the
//! next one is grown; only the budget carries across, which lets early
//! candidates starve later ones of depth.
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, EngineConfig, Player, Position, SystemClock};
//!
//! let clock = SystemClock;
//! let position = Position::start(Player::White, &clock);
//!
//! // Small budget keeps the example fast
//! let engine = AIEngine::with_config(EngineConfig { expansion_budget: 50 });
//! let result = engine.choose_move_with_stats(&position).unwrap();
//! println!("engine plays {} after {} nodes", result.square, result.nodes);
//! ```

use std::time::Instant;

use crate::board::Square;
use crate::error::{Error, Result};
use crate::game::Position;
use crate::search::{self, MIN_VALUE};

/// Tuning knobs for the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Total number of interior node expansions one decision may spend
    /// across all of its candidate subtrees.
    pub expansion_budget: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            expansion_budget: 1_000_000,
        }
    }
}

/// Outcome of one decision, with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The chosen square
    pub square: Square,
    /// Minimax value backed up for the chosen square
    pub value: i32,
    /// Tree nodes examined across all candidates
    pub nodes: u64,
    /// Wall time spent deciding, in milliseconds
    pub time_ms: u64,
}

/// Move chooser for the automated side.
///
/// The engine is stateless between decisions; all it carries is its
/// configuration, so one instance can serve any number of games.
///
/// # Example
///
/// ```
/// use reversi::{AIEngine, EngineConfig, Player, Position, SystemClock};
///
/// let clock = SystemClock;
/// let mut position = Position::start(Player::White, &clock);
///
/// // Use a small budget to keep the doc test fast
/// let engine = AIEngine::with_config(EngineConfig { expansion_budget: 100 });
/// let square = engine.choose_move(&position).unwrap();
/// position.apply_move(square, &clock).unwrap();
/// ```
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default expansion budget of one million.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configured expansion budget per decision.
    #[must_use]
    pub fn expansion_budget(&self) -> u32 {
        self.config.expansion_budget
    }

    /// Pick a move for the player currently on turn.
    ///
    /// Returns [`Error::NoValidMoves`] when the game is over or the
    /// mover has no legal square.
    pub fn choose_move(&self, position: &Position) -> Result<Square> {
        Ok(self.choose_move_with_stats(position)?.square)
    }

    /// Pick a move and report search statistics alongside it.
    pub fn choose_move_with_stats(&self, position: &Position) -> Result<MoveResult> {
        self.choose_move_with_progress(position, || {})
    }

    /// Like [`choose_move_with_stats`](AIEngine::choose_move_with_stats),
    /// calling `progress` once before each candidate is examined.
    ///
    /// Deep searches can take a while; the hook lets a front end show a
    /// heartbeat without threading through the search itself.
    pub fn choose_move_with_progress<F>(
        &self,
        position: &Position,
        mut progress: F,
    ) -> Result<MoveResult>
    where
        F: FnMut(),
    {
        let start = Instant::now();

        let moves = position.legal_moves();
        if position.is_game_over() || moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let mut budget = self.config.expansion_budget;
        let mut nodes = 0u64;
        let mut best_square = None;
        let mut best_value = MIN_VALUE;

        for &square in &moves {
            progress();

            let subtree = search::build_subtree(square, position.simulate(square), &mut budget);
            let value = search::backup(&subtree);
            nodes += subtree.size();

            if best_square.is_none() || value > best_value {
                best_square = Some(square);
                best_value = value;
            }
        }

        let square = best_square.ok_or(Error::NoValidMoves)?;
        Ok(MoveResult {
            square,
            value: best_value,
            nodes,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
