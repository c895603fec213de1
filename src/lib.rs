//! Reversi rules and decision engine
//!
//! A complete engine for 8x8 Reversi:
//! - Standard starting layout, Black moves first
//! - Bracketing captures in all eight directions
//! - No passing: when the player handed the turn has no legal move,
//!   the game ends immediately
//! - Exhaustive game tree search bounded by a shared expansion budget
//! - Per-player move clocks charged to whoever is on turn
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid, discs, and square coordinates
//! - [`rules`]: Legal moves and capture resolution
//! - [`game`]: Full game state with turn and clock handling
//! - [`eval`]: Leaf evaluation as a disc differential
//! - [`search`]: Budgeted game tree construction and minimax backup
//! - [`engine`]: Decision engine tying search to a position
//! - [`clock`]: Time source abstraction for the move clocks
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, EngineConfig, Player, Position, SystemClock};
//!
//! let clock = SystemClock;
//! let mut position = Position::start(Player::White, &clock);
//!
//! // Small budget keeps the doc test fast
//! let engine = AIEngine::with_config(EngineConfig { expansion_budget: 50 });
//!
//! // Black opens; the engine decides for the side on turn
//! let square = engine.choose_move(&position).unwrap();
//! position.apply_move(square, &clock).unwrap();
//! assert_eq!(position.current_player(), Player::White);
//! ```

pub mod board;
pub mod clock;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Square, BOARD_SIZE};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use error::{Error, Result};
pub use game::Position;
