//! Game rules for Reversi
//!
//! This module implements the capture rule set:
//! - Bracketing-line legality tests
//! - Raster-order legal move enumeration
//! - Move application with multi-direction flips

pub mod capture;

// Re-exports for convenient access
pub use capture::{apply_move, captures_in_direction, has_capture, is_legal_move, legal_moves};
