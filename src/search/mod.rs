//! Move search
//!
//! Builds explicit game trees under a shared expansion budget and backs
//! minimax values out of them.

pub mod minimax;

pub use minimax::{backup, build_subtree, SearchNode, MAX_VALUE, MIN_VALUE};
