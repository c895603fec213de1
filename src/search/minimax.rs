//! Game tree construction and minimax backup
//!
//! The tree under one candidate move is built eagerly, depth-first in
//! raster move order, under an expansion budget shared across everything
//! a single decision examines. Nodes own their children, so dropping a
//! subtree releases all of it at once.

use crate::board::{Square, TOTAL_CELLS};
use crate::eval::evaluate;
use crate::game::Position;

/// Lower bound of the evaluation range (the human side holds every disc).
pub const MIN_VALUE: i32 = -(TOTAL_CELLS as i32);
/// Upper bound of the evaluation range (the engine side holds every disc).
pub const MAX_VALUE: i32 = TOTAL_CELLS as i32;

/// One node of the search tree.
///
/// `position` is the state after `square` was played; `children` are the
/// continuations for the player now on move. `value` carries the static
/// evaluation at leaves and is not used on interior nodes.
#[derive(Debug)]
pub struct SearchNode {
    pub square: Square,
    pub position: Position,
    pub value: i32,
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    /// Nodes in this subtree, counting `self`.
    pub fn size(&self) -> u64 {
        1 + self.children.iter().map(SearchNode::size).sum::<u64>()
    }
}

/// Build the subtree rooted at `position`, reached by playing `square`.
///
/// A node becomes a leaf when the player on move has no reply or when
/// `budget` hits zero; leaves are scored with [`evaluate`]. Expanding an
/// interior node costs one unit of `budget`, and the same counter keeps
/// running through every recursive call, so early siblings can starve
/// later ones.
pub fn build_subtree(square: Square, position: Position, budget: &mut u32) -> SearchNode {
    let moves = position.legal_moves();
    if moves.is_empty() || *budget == 0 {
        let value = evaluate(&position);
        return SearchNode {
            square,
            position,
            value,
            children: Vec::new(),
        };
    }

    *budget -= 1;
    let children = moves
        .iter()
        .map(|&next| build_subtree(next, position.simulate(next), budget))
        .collect();

    SearchNode {
        square,
        position,
        value: 0,
        children,
    }
}

/// Minimax value of `node`.
///
/// Leaves report their stored evaluation. Interior nodes take the
/// maximum over children when the engine is on move and the minimum
/// otherwise, replacing only on strictly better values so the earliest
/// child wins ties.
pub fn backup(node: &SearchNode) -> i32 {
    if node.children.is_empty() {
        return node.value;
    }

    let maximizing = node.position.current_player() == node.position.automated_player();
    let mut best = if maximizing { MIN_VALUE } else { MAX_VALUE };
    for child in &node.children {
        let value = backup(child);
        if maximizing {
            if value > best {
                best = value;
            }
        } else if value < best {
            best = value;
        }
    }
    best
}
