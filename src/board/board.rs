//! Board grid with guarded cell access

use std::fmt;

use super::{Cell, Player, Square, BOARD_SIZE};

/// 8x8 grid of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell contents at a square
    #[inline]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row as usize][square.col as usize]
    }

    /// Overwrite a cell
    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row as usize][square.col as usize] = cell;
    }

    /// Check if a square is empty
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    /// Number of discs a player has on the board
    pub fn disc_count(&self, player: Player) -> u8 {
        let mut count = 0;
        for row in &self.cells {
            for cell in row {
                if cell.player() == Some(player) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total discs on the board
    pub fn total_discs(&self) -> u8 {
        self.disc_count(Player::Black) + self.disc_count(Player::White)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let c = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
