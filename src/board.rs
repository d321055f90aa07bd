//! Board state for the 10×10 grid: one bitboard per player, plus the win
//! scan anchored at the most recently placed stone.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Player};
use crate::config::{BOARD_SIZE, WIN_LENGTH};
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Bitboard type used for stone tracking.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Axis directions scanned for a winning line, in fixed order: horizontal,
/// vertical, diagonal, anti-diagonal. The first satisfying axis wins, which
/// keeps highlighting deterministic when a stone completes two axes at once.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Grid state: one stone bitboard per player.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    stones: [BB; 2],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            stones: [BB::new(); 2],
        }
    }

    /// Returns `true` when (row, col) lies on the board.
    #[inline]
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE as usize && col < BOARD_SIZE as usize
    }

    /// Contents of the cell at (row, col). Out-of-range coordinates read as
    /// empty; callers that care validate with [`Board::in_bounds`] first.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if self.stones[Player::One.index()].get(row, col).unwrap_or(false) {
            Cell::Stone(Player::One)
        } else if self.stones[Player::Two.index()].get(row, col).unwrap_or(false) {
            Cell::Stone(Player::Two)
        } else {
            Cell::Empty
        }
    }

    /// Stone bitboard for one player.
    pub fn stones(&self, player: Player) -> BB {
        self.stones[player.index()]
    }

    /// Occupancy mask of both players' stones.
    pub fn occupied(&self) -> BB {
        self.stones[0] | self.stones[1]
    }

    /// Total number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Place a stone for `player` at (row, col). A cell transitions from
    /// empty to occupied at most once per game; occupied or out-of-range
    /// targets are rejected.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if self.stones[0].get(row, col)? || self.stones[1].get(row, col)? {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.stones[player.index()].set(row, col)?;
        Ok(())
    }

    /// Clear the cell at (row, col). Undo path only; coordinates come from
    /// recorded history and are always in range.
    pub fn remove(&mut self, row: usize, col: usize) {
        let _ = self.stones[0].clear(row, col);
        let _ = self.stones[1].clear(row, col);
    }

    /// Win scan anchored at (row, col): for each axis, count consecutive
    /// same-player stones extending both ways from the anchor, capped at
    /// `WIN_LENGTH - 1` cells per direction, stopping at a board edge or a
    /// foreign cell. Returns the sorted coordinates of the first axis whose
    /// total reaches `WIN_LENGTH`. All counted cells are included, so runs
    /// longer than five are highlighted in full.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<Vec<(usize, usize)>> {
        let player = match self.cell(row, col) {
            Cell::Stone(p) => p,
            Cell::Empty => return None,
        };
        let stones = self.stones(player);
        for (dr, dc) in DIRECTIONS {
            let mut cells = Vec::with_capacity(2 * WIN_LENGTH - 1);
            cells.push((row, col));
            for sign in [1isize, -1] {
                for i in 1..WIN_LENGTH as isize {
                    let r = row as isize + sign * i * dr;
                    let c = col as isize + sign * i * dc;
                    if r < 0 || c < 0 {
                        break;
                    }
                    if !stones.get(r as usize, c as usize).unwrap_or(false) {
                        break;
                    }
                    cells.push((r as usize, c as usize));
                }
            }
            if cells.len() >= WIN_LENGTH {
                cells.sort_unstable();
                return Some(cells);
            }
        }
        None
    }

    /// Raw per-player bits for snapshotting.
    pub fn raw(&self) -> (u128, u128) {
        (self.stones[0].into_raw(), self.stones[1].into_raw())
    }

    /// Rebuild a board from raw per-player bits.
    pub fn from_raw(player1: u128, player2: u128) -> Self {
        Board {
            stones: [BB::from_raw(player1), BB::from_raw(player2)],
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for r in 0..BOARD_SIZE as usize {
            for c in 0..BOARD_SIZE as usize {
                let ch = match self.cell(r, c) {
                    Cell::Empty => '.',
                    Cell::Stone(Player::One) => 'X',
                    Cell::Stone(Player::Two) => 'O',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
