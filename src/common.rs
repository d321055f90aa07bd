//! Common types shared across the crate: players, cells, move records and
//! the outcome variants surfaced to the presentation layer.

use crate::bitboard::BitBoardError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index for per-player storage.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Display number (1 or 2).
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Player),
}

impl Cell {
    /// Returns `true` when no stone occupies the cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A recorded placement event. History keeps these in exact placement order;
/// replaying them from an empty board reproduces the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Result of a successfully placed move, consumed by the presentation
/// adapter to drive rendering and side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on; the caller should restart the turn clock.
    Continue,
    /// The placed stone completed a line of five or more. `cells` holds every
    /// coordinate of the winning run, sorted, for highlighting.
    Win {
        winner: Player,
        cells: Vec<(usize, usize)>,
    },
    /// Board is fully occupied with no winning line.
    Draw,
}

/// Errors returned by `Board` operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (invalid size or index).
    BitBoard(BitBoardError),
    /// Target cell already holds a stone.
    CellOccupied { row: usize, col: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}
