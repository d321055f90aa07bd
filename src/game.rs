//! Core game engine: turn sequencing, move history and end-of-game
//! bookkeeping over the [`Board`].

use crate::{
    board::Board,
    common::{Move, MoveOutcome, Player},
    scoreboard::Scoreboard,
};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Serializable snapshot of a running game.
///
/// The board is carried as raw per-player bits; the history alone is enough
/// to rebuild it, the bits make snapshot comparisons cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub player1_bits: u128,
    pub player2_bits: u128,
    pub active: bool,
    pub current: Player,
    pub history: Vec<Move>,
    pub scoreboard: Scoreboard,
}

/// Game engine owning board, turn state, move history and the scoreboard
/// for the lifetime of a session.
///
/// All invalid inputs (out-of-range coordinates, occupied cells, mutating a
/// finished game, undo on empty history) are defensive no-ops rather than
/// errors: the UI is expected to prevent them structurally, the engine stays
/// safe when it does not.
pub struct GameEngine {
    board: Board,
    active: bool,
    current: Player,
    history: Vec<Move>,
    scoreboard: Scoreboard,
}

impl GameEngine {
    /// Create an engine with a fresh board and an all-zero scoreboard.
    pub fn new() -> Self {
        Self::with_scoreboard(Scoreboard::default())
    }

    /// Create an engine carrying a previously persisted scoreboard.
    pub fn with_scoreboard(scoreboard: Scoreboard) -> Self {
        Self {
            board: Board::new(),
            active: true,
            current: Player::One,
            history: Vec::new(),
            scoreboard,
        }
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns `true` while the game accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of moves currently on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Placement history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Cumulative results across games.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Place a stone for the current player at (row, col).
    ///
    /// Returns `None` without touching any state when the game is over, the
    /// coordinates are out of range, or the cell is occupied. Otherwise the
    /// stone is placed and the move recorded. A win ends the game and
    /// credits the winner; with no win and no empty cell left the game ends
    /// as a draw; otherwise the turn passes. On `Continue` the caller is
    /// responsible for resetting the turn clock.
    pub fn place_move(&mut self, row: usize, col: usize) -> Option<MoveOutcome> {
        if !self.active {
            return None;
        }
        if self.board.place(row, col, self.current).is_err() {
            return None;
        }
        self.history.push(Move {
            row,
            col,
            player: self.current,
        });

        if let Some(cells) = self.board.winning_line(row, col) {
            self.active = false;
            self.scoreboard.record_win(self.current);
            return Some(MoveOutcome::Win {
                winner: self.current,
                cells,
            });
        }
        // Draw only matters once no win was found: a packed board with a
        // winning line is a win.
        if self.board.is_full() {
            self.active = false;
            self.scoreboard.record_draw();
            return Some(MoveOutcome::Draw);
        }
        self.current = self.current.opponent();
        Some(MoveOutcome::Continue)
    }

    /// Take back the most recent move. The undone cell becomes empty and it
    /// is that player's turn again. Returns `None` (and changes nothing)
    /// when the history is empty or the game has ended; once a game is
    /// over, starting a new one is the only way forward. On success the
    /// caller resets the turn clock.
    ///
    /// Timeout-forced turn switches leave no history entry, so undo skips
    /// over them silently.
    pub fn undo(&mut self) -> Option<Move> {
        if !self.active {
            return None;
        }
        let mv = self.history.pop()?;
        self.board.remove(mv.row, mv.col);
        self.current = mv.player;
        Some(mv)
    }

    /// Reset board, history and turn state for a fresh game. The scoreboard
    /// is untouched.
    pub fn start_new_game(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current = Player::One;
        self.active = true;
    }

    /// Forced turn switch when the per-turn clock runs out: toggles the
    /// current player without placing a stone or recording history.
    /// Returns `false` (no-op) when the game is not active; on `true` the
    /// caller resets the turn clock.
    pub fn expire_turn(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.current = self.current.opponent();
        true
    }

    /// Serializable snapshot of the full engine state.
    pub fn state(&self) -> GameState {
        let (player1_bits, player2_bits) = self.board.raw();
        GameState {
            player1_bits,
            player2_bits,
            active: self.active,
            current: self.current,
            history: self.history.clone(),
            scoreboard: self.scoreboard,
        }
    }

    /// Restore an engine from a previously captured snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: Board::from_raw(state.player1_bits, state.player2_bits),
            active: state.active,
            current: state.current,
            history: state.history,
            scoreboard: state.scoreboard,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
