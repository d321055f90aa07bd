#![cfg(feature = "std")]

//! Session object tying the engine to its turn timer.
//!
//! One [`GameSession`] is instantiated per process and handed to the
//! presentation layer; UI events map 1:1 onto [`Command`] values and come
//! back as [`Reply`] values to render from. The session performs all timer
//! hygiene so callers never touch the countdown directly.

use crate::{
    game::GameEngine,
    common::{Move, MoveOutcome},
    timer::TurnTimer,
};
use log::debug;

/// A UI event translated into an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: usize, col: usize },
    Undo,
    NewGame,
}

/// What a dispatched command did, for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A stone was placed; the outcome says how the game moved on.
    Placed(MoveOutcome),
    /// The most recent move was taken back.
    Undone(Move),
    /// A fresh game was started.
    Restarted,
    /// The command was a defensive no-op (occupied cell, finished game,
    /// empty history, or a command arriving mid-dispatch).
    Ignored,
}

/// Engine plus turn timer, with a double-fire guard on dispatch.
pub struct GameSession {
    engine: GameEngine,
    timer: TurnTimer,
    in_flight: bool,
}

impl GameSession {
    pub fn new(engine: GameEngine, timer: TurnTimer) -> Self {
        Self {
            engine,
            timer,
            in_flight: false,
        }
    }

    /// Begin the first game of the session and arm the turn clock.
    pub fn start(&mut self) {
        self.engine.start_new_game();
        self.timer.reset();
    }

    /// Run one command to completion. Commands arriving while a previous
    /// one is mid-dispatch are dropped (rapid double-fire from the input
    /// layer), matching the engine's no-op posture for invalid input.
    pub fn dispatch(&mut self, cmd: Command) -> Reply {
        if self.in_flight {
            return Reply::Ignored;
        }
        self.in_flight = true;
        debug!("dispatch {:?}", cmd);
        let reply = match cmd {
            Command::Place { row, col } => match self.engine.place_move(row, col) {
                Some(outcome) => {
                    match outcome {
                        MoveOutcome::Continue => self.timer.reset(),
                        // game over, no further turns to time
                        MoveOutcome::Win { .. } | MoveOutcome::Draw => self.timer.cancel(),
                    }
                    Reply::Placed(outcome)
                }
                None => Reply::Ignored,
            },
            Command::Undo => match self.engine.undo() {
                Some(mv) => {
                    self.timer.reset();
                    Reply::Undone(mv)
                }
                None => Reply::Ignored,
            },
            Command::NewGame => {
                self.engine.start_new_game();
                self.timer.reset();
                Reply::Restarted
            }
        };
        self.in_flight = false;
        reply
    }

    /// Forward a timer expiry into the engine: switch turns without a move
    /// and rearm. Returns `false` when the game is already over (a stale
    /// expiry that raced game end), in which case the timer stays cancelled.
    pub fn expire_turn(&mut self) -> bool {
        if self.engine.expire_turn() {
            self.timer.reset();
            true
        } else {
            self.timer.cancel();
            false
        }
    }

    /// Read access for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The turn timer, exposed for state checks.
    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }
}
