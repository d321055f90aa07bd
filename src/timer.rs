#![cfg(feature = "std")]

//! Cancellable per-turn countdown.
//!
//! [`TurnTimer`] owns at most one live tokio task at any instant: every
//! reset aborts the existing handle before spawning a replacement, so a
//! stale countdown can never fire after a new turn has begun. The timer
//! carries no game logic; it only emits events, and the session decides
//! what they mean.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

/// Events emitted by the countdown task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One tick elapsed; `remaining` seconds are left in the turn.
    Tick { remaining: u64 },
    /// The turn budget ran out. The receiver forwards this into
    /// `expire_turn` and rearms.
    Expired,
}

/// Handle to the recurring one-second tick source for the current turn.
pub struct TurnTimer {
    events: UnboundedSender<TimerEvent>,
    seconds: u64,
    tick: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TurnTimer {
    /// Create an unarmed timer with a one-second tick. Call [`reset`] to
    /// start the first countdown.
    ///
    /// [`reset`]: TurnTimer::reset
    pub fn new(events: UnboundedSender<TimerEvent>, seconds: u64) -> Self {
        Self::with_tick(events, seconds, Duration::from_secs(1))
    }

    /// Create an unarmed timer with a custom tick period. Tests shrink the
    /// tick to keep wall-clock time down.
    pub fn with_tick(events: UnboundedSender<TimerEvent>, seconds: u64, tick: Duration) -> Self {
        Self {
            events,
            seconds,
            tick,
            handle: None,
        }
    }

    /// Restart the countdown from the full turn budget, cancelling any
    /// countdown already in flight first.
    pub fn reset(&mut self) {
        self.cancel();
        let events = self.events.clone();
        let tick = self.tick;
        let mut remaining = self.seconds;
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(tick);
            ticker.tick().await; // first tick completes immediately, skip it
            loop {
                ticker.tick().await;
                remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    let _ = events.send(TimerEvent::Expired);
                    return;
                }
                if events.send(TimerEvent::Tick { remaining }).is_err() {
                    // receiver gone, nothing left to time
                    return;
                }
            }
        }));
    }

    /// Stop the countdown without rearming. Safe to call when unarmed.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Returns `true` while a countdown task is armed and running.
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
