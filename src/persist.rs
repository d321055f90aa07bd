#![cfg(feature = "std")]

//! Scoreboard persistence: a flat bincode record of three counters.
//!
//! Load failures degrade to an all-zero scoreboard instead of blocking
//! gameplay; the schema has three fields and no history of change, so no
//! versioning is carried.

use crate::scoreboard::Scoreboard;
use anyhow::Context;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when neither a CLI flag nor `GOMOKU_SCORES` is set.
pub const SCOREBOARD_FILE: &str = "gomoku_scores.bin";

/// Resolve the scoreboard path: `GOMOKU_SCORES` env override, else
/// [`SCOREBOARD_FILE`] in the working directory.
pub fn default_scoreboard_path() -> PathBuf {
    std::env::var_os("GOMOKU_SCORES")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SCOREBOARD_FILE))
}

/// Write the scoreboard to `path`.
pub fn save_scoreboard(path: &Path, scoreboard: &Scoreboard) -> anyhow::Result<()> {
    let bytes = bincode::serialize(scoreboard)?;
    fs::write(path, bytes).with_context(|| format!("writing scoreboard to {}", path.display()))?;
    Ok(())
}

/// Read a scoreboard previously written with [`save_scoreboard`].
pub fn load_scoreboard(path: &Path) -> anyhow::Result<Scoreboard> {
    let bytes = fs::read(path)
        .with_context(|| format!("reading scoreboard from {}", path.display()))?;
    let scoreboard = bincode::deserialize(&bytes)
        .with_context(|| format!("decoding scoreboard from {}", path.display()))?;
    Ok(scoreboard)
}

/// Load the scoreboard at session start. A missing file is a normal first
/// run; any other failure is logged and the tallies start from zero.
pub fn load_or_default(path: &Path) -> Scoreboard {
    if !path.exists() {
        return Scoreboard::default();
    }
    match load_scoreboard(path) {
        Ok(scoreboard) => scoreboard,
        Err(err) => {
            warn!("scoreboard load failed ({:#}); starting from zero", err);
            Scoreboard::default()
        }
    }
}
