//! Persisted win/loss/draw tally
//!
//! The session owns a `TallyStore` injected at construction, so the
//! engine stays testable without a persistence backend. Storage failures
//! never propagate: a missing or corrupt file reads as all zeros and
//! write errors go to stderr.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::side::Side;

/// Cumulative match results across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::White => self.white_wins += 1,
            Side::Black => self.black_wins += 1,
        }
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
    }
}

/// Durable storage for the tally
pub trait TallyStore {
    /// Load the persisted tally, defaulting to zeros on any failure
    fn load(&mut self) -> Tally;

    /// Persist the tally. Failures are swallowed by the implementation.
    fn save(&mut self, tally: &Tally);
}

/// JSON-file-backed store
pub struct FileTallyStore {
    path: PathBuf,
}

impl FileTallyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location next to the executable's working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("battlechess_tally.json")
    }
}

impl TallyStore for FileTallyStore {
    fn load(&mut self) -> Tally {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, tally: &Tally) {
        let json = match serde_json::to_string_pretty(tally) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Failed to serialize tally: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            eprintln!("Failed to write tally to {}: {}", self.path.display(), err);
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryTallyStore {
    tally: Tally,
    pub saves: u32,
}

impl MemoryTallyStore {
    pub fn new(tally: Tally) -> Self {
        Self { tally, saves: 0 }
    }
}

impl TallyStore for MemoryTallyStore {
    fn load(&mut self) -> Tally {
        self.tally
    }

    fn save(&mut self, tally: &Tally) {
        self.tally = *tally;
        self.saves += 1;
    }
}
