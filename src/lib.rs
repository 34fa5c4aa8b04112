//! Battlechess - a 6x6 asymmetric board game engine
//!
//! The rules core (`core`) is pure: immutable board snapshots, a move
//! generator, and a turn resolver that reports animation intents instead
//! of rendering. `session` layers the interactive state machine on top
//! of it, `store` persists the match tally, and `repl` exposes a
//! line-oriented text protocol.

pub mod core;
pub mod repl;
pub mod session;
pub mod store;

pub use core::{Board, GameStatus, Loc, Side, Unit, UnitKind};
pub use session::GameSession;
pub use store::{FileTallyStore, MemoryTallyStore, Tally, TallyStore};
