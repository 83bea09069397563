//! # memory-match
//!
//! A memory-matching card game engine.
//!
//! A board of face-down cards hides pairs of matching symbols. The player
//! flips two cards per turn; matches stay face-up, mismatches turn back
//! after a delay, and attempt/match counters track progress.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `SessionState` is a value. Every event produces a
//!    new state and an outcome; nothing is mutated in place.
//!
//! 2. **Explicit deferred work**: a mismatch yields a `ResetToken` tied to the
//!    session. The controller schedules it, cancels it on a new deal, and the
//!    session rejects it if it is stale.
//!
//! 3. **No failing gameplay**: invalid selections are no-ops reported as
//!    `SelectOutcome::Ignored`. Only configuration can fail.
//!
//! ## Modules
//!
//! - `core`: ids, deterministic RNG, configuration, errors
//! - `cards`: symbols, cards, visible faces
//! - `board`: dealing and layout
//! - `session`: state machine and events
//! - `scheduler`: deferred mismatch resets (manual clock, tokio timers)
//! - `controller`: ties state, RNG and scheduler together

pub mod core;
pub mod cards;
pub mod board;
pub mod session;
pub mod scheduler;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigError, GameConfig, GameRng, SessionId};

pub use crate::cards::{Card, CardFace, Symbol};

pub use crate::board::Board;

pub use crate::session::{
    AttemptRecord, GameEvent, IgnoreReason, Outcome, ResetOutcome, ResetToken, SelectOutcome,
    SessionState, Transition,
};

pub use crate::scheduler::{ManualScheduler, ResetScheduler, TokioScheduler};

pub use crate::controller::{GameController, Snapshot, TileView};
