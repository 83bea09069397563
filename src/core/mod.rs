//! Core engine types: ids, RNG, configuration, errors.
//!
//! Everything here is independent of how a board is laid out or played.

pub mod id;
pub mod rng;
pub mod config;
pub mod error;

pub use id::{CardId, SessionId};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_COLUMNS, DEFAULT_MISMATCH_DELAY, DEFAULT_SYMBOLS};
pub use error::ConfigError;
