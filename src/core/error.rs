//! Errors for the only fallible surface: configuration.
//!
//! Gameplay never fails. Invalid selections are reported as
//! [`IgnoreReason`](crate::session::IgnoreReason), not as errors.

use thiserror::Error;

/// Reasons a [`GameConfig`](super::GameConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one symbol is required, got {0}")]
    TooFewSymbols(usize),
    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(char),
    #[error("mismatch delay must be greater than zero")]
    ZeroDelay,
    #[error("board must have at least one column")]
    ZeroColumns,
    #[error("symbol {symbol:?} appears {count} times in the layout, expected 2")]
    UnpairedSymbol { symbol: char, count: usize },
    #[error("card at position {index} has id {id}")]
    MisnumberedCard { index: usize, id: u32 },
    #[error("cards with symbol {0:?} have inconsistent matched flags")]
    InconsistentMatch(char),
    #[error("{0} unmatched cards are face-up, at most 2 allowed")]
    TooManyRevealed(usize),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
