//! Game configuration.
//!
//! A `GameConfig` fixes everything a deal depends on:
//! - the symbol set (one pair per symbol)
//! - the delay before a mismatched pair turns back over
//! - the grid width used by `Board::rows`
//! - an optional RNG seed for reproducible deals
//!
//! Validation happens at construction and at the deserialization boundary,
//! so holding a `GameConfig` means holding a valid one.
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     symbols = ["A", "B", "C"]
//!     mismatch_delay_ms = 500
//! "#).unwrap();
//!
//! assert_eq!(config.pair_count(), 3);
//! assert_eq!(config.card_count(), 6);
//! ```

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Symbol;

/// Symbols of the classic board.
pub const DEFAULT_SYMBOLS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// How long a mismatched pair stays face-up.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Grid width of the classic 4x4 board.
pub const DEFAULT_COLUMNS: usize = 4;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawGameConfig {
    #[serde(default = "default_symbols")]
    symbols: Vec<Symbol>,
    #[serde(default = "default_delay_ms")]
    mismatch_delay_ms: u64,
    #[serde(default = "default_columns")]
    columns: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

fn default_symbols() -> Vec<Symbol> {
    DEFAULT_SYMBOLS.iter().copied().map(Symbol::new).collect()
}

fn default_delay_ms() -> u64 {
    DEFAULT_MISMATCH_DELAY.as_millis() as u64
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

/// Validated game configuration.
///
/// Invariants: at least one symbol, no duplicate symbols, non-zero delay,
/// non-zero column count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig", into = "RawGameConfig")]
pub struct GameConfig {
    symbols: Vec<Symbol>,
    mismatch_delay: Duration,
    columns: usize,
    seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given symbol set with default timing.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, ConfigError> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        validate_symbols(&symbols)?;

        Ok(Self {
            symbols,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            columns: DEFAULT_COLUMNS,
            seed: None,
        })
    }

    /// Parse a configuration from TOML. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawGameConfig = toml::from_str(source)?;
        Self::try_from(raw)
    }

    /// Set the mismatch delay.
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Result<Self, ConfigError> {
        if delay.is_zero() {
            return Err(ConfigError::ZeroDelay);
        }
        self.mismatch_delay = delay;
        Ok(self)
    }

    /// Set the grid width.
    pub fn with_columns(mut self, columns: usize) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        self.columns = columns;
        Ok(self)
    }

    /// Fix the RNG seed so every controller built from this config deals the
    /// same sequence of boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The symbol set, one pair per symbol.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of pairs on a board (N).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of cards on a board (2N).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            columns: DEFAULT_COLUMNS,
            seed: None,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.symbols)?
            .with_mismatch_delay(Duration::from_millis(raw.mismatch_delay_ms))?
            .with_columns(raw.columns)
            .map(|config| match raw.seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            })
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            symbols: config.symbols,
            mismatch_delay_ms: config.mismatch_delay.as_millis() as u64,
            columns: config.columns,
            seed: config.seed,
        }
    }
}

fn validate_symbols(symbols: &[Symbol]) -> Result<(), ConfigError> {
    if symbols.is_empty() {
        return Err(ConfigError::TooFewSymbols(symbols.len()));
    }

    let mut seen = FxHashSet::default();
    for symbol in symbols {
        if !seen.insert(*symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol.as_char()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.mismatch_delay(), Duration::from_millis(1000));
        assert_eq!(config.columns(), 4);
        assert_eq!(config.seed(), None);
        assert_eq!(config.symbols()[0], Symbol::new('A'));
        assert_eq!(config.symbols()[7], Symbol::new('H'));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new("XYZ".chars().map(Symbol::new))
            .unwrap()
            .with_mismatch_delay(Duration::from_millis(250))
            .unwrap()
            .with_columns(3)
            .unwrap()
            .with_seed(9);

        assert_eq!(config.pair_count(), 3);
        assert_eq!(config.mismatch_delay(), Duration::from_millis(250));
        assert_eq!(config.columns(), 3);
        assert_eq!(config.seed(), Some(9));
    }

    #[test]
    fn test_rejects_empty_symbols() {
        let err = GameConfig::new(Vec::new()).unwrap_err();
        assert_eq!(err, ConfigError::TooFewSymbols(0));
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let err = GameConfig::new("ABA".chars().map(Symbol::new)).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSymbol('A'));
    }

    #[test]
    fn test_rejects_zero_delay_and_columns() {
        let config = GameConfig::default();
        assert_eq!(
            config.clone().with_mismatch_delay(Duration::ZERO).unwrap_err(),
            ConfigError::ZeroDelay
        );
        assert_eq!(config.with_columns(0).unwrap_err(), ConfigError::ZeroColumns);
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_toml_full() {
        let config = GameConfig::from_toml_str(
            r#"
            symbols = ["🍎", "🍌"]
            mismatch_delay_ms = 2000
            columns = 2
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.symbols(), &[Symbol::new('🍎'), Symbol::new('🍌')]);
        assert_eq!(config.mismatch_delay(), Duration::from_secs(2));
        assert_eq!(config.columns(), 2);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_from_toml_validates() {
        let err = GameConfig::from_toml_str("symbols = []").unwrap_err();
        assert_eq!(err, ConfigError::TooFewSymbols(0));

        let err = GameConfig::from_toml_str("mismatch_delay_ms = 0").unwrap_err();
        assert_eq!(err, ConfigError::ZeroDelay);

        let err = GameConfig::from_toml_str("columns = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serde_roundtrip_keeps_validation() {
        let config = GameConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let bad = r#"{"symbols":["A","A"],"mismatch_delay_ms":10,"columns":4}"#;
        assert!(serde_json::from_str::<GameConfig>(bad).is_err());
    }
}
