//! Card symbols.

use serde::{Deserialize, Serialize};

/// The face value a pair shares.
///
/// A single `char`, so letters and single-codepoint emoji both work.
/// Serializes as a one-character string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    #[must_use]
    pub const fn new(value: char) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new('A').to_string(), "A");
        assert_eq!(Symbol::from('🍒').to_string(), "🍒");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Symbol::new('Q')).unwrap();
        assert_eq!(json, "\"Q\"");

        let back: Symbol = serde_json::from_str("\"Q\"").unwrap();
        assert_eq!(back.as_char(), 'Q');

        assert!(serde_json::from_str::<Symbol>("\"QQ\"").is_err());
    }
}
