//! Identifiers for cards and dealt sessions.
//!
//! ## CardId
//!
//! Cards are numbered `0..2N` in board order when a board is dealt. The id is
//! stable for the lifetime of that board and is what the rendering layer
//! routes taps back with.
//!
//! ## SessionId
//!
//! Every dealt board gets a fresh `SessionId`. Deferred actions carry the
//! session they were scheduled in, so anything that outlives a new deal can be
//! recognized as stale.
//!
//! ```
//! use memory_match::core::{CardId, SessionId};
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//!
//! let first = SessionId::FIRST;
//! assert_eq!(first.next(), SessionId::new(2));
//! ```

use serde::{Deserialize, Serialize};

/// Position-derived identifier of a card on one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Board index this card was dealt at.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity of one dealt board.
///
/// Allocated monotonically by the controller; never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The session id handed out by the first deal.
    pub const FIRST: SessionId = SessionId(1);

    /// Create a session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id the following deal receives.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}
