//! Card instances and what a renderer may show of them.
//!
//! A card moves through `facedown -> flipped -> matched` or back to
//! `facedown` after a mismatch. `matched` is terminal for the board.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::CardId;

/// One card on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the board, equal to the dealt position.
    pub id: CardId,

    pub symbol: Symbol,

    /// Face-up, either awaiting comparison or as part of a match.
    pub flipped: bool,

    /// Part of a found pair. Never reverts.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// Face-up and not yet part of a match.
    #[must_use]
    pub const fn is_revealed_unmatched(&self) -> bool {
        self.flipped && !self.matched
    }

    /// Whether a tap on this card should do anything.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// What the rendering layer is allowed to show.
    #[must_use]
    pub const fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched(self.symbol)
        } else if self.flipped {
            CardFace::Revealed(self.symbol)
        } else {
            CardFace::Hidden
        }
    }
}

/// The visible side of a card.
///
/// The symbol is only exposed when the card is face-up or matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "symbol", rename_all = "snake_case")]
pub enum CardFace {
    Hidden,
    Revealed(Symbol),
    Matched(Symbol),
}

impl CardFace {
    /// The symbol, if visible.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            CardFace::Hidden => None,
            CardFace::Revealed(symbol) | CardFace::Matched(symbol) => Some(symbol),
        }
    }
}
