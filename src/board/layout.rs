//! The ordered card layout of one game.
//!
//! The `Board` owns the `2N` cards of a deal. Cards are stored in an
//! `im::Vector` so that cloning a board (every pure transition does) is O(1)
//! and only the touched chunks are copied on write.
//!
//! ## Usage
//!
//! ```
//! use memory_match::board::Board;
//! use memory_match::cards::Symbol;
//! use memory_match::core::{CardId, GameRng};
//!
//! let symbols: Vec<Symbol> = "AB".chars().map(Symbol::new).collect();
//! let board = Board::deal(&symbols, &mut GameRng::new(42));
//!
//! assert_eq!(board.len(), 4);
//! assert!(board.get(CardId::new(3)).is_some());
//! assert!(board.get(CardId::new(4)).is_none());
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Symbol};
use crate::core::{CardId, ConfigError, GameRng};

/// Ordered sequence of cards, exactly two per symbol.
///
/// Deserialization goes through the same checks as [`Board::from_layout`]
/// plus the card flags: ids must equal positions, both cards of a pair agree
/// on `matched`, and at most two unmatched cards are face-up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cards: Vector<Card>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    cards: Vec<Card>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let layout: Vec<Symbol> = raw.cards.iter().map(|card| card.symbol).collect();
        check_pairs(&layout)?;

        let mut matched: FxHashMap<Symbol, bool> = FxHashMap::default();
        for (index, card) in raw.cards.iter().enumerate() {
            if card.id.index() != index {
                return Err(ConfigError::MisnumberedCard { index, id: card.id.raw() });
            }
            if card.matched && !card.flipped {
                return Err(ConfigError::InconsistentMatch(card.symbol.as_char()));
            }
            if let Some(&other) = matched.get(&card.symbol) {
                if other != card.matched {
                    return Err(ConfigError::InconsistentMatch(card.symbol.as_char()));
                }
            }
            matched.insert(card.symbol, card.matched);
        }

        let revealed = raw.cards.iter().filter(|card| card.is_revealed_unmatched()).count();
        if revealed > 2 {
            return Err(ConfigError::TooManyRevealed(revealed));
        }

        Ok(Self { cards: raw.cards.into_iter().collect() })
    }
}

/// Every symbol in `layout` must appear exactly twice.
fn check_pairs(layout: &[Symbol]) -> Result<(), ConfigError> {
    if layout.is_empty() {
        return Err(ConfigError::TooFewSymbols(0));
    }

    let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
    for &symbol in layout {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    // First offending symbol in layout order, for a stable error.
    if let Some(&symbol) = layout.iter().find(|s| counts[*s] != 2) {
        return Err(ConfigError::UnpairedSymbol {
            symbol: symbol.as_char(),
            count: counts[&symbol],
        });
    }
    Ok(())
}

impl Board {
    /// Deal a fresh board: every symbol twice, uniformly shuffled, ids
    /// assigned `0..2N` in the shuffled order.
    pub fn deal(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut layout: Vec<Symbol> = symbols
            .iter()
            .flat_map(|&symbol| [symbol, symbol])
            .collect();

        rng.shuffle(&mut layout);

        Self::from_ordered(layout)
    }

    /// Build a board from an explicit layout, in order.
    ///
    /// Used to replay a known deal. Every symbol must appear exactly twice.
    pub fn from_layout(layout: impl IntoIterator<Item = Symbol>) -> Result<Self, ConfigError> {
        let layout: Vec<Symbol> = layout.into_iter().collect();
        check_pairs(&layout)?;
        Ok(Self::from_ordered(layout))
    }

    fn from_ordered(layout: Vec<Symbol>) -> Self {
        let cards = layout
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::new(CardId::new(index as u32), symbol))
            .collect();
        Self { cards }
    }

    /// The same layout with every card face-down and unmatched.
    #[must_use]
    pub fn face_down(&self) -> Self {
        let mut board = self.clone();
        for card in board.cards.iter_mut() {
            card.flipped = false;
            card.matched = false;
        }
        board
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Look up a card. Unknown ids yield `None`.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The symbols in board order, e.g. for logging or replay.
    #[must_use]
    pub fn layout(&self) -> Vec<Symbol> {
        self.cards.iter().map(|card| card.symbol).collect()
    }

    /// How many cards carry each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Cards that are face-up but not part of a match.
    pub fn revealed_unmatched(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.is_revealed_unmatched())
    }

    /// Number of matched cards (always even).
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }

    /// Chunk the board into grid rows of `columns` cards.
    ///
    /// The last row may be shorter. `columns == 0` is treated as 1.
    #[must_use]
    pub fn rows(&self, columns: usize) -> Vec<Vec<Card>> {
        let columns = columns.max(1);
        let cards: Vec<Card> = self.cards.iter().copied().collect();
        cards.chunks(columns).map(<[Card]>::to_vec).collect()
    }

    // === Mutation (used by session transitions) ===

    /// Turn a card face-up. Returns the card, or `None` for unknown ids.
    pub(crate) fn flip(&mut self, id: CardId) -> Option<Card> {
        let card = self.cards.get_mut(id.index())?;
        card.flipped = true;
        Some(*card)
    }

    /// Mark every card with `symbol` as matched and face-up.
    ///
    /// Returns how many cards were marked.
    pub(crate) fn mark_matched(&mut self, symbol: Symbol) -> usize {
        let mut marked = 0;
        for card in self.cards.iter_mut().filter(|card| card.symbol == symbol) {
            card.flipped = true;
            card.matched = true;
            marked += 1;
        }
        marked
    }

    /// Turn every face-up, unmatched card back over.
    ///
    /// Returns how many cards were turned.
    pub(crate) fn hide_unmatched(&mut self) -> usize {
        let mut hidden = 0;
        for card in self.cards.iter_mut().filter(|card| card.is_revealed_unmatched()) {
            card.flipped = false;
            hidden += 1;
        }
        hidden
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
