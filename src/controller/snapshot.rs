//! Read-only view of a game for rendering layers.

use serde::{Deserialize, Serialize};

use crate::cards::CardFace;
use crate::core::{CardId, SessionId};
use crate::session::SessionState;

/// One tile as a renderer should draw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub id: CardId,
    pub face: CardFace,
    /// Taps on this tile would be accepted.
    pub selectable: bool,
}

/// Everything a renderer needs to draw the current game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub tiles: Vec<TileView>,
    pub columns: usize,
    pub attempts: u32,
    pub matches: u32,
    pub total_pairs: usize,
    pub completed: bool,
}

impl Snapshot {
    pub(crate) fn capture(state: &SessionState, columns: usize) -> Self {
        let awaiting_reset = state.awaiting_reset().is_some();
        let tiles = state
            .board()
            .iter()
            .map(|card| TileView {
                id: card.id,
                face: card.face(),
                selectable: card.is_selectable() && !awaiting_reset,
            })
            .collect();

        Self {
            session: state.session(),
            tiles,
            columns,
            attempts: state.attempts(),
            matches: state.matches(),
            total_pairs: state.pair_count(),
            completed: state.is_complete(),
        }
    }

    /// Tiles chunked into grid rows.
    pub fn rows(&self) -> impl Iterator<Item = &[TileView]> {
        self.tiles.chunks(self.columns.max(1))
    }
}
