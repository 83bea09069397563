//! Session state and its pure transitions.
//!
//! A `SessionState` is one dealt board plus the counters and the pending
//! selection. Transitions never mutate the receiver: `apply` (and the
//! `select`/`reset` it dispatches to) return the next state alongside an
//! outcome. The board and history live in `im` vectors, so the copy each
//! transition makes is O(1) and shares structure with the previous state.
//!
//! ## Invariants
//!
//! - At most two cards are `flipped && !matched`, and they are exactly the
//!   cards in `pending_selection`.
//! - `matches <= attempts` and `matches <= pair_count`.
//! - A pending reset exists iff two unmatched cards are face-up.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{GameEvent, IgnoreReason, Outcome, ResetOutcome, ResetToken, SelectOutcome};
use crate::board::Board;
use crate::cards::{Card, Symbol};
use crate::core::{CardId, GameConfig, GameRng, SessionId};

/// One completed two-card comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number within the session.
    pub attempt: u32,
    pub first: CardId,
    pub second: CardId,
    pub matched: bool,
}

/// Next state plus what the event did.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: Outcome,
}

/// Board and progress of one game.
///
/// Serializes for saving and inspection. It is only ever built by `deal` or
/// `with_board`, so it has no `Deserialize`: a decoded state could pair a
/// pending selection with no reset token and stall the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionState {
    session: SessionId,
    board: Board,
    attempts: u32,
    matches: u32,
    /// Face-up unmatched cards, in selection order.
    pending: SmallVec<[CardId; 2]>,
    /// Set while a mismatched pair waits to be turned back.
    awaiting_reset: Option<ResetToken>,
    history: Vector<AttemptRecord>,
}

impl SessionState {
    /// Deal a new board for `session`.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng, session: SessionId) -> Self {
        Self::with_board(session, &Board::deal(config.symbols(), rng))
    }

    /// Start a session on a prepared board.
    ///
    /// Only the layout is kept: every card starts face-down and unmatched,
    /// whatever state the board was in.
    #[must_use]
    pub fn with_board(session: SessionId, board: &Board) -> Self {
        Self {
            session,
            board: board.face_down(),
            attempts: 0,
            matches: 0,
            pending: SmallVec::new(),
            awaiting_reset: None,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.board.get(id)
    }

    /// Completed comparisons, matched or not.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Pairs found.
    #[must_use]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.board.pair_count()
    }

    /// Cards currently face-up and awaiting comparison or reset.
    #[must_use]
    pub fn pending_selection(&self) -> &[CardId] {
        &self.pending
    }

    /// The reset the session is waiting for, if a mismatch is showing.
    #[must_use]
    pub fn awaiting_reset(&self) -> Option<ResetToken> {
        self.awaiting_reset
    }

    #[must_use]
    pub fn history(&self) -> &Vector<AttemptRecord> {
        &self.history
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matches as usize == self.board.pair_count()
    }

    // === Transitions ===

    /// Apply any event.
    #[must_use]
    pub fn apply(&self, event: GameEvent) -> Transition {
        match event {
            GameEvent::Select(id) => {
                let (state, outcome) = self.select(id);
                Transition {
                    state,
                    outcome: Outcome::Select(outcome),
                }
            }
            GameEvent::ResetElapsed(token) => {
                let (state, outcome) = self.reset(token);
                Transition {
                    state,
                    outcome: Outcome::Reset(outcome),
                }
            }
        }
    }

    /// Turn a card face-up and resolve the pair if it is the second one.
    ///
    /// Ignored (state returned unchanged) when a mismatched pair is still
    /// showing, the id is unknown, or the card is already flipped or matched.
    #[must_use]
    pub fn select(&self, id: CardId) -> (Self, SelectOutcome) {
        if let Some(reason) = self.rejection(id) {
            return (self.clone(), SelectOutcome::Ignored(reason));
        }

        let mut next = self.clone();
        let Some(card) = next.board.flip(id) else {
            return (self.clone(), SelectOutcome::Ignored(IgnoreReason::UnknownCard));
        };

        let Some(&first_id) = next.pending.first() else {
            next.pending.push(id);
            return (next, SelectOutcome::FirstFlip { card: id });
        };

        let first_symbol = next.symbol_of(first_id);
        next.attempts += 1;
        let pair = [first_id, id];
        let matched = first_symbol == Some(card.symbol);

        next.history.push_back(AttemptRecord {
            attempt: next.attempts,
            first: first_id,
            second: id,
            matched,
        });

        if matched {
            next.board.mark_matched(card.symbol);
            next.matches += 1;
            next.pending.clear();
            let completed = next.is_complete();
            (
                next,
                SelectOutcome::Matched {
                    pair,
                    symbol: card.symbol,
                    completed,
                },
            )
        } else {
            next.pending.push(id);
            let reset = ResetToken {
                session: next.session,
                attempt: next.attempts,
            };
            next.awaiting_reset = Some(reset);
            (next, SelectOutcome::Mismatched { pair, reset })
        }
    }

    /// Turn the mismatched pair back over.
    ///
    /// Only the token of the currently showing mismatch has any effect;
    /// anything else (another session, an older attempt) is stale.
    #[must_use]
    pub fn reset(&self, token: ResetToken) -> (Self, ResetOutcome) {
        if self.awaiting_reset != Some(token) {
            return (self.clone(), ResetOutcome::Stale);
        }

        let mut next = self.clone();
        let hidden = next.board.hide_unmatched();
        next.pending.clear();
        next.awaiting_reset = None;
        (next, ResetOutcome::Applied { hidden })
    }

    fn rejection(&self, id: CardId) -> Option<IgnoreReason> {
        if self.pending.len() >= 2 {
            return Some(IgnoreReason::AwaitingReset);
        }
        match self.board.get(id) {
            None => Some(IgnoreReason::UnknownCard),
            Some(card) if card.matched => Some(IgnoreReason::AlreadyMatched),
            Some(card) if card.flipped => Some(IgnoreReason::AlreadyFlipped),
            Some(_) => None,
        }
    }

    fn symbol_of(&self, id: CardId) -> Option<Symbol> {
        self.board.get(id).map(|card| card.symbol)
    }
}
