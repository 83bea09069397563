//! Events that drive a session and the outcomes they report.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::{CardId, SessionId};

/// Identifies one scheduled mismatch reset.
///
/// Tied to the session it was scheduled in and to the attempt that produced
/// the mismatch, so a reset can only ever act on the pair that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetToken {
    pub session: SessionId,
    pub attempt: u32,
}

impl std::fmt::Display for ResetToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reset({}, attempt {})", self.session, self.attempt)
    }
}

/// Input to a session transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player tapped a card.
    Select(CardId),
    /// A scheduled mismatch reset came due.
    ResetElapsed(ResetToken),
}

/// Why a selection did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Two cards are already face-up waiting to be turned back.
    AwaitingReset,
    /// No card with this id on the board.
    UnknownCard,
    AlreadyFlipped,
    AlreadyMatched,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IgnoreReason::AwaitingReset => "two cards are already face-up",
            IgnoreReason::UnknownCard => "no such card",
            IgnoreReason::AlreadyFlipped => "card is already face-up",
            IgnoreReason::AlreadyMatched => "card is already matched",
        };
        f.write_str(text)
    }
}

/// What a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face-up.
    FirstFlip { card: CardId },
    /// Second card matched the first.
    Matched {
        pair: [CardId; 2],
        symbol: Symbol,
        /// Every pair on the board is now found.
        completed: bool,
    },
    /// Second card did not match. Both stay face-up until `reset` is applied.
    Mismatched { pair: [CardId; 2], reset: ResetToken },
}

impl SelectOutcome {
    /// Whether the selection changed any state.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// The reset to schedule, if this selection produced a mismatch.
    #[must_use]
    pub fn reset_token(&self) -> Option<ResetToken> {
        match self {
            SelectOutcome::Mismatched { reset, .. } => Some(*reset),
            _ => None,
        }
    }
}

/// What a reset did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetOutcome {
    /// The mismatched cards were turned back over.
    Applied { hidden: usize },
    /// The token belongs to another session or an already-resolved attempt.
    Stale,
}

/// Outcome of any event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Select(SelectOutcome),
    Reset(ResetOutcome),
}
