//! Session state machine.
//!
//! ## Events
//!
//! A session only changes in response to a [`GameEvent`]:
//! - `Select(card)`: the player tapped a card
//! - `ResetElapsed(token)`: a scheduled mismatch reset came due
//!
//! Dealing a new board is not an event on the old session; it produces a new
//! `SessionState` with a new [`SessionId`](crate::core::SessionId).
//!
//! ## Example
//!
//! ```
//! use memory_match::board::Board;
//! use memory_match::cards::Symbol;
//! use memory_match::core::{CardId, SessionId};
//! use memory_match::session::{SelectOutcome, SessionState};
//!
//! let board = Board::from_layout("ABAB".chars().map(Symbol::new)).unwrap();
//! let state = SessionState::with_board(SessionId::FIRST, &board);
//!
//! let (state, _) = state.select(CardId::new(0));
//! let (state, outcome) = state.select(CardId::new(2));
//!
//! assert!(matches!(outcome, SelectOutcome::Matched { .. }));
//! assert_eq!(state.matches(), 1);
//! ```

mod event;
mod state;

pub use event::{GameEvent, IgnoreReason, Outcome, ResetOutcome, ResetToken, SelectOutcome};
pub use state::{AttemptRecord, SessionState, Transition};
