//! Deferred mismatch resets.
//!
//! When a pair does not match, the session hands back a [`ResetToken`]. The
//! controller gives that token to a `ResetScheduler`, which reports it due
//! after the configured delay. Starting a new game cancels the outstanding
//! token, and the session rejects stale tokens anyway, so a late timer can
//! never touch a newer board.
//!
//! Two schedulers are provided:
//!
//! - [`ManualScheduler`]: a virtual clock advanced by the host. Deterministic;
//!   suited to tests and to hosts with their own frame loop.
//! - [`TokioScheduler`]: one `tokio::time::sleep` task per token, delivering
//!   due tokens on an `mpsc` channel.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::SessionId;
//! use memory_match::scheduler::{ManualScheduler, ResetScheduler};
//! use memory_match::session::ResetToken;
//!
//! let mut scheduler = ManualScheduler::new();
//! let token = ResetToken { session: SessionId::FIRST, attempt: 1 };
//!
//! scheduler.schedule(token, Duration::from_millis(1000));
//! assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
//! assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![token]);
//! ```

mod manual;
mod timer;

pub use manual::ManualScheduler;
pub use timer::TokioScheduler;

use std::time::Duration;

use crate::session::ResetToken;

/// Something that can report a reset token due after a delay.
///
/// Implementations deliver tokens back to the host, which feeds them into
/// [`GameController::fire_reset`](crate::controller::GameController::fire_reset).
pub trait ResetScheduler {
    /// Arrange for `token` to become due after `delay`.
    fn schedule(&mut self, token: ResetToken, delay: Duration);

    /// Drop a scheduled token. Returns `false` if it was not outstanding.
    fn cancel(&mut self, token: ResetToken) -> bool;

    /// Number of tokens scheduled and not yet due or cancelled.
    fn pending_count(&self) -> usize;
}
