//! Virtual-clock scheduler.
//!
//! Time only moves when the host calls `advance`. Tokens due at the same
//! instant come out in scheduling order.

use std::time::Duration;

use super::ResetScheduler;
use crate::session::ResetToken;

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    due: Duration,
    token: ResetToken,
}

/// Scheduler driven by an explicit clock.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: Vec<Scheduled>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// When `token` becomes due, if it is outstanding.
    #[must_use]
    pub fn due_at(&self, token: ResetToken) -> Option<Duration> {
        self.queue
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.due)
    }

    /// Move the clock forward and return every token that became due, in
    /// due order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ResetToken> {
        self.now = self.now.saturating_add(elapsed);

        let now = self.now;
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            self.queue.drain(..).partition(|entry| entry.due <= now);
        self.queue = pending;

        // Stable sort keeps scheduling order for equal deadlines.
        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| entry.token).collect()
    }
}

impl ResetScheduler for ManualScheduler {
    fn schedule(&mut self, token: ResetToken, delay: Duration) {
        self.queue.push(Scheduled {
            due: self.now.saturating_add(delay),
            token,
        });
    }

    fn cancel(&mut self, token: ResetToken) -> bool {
        let before = self.queue.len();
        self.queue.retain(|entry| entry.token != token);
        self.queue.len() != before
    }

    fn pending_count(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionId;

    fn token(session: u64, attempt: u32) -> ResetToken {
        ResetToken {
            session: SessionId::new(session),
            attempt,
        }
    }

    #[test]
    fn test_not_due_before_delay() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(token(1, 1), Duration::from_millis(1000));

        assert!(scheduler.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.due_at(token(1, 1)), Some(Duration::from_millis(1000)));

        assert_eq!(scheduler.advance(Duration::from_millis(500)), vec![token(1, 1)]);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(1000));
    }

    #[test]
    fn test_due_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(token(1, 2), Duration::from_millis(300));
        scheduler.schedule(token(1, 1), Duration::from_millis(100));
        scheduler.schedule(token(1, 3), Duration::from_millis(100));

        let due = scheduler.advance(Duration::from_secs(1));
        assert_eq!(due, vec![token(1, 1), token(1, 3), token(1, 2)]);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_millis(250));
        scheduler.schedule(token(1, 1), Duration::from_millis(100));

        assert_eq!(scheduler.due_at(token(1, 1)), Some(Duration::from_millis(350)));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(token(1, 1), Duration::from_millis(100));

        assert!(scheduler.cancel(token(1, 1)));
        assert!(!scheduler.cancel(token(1, 1)));
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }
}
