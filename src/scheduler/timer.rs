//! Tokio-backed scheduler.
//!
//! Each scheduled token gets a task that sleeps for the delay and then sends
//! the token on an unbounded channel. Cancelling aborts the task. A token that
//! was already sent before `cancel` still arrives on the channel; the session
//! rejects it as stale.

use std::time::Duration;

use rustc_hash::FxHashMap;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ResetScheduler;
use crate::session::ResetToken;

/// Scheduler that fires real timers on a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    handle: Handle,
    sender: mpsc::UnboundedSender<ResetToken>,
    tasks: FxHashMap<ResetToken, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Create a scheduler spawning onto `handle`.
    ///
    /// Due tokens are delivered on the returned receiver.
    #[must_use]
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<ResetToken>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            handle,
            sender,
            tasks: FxHashMap::default(),
        };
        (scheduler, receiver)
    }

    fn prune_finished(&mut self) {
        self.tasks.retain(|_, task| !task.is_finished());
    }
}

impl ResetScheduler for TokioScheduler {
    fn schedule(&mut self, token: ResetToken, delay: Duration) {
        self.prune_finished();

        let sender = self.sender.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host stopped listening.
            let _ = sender.send(token);
        });

        if let Some(previous) = self.tasks.insert(token, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, token: ResetToken) -> bool {
        match self.tasks.remove(&token) {
            Some(task) => {
                let outstanding = !task.is_finished();
                task.abort();
                outstanding
            }
            None => false,
        }
    }

    fn pending_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
