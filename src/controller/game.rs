//! The game controller.

use std::time::Duration;

use tracing::{debug, trace};

use super::snapshot::Snapshot;
use crate::board::Board;
use crate::cards::Card;
use crate::core::{CardId, GameConfig, GameRng, SessionId};
use crate::scheduler::{ManualScheduler, ResetScheduler};
use crate::session::{ResetOutcome, ResetToken, SelectOutcome, SessionState};

/// Owns the current session and drives it.
///
/// The controller is the only place side effects happen: it deals with the
/// RNG, hands mismatch resets to the scheduler, cancels them on a new deal,
/// and logs. Game rules live in [`SessionState`].
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use memory_match::controller::GameController;
/// use memory_match::core::{CardId, GameConfig};
/// use memory_match::scheduler::ManualScheduler;
///
/// let config = GameConfig::default().with_seed(7);
/// let mut game = GameController::new(config, ManualScheduler::new());
///
/// game.select_card(CardId::new(0));
/// game.select_card(CardId::new(1));
/// assert_eq!(game.attempts(), 1);
///
/// // Any mismatch turns back after the configured delay.
/// game.advance(Duration::from_millis(1000));
/// assert!(game.cards().all(|card| !card.flipped || card.matched));
/// ```
#[derive(Debug)]
pub struct GameController<S: ResetScheduler> {
    config: GameConfig,
    rng: GameRng,
    scheduler: S,
    state: SessionState,
    next_session: SessionId,
}

impl<S: ResetScheduler> GameController<S> {
    /// Create a controller and deal the first game.
    ///
    /// Uses the configured seed if there is one, otherwise entropy.
    pub fn new(config: GameConfig, scheduler: S) -> Self {
        let rng = match config.seed() {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng, scheduler)
    }

    /// Create a controller with an explicit RNG and deal the first game.
    pub fn with_rng(config: GameConfig, mut rng: GameRng, scheduler: S) -> Self {
        let session = SessionId::FIRST;
        let state = SessionState::deal(&config, &mut rng, session);
        debug!(%session, pairs = config.pair_count(), seed = rng.seed(), "dealt new game");

        Self {
            config,
            rng,
            scheduler,
            state,
            next_session: session.next(),
        }
    }

    /// Start over on a prepared board instead of a random deal.
    ///
    /// Only the board's layout is used; every card starts face-down. Behaves
    /// like `new_game` otherwise: counters reset, any pending reset is
    /// cancelled. Returns the new session id.
    pub fn restart_with(&mut self, board: Board) -> SessionId {
        let session = self.begin_session();
        self.state = SessionState::with_board(session, &board);
        debug!(%session, pairs = self.state.pair_count(), "started game on fixed board");
        session
    }

    /// Deal a fresh board and reset all counters.
    ///
    /// A mismatch reset still outstanding from the previous game is
    /// cancelled; should it be delivered anyway it is rejected as stale.
    pub fn new_game(&mut self) -> SessionId {
        let session = self.begin_session();
        self.state = SessionState::deal(&self.config, &mut self.rng, session);
        debug!(%session, pairs = self.config.pair_count(), "dealt new game");
        session
    }

    fn begin_session(&mut self) -> SessionId {
        if let Some(token) = self.state.awaiting_reset() {
            let cancelled = self.scheduler.cancel(token);
            debug!(%token, cancelled, "cancelled pending reset for new game");
        }

        let session = self.next_session;
        self.next_session = session.next();
        session
    }

    /// Flip a card. Invalid selections are no-ops reported as `Ignored`.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let (next, outcome) = self.state.select(id);

        match outcome {
            SelectOutcome::Ignored(reason) => {
                trace!(card = %id, %reason, "selection ignored");
                return outcome;
            }
            SelectOutcome::FirstFlip { card } => {
                trace!(%card, "first card flipped");
            }
            SelectOutcome::Matched {
                symbol, completed, ..
            } => {
                debug!(%symbol, matches = next.matches(), attempts = next.attempts(), completed, "pair matched");
            }
            SelectOutcome::Mismatched { pair, reset } => {
                let delay = self.config.mismatch_delay();
                debug!(
                    first = %pair[0],
                    second = %pair[1],
                    %reset,
                    delay_ms = delay.as_millis() as u64,
                    "pair mismatched, scheduling reset"
                );
                self.scheduler.schedule(reset, delay);
            }
        }

        self.state = next;
        outcome
    }

    /// Apply a due mismatch reset.
    ///
    /// Tokens from an earlier session or an already-resolved attempt are
    /// discarded.
    pub fn fire_reset(&mut self, token: ResetToken) -> ResetOutcome {
        let (next, outcome) = self.state.reset(token);
        match outcome {
            ResetOutcome::Applied { hidden } => {
                trace!(%token, hidden, "mismatched pair turned back");
                self.state = next;
            }
            ResetOutcome::Stale => {
                debug!(%token, current = %self.state.session(), "discarded stale reset");
            }
        }
        outcome
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.state.session()
    }

    /// Cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.state.board().iter()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.state.attempts()
    }

    #[must_use]
    pub fn matches(&self) -> u32 {
        self.state.matches()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Renderable view of the current game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.config.columns())
    }
}

impl GameController<ManualScheduler> {
    /// Advance the virtual clock and apply every reset that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ResetOutcome> {
        self.scheduler
            .advance(elapsed)
            .into_iter()
            .map(|token| self.fire_reset(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    const DELAY: Duration = Duration::from_millis(1000);

    fn controller() -> GameController<ManualScheduler> {
        GameController::new(GameConfig::default().with_seed(42), ManualScheduler::new())
    }

    /// Cards 0 and 3 are "A", 1 and 2 are "B", 4 and 5 are "C".
    fn fixed() -> GameController<ManualScheduler> {
        let mut game = controller();
        let board = Board::from_layout("ABBACC".chars().map(Symbol::new)).unwrap();
        game.restart_with(board);
        game
    }

    fn id(raw: u32) -> CardId {
        CardId::new(raw)
    }

    #[test]
    fn test_new_controller_deals() {
        let game = controller();
        assert_eq!(game.cards().count(), 16);
        assert_eq!(game.session(), SessionId::FIRST);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.matches(), 0);
    }

    #[test]
    fn test_match_schedules_nothing() {
        let mut game = fixed();
        game.select_card(id(0));
        let outcome = game.select_card(id(3));

        assert!(matches!(outcome, SelectOutcome::Matched { .. }));
        assert_eq!(game.scheduler().pending_count(), 0);
    }

    #[test]
    fn test_mismatch_schedules_reset() {
        let mut game = fixed();
        game.select_card(id(0));
        let outcome = game.select_card(id(1));
        let token = outcome.reset_token().unwrap();

        assert_eq!(game.scheduler().pending_count(), 1);
        assert_eq!(game.scheduler().due_at(token), Some(DELAY));

        assert!(game.advance(DELAY - Duration::from_millis(1)).is_empty());
        assert!(game.state().card(id(0)).unwrap().flipped);

        let applied = game.advance(Duration::from_millis(1));
        assert_eq!(applied, vec![ResetOutcome::Applied { hidden: 2 }]);
        assert!(!game.state().card(id(0)).unwrap().flipped);
        assert!(!game.state().card(id(1)).unwrap().flipped);
    }

    #[test]
    fn test_ignored_selection_leaves_state() {
        let mut game = fixed();
        let before = game.state().clone();

        let outcome = game.select_card(id(99));

        assert!(outcome.is_ignored());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_new_game_cancels_pending_reset() {
        let mut game = fixed();
        game.select_card(id(0));
        let token = game.select_card(id(1)).reset_token().unwrap();

        let session = game.new_game();

        assert_ne!(session, token.session);
        assert_eq!(game.scheduler().pending_count(), 0);
        assert_eq!(game.fire_reset(token), ResetOutcome::Stale);
    }

    #[test]
    fn test_sessions_are_monotonic() {
        let mut game = controller();
        let second = game.new_game();
        let third = game.new_game();

        assert_eq!(second, SessionId::new(2));
        assert_eq!(third, SessionId::new(3));
    }

    #[test]
    fn test_seeded_controllers_deal_alike() {
        let a = controller();
        let b = controller();
        assert_eq!(a.state().board(), b.state().board());
    }

    #[test]
    fn test_snapshot() {
        let mut game = fixed();
        game.select_card(id(0));
        game.select_card(id(1));

        let snapshot = game.snapshot();
        assert_eq!(snapshot.tiles.len(), 6);
        assert_eq!(snapshot.attempts, 1);
        assert_eq!(snapshot.total_pairs, 3);
        assert!(!snapshot.completed);
        assert_eq!(snapshot.tiles[0].face.symbol(), Some(Symbol::new('A')));
        assert_eq!(snapshot.tiles[2].face.symbol(), None);
        // Nothing is tappable while a mismatch is showing.
        assert!(snapshot.tiles.iter().all(|tile| !tile.selectable));

        let rows: Vec<_> = snapshot.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 2);
    }
}
