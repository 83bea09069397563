//! End-to-end tests with real (paused) tokio timers.
//!
//! The host loop owns the controller and feeds due tokens from the
//! scheduler's channel back into `fire_reset`.

use std::time::Duration;

use tokio::runtime::Handle;

use memory_match::board::Board;
use memory_match::cards::Symbol;
use memory_match::controller::GameController;
use memory_match::core::{CardId, GameConfig};
use memory_match::scheduler::TokioScheduler;
use memory_match::session::ResetOutcome;

fn id(raw: u32) -> CardId {
    CardId::new(raw)
}

fn fixed_board() -> Board {
    Board::from_layout("ABBA".chars().map(Symbol::new)).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_mismatch_turns_back_after_delay() {
    let (scheduler, mut due) = TokioScheduler::new(Handle::current());
    let mut game = GameController::new(GameConfig::default().with_seed(1), scheduler);
    game.restart_with(fixed_board());

    let start = tokio::time::Instant::now();
    game.select_card(id(0));
    game.select_card(id(1));
    assert!(game.state().card(id(0)).unwrap().flipped);

    let token = due.recv().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(game.fire_reset(token), ResetOutcome::Applied { hidden: 2 });

    assert!(!game.state().card(id(0)).unwrap().flipped);
    assert!(!game.state().card(id(1)).unwrap().flipped);
}

#[tokio::test(start_paused = true)]
async fn test_custom_delay() {
    let config = GameConfig::default()
        .with_mismatch_delay(Duration::from_millis(250))
        .unwrap()
        .with_seed(1);
    let (scheduler, mut due) = TokioScheduler::new(Handle::current());
    let mut game = GameController::new(config, scheduler);
    game.restart_with(fixed_board());

    let start = tokio::time::Instant::now();
    game.select_card(id(0));
    game.select_card(id(2));

    let token = due.recv().await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(250));
    assert!(elapsed < Duration::from_millis(1000));
    assert_eq!(game.fire_reset(token), ResetOutcome::Applied { hidden: 2 });
}

#[tokio::test(start_paused = true)]
async fn test_new_game_cancels_timer() {
    let (scheduler, mut due) = TokioScheduler::new(Handle::current());
    let mut game = GameController::new(GameConfig::default().with_seed(1), scheduler);
    game.restart_with(fixed_board());

    game.select_card(id(0));
    game.select_card(id(1));
    game.new_game();
    game.select_card(id(0));

    let waited = tokio::time::timeout(Duration::from_secs(5), due.recv()).await;
    assert!(waited.is_err(), "cancelled reset must not be delivered");
    assert!(game.state().card(id(0)).unwrap().flipped);
}
