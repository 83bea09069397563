//! Game controller: session ownership, dealing, and reset scheduling.

mod game;
mod snapshot;

pub use game::GameController;
pub use snapshot::{Snapshot, TileView};
