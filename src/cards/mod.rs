//! Cards: symbols, card instances, and their visible faces.

mod symbol;
mod card;

pub use symbol::Symbol;
pub use card::{Card, CardFace};
