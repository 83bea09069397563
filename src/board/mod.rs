//! Board layout: dealing, lookup, and grid chunking.

mod layout;

pub use layout::Board;
