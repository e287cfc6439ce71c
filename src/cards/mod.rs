//! Card records and the canonical pool.
//!
//! ## Key Types
//!
//! - `Card`: Card kind plus remaining copy count (one run of the deck)
//! - `CardPool`: The fixed starting pool every round copies from

pub mod card;
pub mod pool;

pub use card::Card;
pub use pool::{CardPool, INFO};
