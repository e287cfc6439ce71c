//! Round lifecycle: setup from the canonical pool and the rounds-played ledger.

mod setup;

pub use setup::{rounds_played, Round, TWO_PLAYER_FACE_UP};
