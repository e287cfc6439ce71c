//! # rabu-retta
//!
//! Round setup for the Rabu Retta card game, built on a run-length
//! encoded deck, plus a handful of small companion demos.
//!
//! ## Design Principles
//!
//! 1. **Compressed storage, expanded view**: The deck keeps one record per
//!    card kind but indexes, removes and iterates by logical card position.
//!
//! 2. **Fail before mutating**: Bad indices and bad player counts are
//!    rejected before any state changes.
//!
//! 3. **Deterministic setup**: All randomness flows through a seeded
//!    `GameRng`, so rounds can be replayed.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Card records and the canonical pool
//! - `deck`: `LogicalSequence` trait, run-length `Deck`, `Tally`
//! - `round`: Round setup and the rounds-played ledger
//! - `fleet`: Starship roster and JSON files
//! - `storage`: Crew text files
//! - `net`: Echo server and client
//! - `numbers`: Fibonacci, modular integers, multiples

pub mod cards;
pub mod core;
pub mod deck;
pub mod error;
pub mod fleet;
pub mod net;
pub mod numbers;
pub mod round;
pub mod storage;

// Re-export commonly used types
pub use crate::cards::{Card, CardPool};
pub use crate::core::{GameRng, RoundConfig, ServerConfig};
pub use crate::deck::{Deck, LogicalSequence, Tally};
pub use crate::error::{Error, Result};
pub use crate::round::{rounds_played, Round};
