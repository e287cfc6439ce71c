//! Core types: deterministic RNG and configuration.

pub mod config;
pub mod rng;

pub use config::{RoundConfig, ServerConfig, DEFAULT_PORT, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
