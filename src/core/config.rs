//! Configuration types.
//!
//! - `RoundConfig`: player count and optional seed for round setup
//! - `ServerConfig`: address and retry policy for the echo server
//!
//! Both follow the builder style: start from `new`/`default` and chain
//! `with_*` calls. Validation happens where the config is consumed.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest supported table.
pub const MIN_PLAYERS: i64 = 1;

/// Largest supported table.
pub const MAX_PLAYERS: i64 = 4;

/// Configuration for a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Requested player count. Kept signed so bad input can be reported as-is.
    pub players: i64,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl RoundConfig {
    /// Create a configuration for `players` players.
    #[must_use]
    pub const fn new(players: i64) -> Self {
        Self { players, seed: None }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the player count, returning it narrowed to `u8`.
    pub fn validated_players(&self) -> Result<u8> {
        if self.players < MIN_PLAYERS || self.players > MAX_PLAYERS {
            return Err(Error::InvalidConfiguration { players: self.players });
        }
        Ok(self.players as u8)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(MAX_PLAYERS)
    }
}

/// Default echo server port.
pub const DEFAULT_PORT: u16 = 12000;

/// Configuration for the echo server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,

    /// Delay between bind attempts when the address is busy.
    pub bind_retry: Duration,

    /// Maximum bytes read per receive call.
    pub recv_chunk: usize,

    /// Give up after this many failed binds. `None` retries forever.
    pub max_bind_attempts: Option<u32>,
}

impl ServerConfig {
    /// Create a configuration for `addr` with default retry policy.
    #[must_use]
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            ..Self::default()
        }
    }

    /// Set the delay between bind attempts.
    #[must_use]
    pub fn with_bind_retry(mut self, delay: Duration) -> Self {
        self.bind_retry = delay;
        self
    }

    /// Bound the number of bind attempts.
    #[must_use]
    pub fn with_max_bind_attempts(mut self, attempts: u32) -> Self {
        self.max_bind_attempts = Some(attempts);
        self
    }

    /// Set the receive chunk size.
    #[must_use]
    pub fn with_recv_chunk(mut self, bytes: usize) -> Self {
        self.recv_chunk = bytes.max(1);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            bind_retry: Duration::from_secs(60),
            recv_chunk: 64,
            max_bind_attempts: None,
        }
    }
}
