//! Echo protocol over TCP.
//!
//! No framing: each chunk read by the server is answered with [`ACK`].
//! A zero-length read (peer closed) or a chunk equal to [`QUIT_TOKEN`]
//! ends the connection.

pub mod client;
pub mod multiplex;
pub mod server;

/// Reply sent for every received chunk.
pub const ACK: &[u8] = b"OK";

/// Message that ends a session.
pub const QUIT_TOKEN: &str = "q";

pub use client::{EchoClient, PROMPT};
pub use multiplex::{bind_listener, run_multiplexed, serve_multiplexed};
pub use server::{echo_connection, EchoServer, EchoStats};
