//! Blocking echo server.
//!
//! One client at a time. Every chunk received is acknowledged with the
//! literal bytes `OK`; an orderly shutdown (zero-length read) or the
//! quit token ends the connection, after which the next client is
//! accepted.
//!
//! Binding retries after `ServerConfig::bind_retry` while the address is
//! busy, up to `max_bind_attempts` when set.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread;

use tracing::{debug, info, warn};

use super::{ACK, QUIT_TOKEN};
use crate::core::ServerConfig;
use crate::error::Result;

/// Per-connection counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EchoStats {
    /// Chunks acknowledged.
    pub chunks: u64,
    /// Payload bytes received (excluding the quit token).
    pub bytes: u64,
}

/// Outcome of inspecting one received chunk.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Chunk<'a> {
    Closed,
    Quit,
    Message(&'a [u8]),
}

pub(crate) fn classify(data: &[u8]) -> Chunk<'_> {
    if data.is_empty() {
        Chunk::Closed
    } else if data == QUIT_TOKEN.as_bytes() {
        Chunk::Quit
    } else {
        Chunk::Message(data)
    }
}

/// Serve one connection until the peer closes or quits.
pub fn echo_connection<S: Read + Write>(
    stream: &mut S,
    peer: SocketAddr,
    recv_chunk: usize,
) -> Result<EchoStats> {
    let mut stats = EchoStats::default();
    let mut buf = vec![0u8; recv_chunk.max(1)];

    loop {
        let n = stream.read(&mut buf)?;
        match classify(&buf[..n]) {
            Chunk::Closed | Chunk::Quit => break,
            Chunk::Message(data) => {
                info!(%peer, message = %String::from_utf8_lossy(data), "got message");
                stream.write_all(ACK)?;
                stats.chunks += 1;
                stats.bytes += data.len() as u64;
            }
        }
    }

    info!(%peer, chunks = stats.chunks, "closing connection");
    Ok(stats)
}

/// Blocking single-client echo server.
#[derive(Debug)]
pub struct EchoServer {
    listener: TcpListener,
    recv_chunk: usize,
}

impl EchoServer {
    /// Bind the configured address, retrying while it is busy.
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let mut attempts = 0u32;
        let listener = loop {
            match TcpListener::bind(config.addr) {
                Ok(listener) => break listener,
                Err(e) => {
                    attempts += 1;
                    if config.max_bind_attempts.is_some_and(|max| attempts >= max) {
                        return Err(e.into());
                    }
                    warn!(addr = %config.addr, error = %e, retry = ?config.bind_retry, "socket busy, retrying");
                    thread::sleep(config.bind_retry);
                }
            }
        };

        info!(addr = %listener.local_addr()?, "socket bound");
        Ok(Self {
            listener,
            recv_chunk: config.recv_chunk,
        })
    }

    /// Address actually bound (useful with port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept and serve exactly one client.
    pub fn serve_one(&self) -> Result<EchoStats> {
        debug!("waiting for connections");
        let (mut stream, peer) = self.listener.accept()?;
        info!(%peer, "accepted connection");
        echo_connection(&mut stream, peer, self.recv_chunk)
    }

    /// Serve clients one after another until accepting fails.
    ///
    /// Errors on an individual connection are logged and do not stop the server.
    pub fn serve_forever(&self) -> Result<()> {
        loop {
            let (mut stream, peer) = self.listener.accept()?;
            info!(%peer, "accepted connection");
            if let Err(e) = echo_connection(&mut stream, peer, self.recv_chunk) {
                warn!(%peer, error = %e, "connection failed");
            }
        }
    }
}
