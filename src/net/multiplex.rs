//! Multiplexed echo server on a single thread.
//!
//! Runs on a tokio current-thread runtime: the accept loop and every
//! connection share one OS thread and interleave at socket reads and
//! writes. The echo rule matches the blocking server.

use std::future::Future;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::server::{classify, Chunk};
use super::ACK;
use crate::core::ServerConfig;
use crate::error::Result;

/// Bind the configured address, retrying while it is busy.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener> {
    let mut attempts = 0u32;
    loop {
        match TcpListener::bind(config.addr).await {
            Ok(listener) => {
                info!(addr = %listener.local_addr()?, "socket bound");
                return Ok(listener);
            }
            Err(e) => {
                attempts += 1;
                if config.max_bind_attempts.is_some_and(|max| attempts >= max) {
                    return Err(e.into());
                }
                warn!(addr = %config.addr, error = %e, retry = ?config.bind_retry, "socket busy, retrying");
                tokio::time::sleep(config.bind_retry).await;
            }
        }
    }
}

async fn echo_connection(mut stream: TcpStream, peer: SocketAddr, recv_chunk: usize) -> Result<()> {
    let mut buf = vec![0u8; recv_chunk.max(1)];
    loop {
        let n = stream.read(&mut buf).await?;
        match classify(&buf[..n]) {
            Chunk::Closed | Chunk::Quit => break,
            Chunk::Message(data) => {
                info!(%peer, message = %String::from_utf8_lossy(data), "got message");
                stream.write_all(ACK).await?;
            }
        }
    }
    info!(%peer, "closing connection");
    Ok(())
}

/// Accept and serve clients concurrently until `shutdown` resolves.
pub async fn serve_multiplexed<F>(listener: TcpListener, recv_chunk: usize, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    info!("waiting for connections");

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                info!(%peer, "accepted connection");
                tokio::spawn(async move {
                    if let Err(e) = echo_connection(stream, peer, recv_chunk).await {
                        warn!(%peer, error = %e, "connection failed");
                    }
                });
            }
        }
    }
}

/// Build a current-thread runtime and serve until Ctrl-C.
pub fn run_multiplexed(config: &ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let listener = bind_listener(config).await?;
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "cannot listen for interrupt");
                std::future::pending::<()>().await;
            }
        };
        serve_multiplexed(listener, config.recv_chunk, shutdown).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn loopback() -> ServerConfig {
        ServerConfig::new("127.0.0.1:0".parse().unwrap())
    }

    async fn roundtrip(stream: &mut TcpStream, msg: &[u8]) -> Vec<u8> {
        stream.write_all(msg).await.unwrap();
        let mut buf = [0u8; 2];
        stream.read_exact(&mut buf).await.unwrap();
        buf.to_vec()
    }

    #[tokio::test]
    async fn test_serves_two_clients_at_once() {
        let listener = bind_listener(&loopback()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_multiplexed(listener, 64, async {
            let _ = rx.await;
        }));

        let mut a = TcpStream::connect(addr).await.unwrap();
        let mut b = TcpStream::connect(addr).await.unwrap();

        // Interleave: both connections stay open at the same time
        assert_eq!(roundtrip(&mut a, b"from a").await, b"OK");
        assert_eq!(roundtrip(&mut b, b"from b").await, b"OK");
        assert_eq!(roundtrip(&mut a, b"again").await, b"OK");

        drop(a);
        drop(b);
        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_gives_up_after_max_attempts() {
        let taken = bind_listener(&loopback()).await.unwrap();
        let config = ServerConfig::new(taken.local_addr().unwrap())
            .with_bind_retry(std::time::Duration::from_millis(1))
            .with_max_bind_attempts(2);

        assert!(bind_listener(&config).await.is_err());
    }
}
