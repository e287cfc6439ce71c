//! Blocking echo client.
//!
//! Sends each message as-is and waits for the server's reply. An
//! interactive session reads lines until the quit token or end of input.

use std::io::{BufRead, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use tracing::info;

use super::{ACK, QUIT_TOKEN};
use crate::error::Result;

/// Prompt shown before each interactive message.
pub const PROMPT: &str = "Type in a message (q to quit): ";

/// Connected echo client.
#[derive(Debug)]
pub struct EchoClient {
    stream: TcpStream,
}

impl EchoClient {
    /// Connect to an echo server.
    pub fn connect(addr: SocketAddr) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        info!(%addr, "connected");
        Ok(Self { stream })
    }

    /// Send one message and return the server's acknowledgement.
    ///
    /// Empty messages are not sent, since the server would never answer them.
    /// Blocks until a full acknowledgement has arrived, however the bytes
    /// are split across reads.
    pub fn send(&mut self, msg: &str) -> Result<String> {
        if msg.is_empty() {
            return Ok(String::new());
        }
        self.stream.write_all(msg.as_bytes())?;
        let mut reply = [0u8; ACK.len()];
        self.stream.read_exact(&mut reply)?;
        Ok(String::from_utf8_lossy(&reply).into_owned())
    }

    /// Interactive loop: prompt, read a line, send, print the reply.
    ///
    /// Stops on the quit token or end of input. Returns messages sent.
    pub fn run_session<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<usize> {
        let mut sent = 0;
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let msg = line.trim_end_matches(['\r', '\n']);
            if msg == QUIT_TOKEN {
                break;
            }
            if msg.is_empty() {
                continue;
            }

            let reply = self.send(msg)?;
            writeln!(output, "Server response: {}", reply)?;
            sent += 1;
        }

        writeln!(output, "Closing socket...")?;
        self.close()?;
        Ok(sent)
    }

    /// Signal end of stream to the server.
    pub fn close(&self) -> Result<()> {
        info!("closing socket");
        match self.stream.shutdown(Shutdown::Both) {
            Err(e) if e.kind() != std::io::ErrorKind::NotConnected => Err(e.into()),
            _ => Ok(()),
        }
    }
}
