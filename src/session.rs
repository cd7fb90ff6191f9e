//! Single-sender TCP ingestion session
//!
//! # Purpose
//!
//! Owns the listening socket and the one accepted connection, pulls raw
//! chunks off the wire, and routes each through decode → classify → log.
//! The stream is strictly one-directional: nothing is ever written back.
//!
//! # Connection Lifecycle
//!
//! ```text
//! 1. Listener binds with SO_REUSEADDR (immediate rebind after restart)
//! 2. Exactly one sender is accepted; the process never re-accepts
//! 3. Loop: blocking read of up to 4096 bytes -> decode -> classify -> log
//! 4. Zero-length read = orderly peer close, session ends
//! ```
//!
//! All I/O is blocking with no timeouts; process termination is the only
//! way to abort a stalled accept or read. Both sockets are scope-owned, so
//! every exit path (peer close, refusal, fault) releases the stream and
//! the listener on return.

use crate::decoder::{classify, decode_chunk, format_angles, Classification};
use crate::error::{Error, Result};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};

/// Read buffer size: one chunk is at most this many bytes.
pub const RECV_BUFFER_SIZE: usize = 4096;

/// How many bytes of a chunk the trace-level hex preview shows.
const TRACE_PREVIEW_LEN: usize = 32;

/// How a session ended, distinct from the error outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The sender closed the connection in an orderly way.
    PeerClosed,
}

/// Owns the listening socket for a single-sender ingestion session.
pub struct JointSession {
    listener: TcpListener,
}

impl JointSession {
    /// Bind and listen on `addr` with address reuse enabled.
    ///
    /// `SO_REUSEADDR` has to be set before bind, which `std` cannot do,
    /// so the socket is built through `socket2` and converted afterwards.
    /// Backlog is 1: a single concurrent sender is supported.
    pub fn bind(addr: SocketAddr) -> Result<Self> {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&addr.into())?;
        socket.listen(1)?;
        Ok(Self {
            listener: socket.into(),
        })
    }

    /// Local address of the listener (useful when bound to port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept one sender and ingest its stream until it disconnects.
    ///
    /// Blocks on accept and on every read. Returns
    /// [`SessionEnd::PeerClosed`] on orderly close. A refusal at accept
    /// time maps to [`Error::ConnectionRefused`]; any other transport
    /// fault propagates as [`Error::Io`]. Neither is retried.
    pub fn run(&self) -> Result<SessionEnd> {
        let (stream, peer) = self.listener.accept().map_err(|e| match e.kind() {
            std::io::ErrorKind::ConnectionRefused | std::io::ErrorKind::ConnectionAborted => {
                Error::ConnectionRefused
            }
            _ => Error::Io(e),
        })?;
        log::info!("Sender connected: {}", peer);
        ingest(stream)
    }
}

/// Receive loop for one connected stream.
fn ingest(mut stream: TcpStream) -> Result<SessionEnd> {
    let mut buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            log::info!("Sender closed the connection");
            return Ok(SessionEnd::PeerClosed);
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("RX {} bytes: {:02X?}", n, &buf[..n.min(TRACE_PREVIEW_LEN)]);
        }

        report(&buf[..n]);
    }
}

/// Decode, classify, and log one chunk.
fn report(chunk: &[u8]) {
    let frame = decode_chunk(chunk);
    match classify(&frame) {
        Classification::JointUpdate {
            angles,
            topic_detected,
        } => {
            log::info!("Packet received ({} bytes)", chunk.len());
            if topic_detected {
                log::info!("Topic detected: joint_state");
            }
            log::info!("Decoded angles: {:?}", format_angles(&angles));
        }
        Classification::Info { text } => {
            log::info!("Text message: {}", text);
        }
        Classification::Discard => {
            log::trace!("Discarded {} bytes of noise", chunk.len());
        }
    }
}
