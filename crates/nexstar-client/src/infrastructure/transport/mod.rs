//! Byte-level transport abstraction over the serial link.
//!
//! The hand controller needs exactly five things from the physical layer:
//! write a terminated line, read one byte with a deadline, drop any
//! buffered unread bytes, report whether the link is open, and close.  The
//! [`Transport`] trait captures that surface so the command exchange can be
//! tested against [`mock::MockTransport`] instead of real hardware.
//!
//! Architecture:
//! - [`serial::SerialTransport`] owns the physical port (via `serialport`).
//! - [`mock::MockTransport`] is the scripted in-memory double.
//! - [`SerialLinkConfig`] carries the link parameters explicitly so tests
//!   can run with short timeouts against a simulated link.

pub mod mock;
pub mod serial;

use std::time::Duration;

use thiserror::Error;

pub use mock::MockTransport;
pub use serial::SerialTransport;

/// Baud rate mandated by the hand controller.  Not negotiable on real
/// hardware; overridable in [`SerialLinkConfig`] for simulated links.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Read and write deadline mandated by the hand controller protocol.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3500);

/// Errors that can occur on the physical link.
///
/// These are surfaced to the caller unmodified — the client performs no
/// retry, backoff, or reconnect.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The serial port could not be opened.
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    /// A read or write did not complete before its deadline.
    #[error("serial link timed out after {0:?}")]
    Timeout(Duration),

    /// An operation was attempted on a closed link.
    #[error("serial link is closed")]
    Closed,

    /// An I/O error other than a timeout occurred on the link.
    #[error("serial link I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serial driver rejected a port operation.
    #[error("serial driver error: {0}")]
    Driver(#[from] serialport::Error),
}

/// Parameters of the serial link.
///
/// The defaults are the values the hand controller requires (9600 baud,
/// 3500 ms each way); data bits, parity, and stop bits are fixed at 8N1 and
/// not configurable.  Tests override the timeouts to keep failure-path
/// tests fast.
#[derive(Debug, Clone)]
pub struct SerialLinkConfig {
    /// Line speed in baud.
    pub baud_rate: u32,
    /// Deadline for a single blocking read.
    pub read_timeout: Duration,
    /// Deadline for a single blocking write.
    pub write_timeout: Duration,
}

impl Default for SerialLinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: DEFAULT_TIMEOUT,
            write_timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The byte-level link the command exchange runs over.
///
/// Implementations are exclusively owned by one client instance; the trait
/// takes `&mut self` everywhere because the protocol is strictly
/// single-exchange-at-a-time.
pub trait Transport: Send {
    /// Writes `text` followed by the line terminator (`\n`), blocking until
    /// written or the write deadline elapses.
    fn write_line(&mut self, text: &str) -> Result<(), TransportError>;

    /// Reads one byte, blocking for at most the read deadline.
    fn read_byte(&mut self) -> Result<u8, TransportError>;

    /// Drops any buffered unread bytes.
    ///
    /// Called after every exchange so stale reply bytes cannot leak into
    /// the next command's reply.
    fn discard_input(&mut self) -> Result<(), TransportError>;

    /// Whether the link is currently open.  Pure query.
    fn is_open(&self) -> bool;

    /// Releases the link.  Idempotent: closing a closed link is a no-op.
    fn close(&mut self);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
