//! Scripted in-memory transport for testing the protocol without hardware.
//!
//! # Why a mock transport?
//!
//! The real [`super::SerialTransport`] needs a physical hand controller on a
//! serial port, blocks for up to 3.5 s on timeouts, and cannot be observed
//! from test code.  `MockTransport` replaces the port with in-memory
//! recording: every written line is captured, reply bytes are served from a
//! script the test queues up, and discard calls are counted so tests can
//! assert the buffer-flush discipline.
//!
//! # Sharing with the client
//!
//! [`crate::TelescopeClient`] takes ownership of its transport, so the mock
//! keeps its state behind an `Arc<Mutex<..>>` and is `Clone`: the test holds
//! one handle for scripting and assertions while the client owns the other.
//!
//! ```ignore
//! let mock = MockTransport::new();
//! let mut client = TelescopeClient::with_transport(Box::new(mock.clone()));
//!
//! mock.push_reply(b'0');
//! assert!(!client.is_moving().unwrap());
//! assert_eq!(mock.written_lines(), vec!["L"]);
//! ```
//!
//! # Failure injection
//!
//! `set_fail_reads(true)` makes every read time out and `set_open(false)`
//! simulates a dropped link, so error-handling paths can be tested without a
//! broken cable.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Transport, TransportError};

#[derive(Debug, Default)]
struct MockState {
    written_lines: Vec<String>,
    replies: VecDeque<u8>,
    discard_calls: usize,
    open: bool,
    fail_reads: bool,
    fail_writes: bool,
}

/// A scripted transport double that records all calls.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates an open mock with no scripted replies.
    pub fn new() -> Self {
        let mock = Self::default();
        mock.state.lock().unwrap().open = true;
        mock
    }

    /// Creates an open mock that will serve `replies` in order.
    pub fn with_replies(replies: &[u8]) -> Self {
        let mock = Self::new();
        mock.state.lock().unwrap().replies.extend(replies);
        mock
    }

    /// Queues one reply byte for the next read.
    pub fn push_reply(&self, byte: u8) {
        self.state.lock().unwrap().replies.push_back(byte);
    }

    /// Every line passed to `write_line`, without terminators, oldest first.
    pub fn written_lines(&self) -> Vec<String> {
        self.state.lock().unwrap().written_lines.clone()
    }

    /// How many times `discard_input` has been called.
    pub fn discard_calls(&self) -> usize {
        self.state.lock().unwrap().discard_calls
    }

    /// Number of scripted reply bytes not yet consumed.
    pub fn pending_replies(&self) -> usize {
        self.state.lock().unwrap().replies.len()
    }

    /// Opens or closes the simulated link.
    pub fn set_open(&self, open: bool) {
        self.state.lock().unwrap().open = open;
    }

    /// When `true`, every read fails with [`TransportError::Timeout`].
    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    /// When `true`, every write fails with [`TransportError::Timeout`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }
}

impl Transport for MockTransport {
    /// Records the line, or times out if write failure is injected.
    fn write_line(&mut self, text: &str) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        if !state.open {
            return Err(TransportError::Closed);
        }
        if state.fail_writes {
            return Err(TransportError::Timeout(Duration::ZERO));
        }
        state.written_lines.push(text.to_string());
        Ok(())
    }

    /// Serves the next scripted byte; an empty script reads like a silent
    /// device and times out.
    fn read_byte(&mut self) -> Result<u8, TransportError> {
        let mut state = self.state.lock().unwrap();
        if !state.open {
            return Err(TransportError::Closed);
        }
        if state.fail_reads {
            return Err(TransportError::Timeout(Duration::ZERO));
        }
        state
            .replies
            .pop_front()
            .ok_or(TransportError::Timeout(Duration::ZERO))
    }

    /// Counts the call and drops any unconsumed scripted bytes, mirroring a
    /// real input-buffer flush.
    fn discard_input(&mut self) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        if !state.open {
            return Err(TransportError::Closed);
        }
        state.discard_calls += 1;
        state.replies.clear();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.state.lock().unwrap().open
    }

    fn close(&mut self) {
        self.state.lock().unwrap().open = false;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
