//! One command/reply exchange over the transport.
//!
//! Each invocation walks a fixed sequence — check the link, write the framed
//! line, read the reply if the command expects one, flush residual input —
//! and returns to idle.  The protocol has no sequence numbers or reply
//! correlation, so the exchange is strictly non-reentrant: the caller must
//! finish one exchange (including its buffer discard) before starting the
//! next, or replies will be misattributed.
//!
//! The trailing [`Transport::discard_input`] on every success path is what
//! keeps successive commands aligned: some firmware revisions append a
//! terminator byte after the documented reply, and without the flush that
//! byte would surface as the next command's reply.

use nexstar_core::{Command, ReplyShape};
use thiserror::Error;
use tracing::{debug, trace};

use crate::infrastructure::transport::{Transport, TransportError};

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A command was attempted while the link was closed.  Checked before
    /// any I/O on every connected operation.
    #[error("telescope is not connected")]
    NotConnected,

    /// The link failed mid-exchange; surfaced unmodified, never retried.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Runs one synchronous command/reply exchange.
///
/// Returns the reply byte for reply-bearing commands and `None` for
/// fire-and-forget commands.  Residual input is discarded before returning
/// on every success path, including the no-reply path.
///
/// # Errors
///
/// Fails with [`ClientError::NotConnected`] before any I/O if the transport
/// is not open, and with [`ClientError::Transport`] if the write, read, or
/// flush fails.
pub fn exchange(
    transport: &mut dyn Transport,
    command: &Command,
) -> Result<Option<u8>, ClientError> {
    if !transport.is_open() {
        return Err(ClientError::NotConnected);
    }

    let line = command.wire_text();
    debug!(command = %line, "sending command");
    transport.write_line(&line)?;

    let reply = match command.reply_shape() {
        ReplyShape::None => None,
        ReplyShape::SingleByte | ReplyShape::SingleByteBoolean => {
            let byte = transport.read_byte()?;
            trace!(reply = byte, "received reply byte");
            Some(byte)
        }
    };

    transport.discard_input()?;
    Ok(reply)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
