//! The public telescope client facade.
//!
//! Composes a [`Transport`] with the command exchange into the operations a
//! host program calls.  The client exclusively owns its connection handle:
//! it is created on [`TelescopeClient::connect`], destroyed on
//! [`TelescopeClient::disconnect`], and never shared.  No command is issued
//! while the link is closed — every connected operation checks the
//! precondition before touching the wire.

use nexstar_core::{Command, HorizontalCoordinates, TelescopeModel};
use tracing::info;

use crate::application::command_exchange::{exchange, ClientError};
use crate::infrastructure::transport::{
    SerialLinkConfig, SerialTransport, Transport, TransportError,
};

/// Synchronous client for a NexStar hand controller.
///
/// All operations block the calling thread until the exchange completes or
/// a timeout elapses; the caller serializes calls on one connection.
pub struct TelescopeClient {
    link: SerialLinkConfig,
    transport: Option<Box<dyn Transport>>,
}

impl TelescopeClient {
    /// Creates a disconnected client with the given link parameters.
    pub fn new(link: SerialLinkConfig) -> Self {
        Self {
            link,
            transport: None,
        }
    }

    /// Creates a client over a pre-built transport.
    ///
    /// Used by tests and demos to drive the protocol over a
    /// [`crate::infrastructure::transport::MockTransport`].
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            link: SerialLinkConfig::default(),
            transport: Some(transport),
        }
    }

    /// Opens the serial port and reports whether the link is active.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Open`] if the OS refuses the port.
    pub fn connect(&mut self, port_name: &str) -> Result<bool, TransportError> {
        let transport = SerialTransport::open(port_name, self.link.clone())?;
        let active = transport.is_open();
        self.transport = Some(Box::new(transport));
        info!(port = port_name, "connected to hand controller");
        Ok(active)
    }

    /// Closes the link and drops the handle.
    ///
    /// Safe to call at any time, including when never connected or already
    /// disconnected.
    pub fn disconnect(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            transport.close();
            info!("disconnected from hand controller");
        }
    }

    /// Whether the client currently holds an open link.  Pure query.
    pub fn is_connected(&self) -> bool {
        self.transport.as_ref().is_some_and(|t| t.is_open())
    }

    fn transport_mut(&mut self) -> Result<&mut dyn Transport, ClientError> {
        match self.transport.as_deref_mut() {
            Some(transport) => Ok(transport),
            None => Err(ClientError::NotConnected),
        }
    }

    /// Slews to the given azimuth and elevation in decimal degrees.
    ///
    /// Fire-and-forget: the controller sends no acknowledgement, so success
    /// means the command line was written, not that the mount accepted it.
    /// Use [`Self::is_moving`] to observe the slew.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotConnected`] while closed; [`ClientError::Transport`]
    /// on a write failure.
    pub fn goto_azm_elev(&mut self, azimuth: f64, elevation: f64) -> Result<(), ClientError> {
        let target = HorizontalCoordinates { azimuth, elevation };
        let command = Command::goto_azm_elev(target);
        exchange(self.transport_mut()?, &command)?;
        info!(%target, "goto issued");
        Ok(())
    }

    /// Immediately cancels the goto in progress.
    ///
    /// This is just another blocking write — it does not abort a read that
    /// some other caller has in flight.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotConnected`] while closed; [`ClientError::Transport`]
    /// on a write failure.
    pub fn cancel_goto(&mut self) -> Result<(), ClientError> {
        exchange(self.transport_mut()?, &Command::cancel_goto())?;
        info!("goto cancelled");
        Ok(())
    }

    /// Whether a goto is currently moving the mount.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotConnected`] while closed; [`ClientError::Transport`]
    /// on a write failure or reply timeout.
    pub fn is_moving(&mut self) -> Result<bool, ClientError> {
        let reply = exchange(self.transport_mut()?, &Command::query_moving())?;
        Ok(reply.is_some_and(Command::interpret_moving_reply))
    }

    /// The mount model reported by the controller.
    ///
    /// Codes outside the known table come back as
    /// [`TelescopeModel::Unknown`] — a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotConnected`] while closed; [`ClientError::Transport`]
    /// on a write failure or reply timeout.
    pub fn model(&mut self) -> Result<TelescopeModel, ClientError> {
        match exchange(self.transport_mut()?, &Command::query_model())? {
            Some(code) => Ok(TelescopeModel::from_code(code)),
            // The model query is tagged SingleByte, so the exchange cannot
            // return empty; a missing byte surfaces as a timeout instead.
            None => Err(ClientError::Transport(TransportError::Timeout(
                self.link.read_timeout,
            ))),
        }
    }

    /// Whether the mount has completed alignment.
    ///
    /// # Errors
    ///
    /// [`ClientError::NotConnected`] while closed; [`ClientError::Transport`]
    /// on a write failure or reply timeout.
    pub fn is_aligned(&mut self) -> Result<bool, ClientError> {
        let reply = exchange(self.transport_mut()?, &Command::query_alignment())?;
        Ok(reply.is_some_and(Command::interpret_aligned_reply))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
