//! Real serial-port transport backed by the `serialport` crate.

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, Parity, SerialPort, StopBits};
use tracing::{debug, trace};

use super::{SerialLinkConfig, Transport, TransportError};

/// Owns the physical serial port.
///
/// The port handle is held in an `Option` so that [`Transport::close`] can
/// release it and remain idempotent; every I/O method fails with
/// [`TransportError::Closed`] once the handle is gone.
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    config: SerialLinkConfig,
    port_name: String,
}

impl SerialTransport {
    /// Opens `port_name` with the link parameters in `config`.
    ///
    /// Data bits, parity, and stop bits are fixed at 8N1 — the hand
    /// controller supports nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Open`] if the OS refuses the port.
    pub fn open(port_name: &str, config: SerialLinkConfig) -> Result<Self, TransportError> {
        let port = serialport::new(port_name, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| TransportError::Open {
                port: port_name.to_string(),
                source,
            })?;

        debug!(port = port_name, baud = config.baud_rate, "serial port opened");

        Ok(Self {
            port: Some(port),
            config,
            port_name: port_name.to_string(),
        })
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>, TransportError> {
        self.port.as_mut().ok_or(TransportError::Closed)
    }

    /// Translates a timed-out I/O error into [`TransportError::Timeout`]
    /// carrying the deadline that elapsed.
    fn map_io(error: std::io::Error, deadline: Duration) -> TransportError {
        if error.kind() == ErrorKind::TimedOut {
            TransportError::Timeout(deadline)
        } else {
            TransportError::Io(error)
        }
    }
}

impl Transport for SerialTransport {
    fn write_line(&mut self, text: &str) -> Result<(), TransportError> {
        let deadline = self.config.write_timeout;
        let port = self.port_mut()?;

        // The serialport crate has one deadline shared by reads and writes,
        // so it is re-armed before each direction.
        port.set_timeout(deadline)?;
        port.write_all(text.as_bytes())
            .map_err(|e| Self::map_io(e, deadline))?;
        port.write_all(b"\n").map_err(|e| Self::map_io(e, deadline))?;
        port.flush().map_err(|e| Self::map_io(e, deadline))?;

        trace!(line = text, "wrote command line");
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, TransportError> {
        let deadline = self.config.read_timeout;
        let port = self.port_mut()?;

        port.set_timeout(deadline)?;
        let mut buf = [0u8; 1];
        port.read_exact(&mut buf)
            .map_err(|e| Self::map_io(e, deadline))?;

        trace!(byte = buf[0], "read reply byte");
        Ok(buf[0])
    }

    fn discard_input(&mut self) -> Result<(), TransportError> {
        let port = self.port_mut()?;
        port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            debug!(port = %self.port_name, "serial port closed");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Opening real hardware is exercised by hand; these tests cover the
    // paths that do not need a physical port.

    #[test]
    fn test_open_nonexistent_port_returns_open_error() {
        // Arrange / Act
        let result = SerialTransport::open("/dev/ttyNEXSTAR_TEST_NONE", SerialLinkConfig::default());

        // Assert
        match result {
            Err(TransportError::Open { port, .. }) => {
                assert_eq!(port, "/dev/ttyNEXSTAR_TEST_NONE");
            }
            Err(other) => panic!("expected Open error, got {other:?}"),
            Ok(_) => panic!("opening a nonexistent port must fail"),
        }
    }

    #[test]
    fn test_map_io_translates_timeout_kind() {
        // Arrange
        let timed_out = std::io::Error::new(ErrorKind::TimedOut, "deadline elapsed");
        let deadline = Duration::from_millis(3500);

        // Act / Assert
        assert!(matches!(
            SerialTransport::map_io(timed_out, deadline),
            TransportError::Timeout(d) if d == deadline
        ));
    }

    #[test]
    fn test_map_io_passes_through_other_kinds() {
        let broken = std::io::Error::new(ErrorKind::BrokenPipe, "gone");
        assert!(matches!(
            SerialTransport::map_io(broken, Duration::from_millis(1)),
            TransportError::Io(_)
        ));
    }
}
