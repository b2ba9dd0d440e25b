//! Protocol module containing the rotor codec and command framing.

pub mod command;
pub mod rotor;

pub use command::{Command, ReplyShape};
pub use rotor::{decode_hex, degrees_to_rotor, encode_hex, rotor_to_degrees};

use thiserror::Error;

/// Errors that can occur while decoding protocol text.
///
/// The outbound direction (degrees → rotor units → hex) is total and never
/// fails; only the inverse direction can reject its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// A rotor-position field must be exactly 8 hexadecimal characters.
    #[error("rotor hex field must be 8 characters, got {0}")]
    BadHexLength(usize),

    /// A rotor-position field contained a non-hexadecimal character.
    #[error("invalid hexadecimal digit in rotor field: {0:?}")]
    BadHexDigit(String),
}
