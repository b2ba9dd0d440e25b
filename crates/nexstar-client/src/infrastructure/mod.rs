//! Infrastructure layer: hardware adapters and persistence.
//!
//! Everything that touches the OS lives here — the serial port behind the
//! [`transport::Transport`] trait and the TOML config file in `storage`.
//! The application layer and the facade depend only on the trait, never on
//! `serialport` directly.

pub mod storage;
pub mod transport;
