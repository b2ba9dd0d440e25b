//! nexstar-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does nexstar-client do? (for beginners)
//!
//! A NexStar hand controller hangs off an RS-232 port and accepts short
//! ASCII commands, answering each with at most one byte.  This crate is the
//! host side of that conversation:
//!
//! 1. The **transport** layer owns the physical serial port (9600 baud, 8N1,
//!    3.5 s timeouts each way) behind a narrow trait, so the protocol logic
//!    can be driven against a scripted in-memory double instead of real
//!    hardware.
//! 2. The **application** layer runs one command/reply exchange at a time:
//!    write the framed line, read the expected reply, then flush any
//!    residual bytes so the next exchange starts aligned.
//! 3. The [`client::TelescopeClient`] facade composes the two into the five
//!    operations a host program actually calls: goto, cancel, and the
//!    motion/model/alignment queries.
//!
//! Everything is synchronous and blocking; the caller serializes all calls
//! on one connection.

/// Application layer: the command/reply exchange engine.
pub mod application;

/// The public facade composing transport and exchange.
pub mod client;

/// Infrastructure layer: serial transport, mock transport, and config storage.
pub mod infrastructure;

pub use application::command_exchange::ClientError;
pub use client::TelescopeClient;
pub use infrastructure::transport::{SerialLinkConfig, Transport, TransportError};
