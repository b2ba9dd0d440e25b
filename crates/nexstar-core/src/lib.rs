//! # nexstar-core
//!
//! Shared library for NexStar-RS containing the hand-controller wire protocol
//! and the telescope domain types.
//!
//! This crate is used by the client application and its tests.  It has zero
//! dependencies on serial hardware, OS APIs, or any I/O — everything here is
//! a pure function of its inputs, which is what makes the protocol testable
//! without a telescope on the desk.
//!
//! # Architecture overview (for beginners)
//!
//! A NexStar hand controller speaks a terse ASCII protocol over a serial
//! line: the host sends a short command such as `L` or
//! `b80000000,20000000`, and the controller answers with at most one byte.
//! Positions on each axis are expressed in "rotor units": an unsigned 32-bit
//! counter where 2^32 units make one full 360° revolution.
//!
//! This crate (`nexstar-core`) defines:
//!
//! - **`protocol`** – How commands look on the wire.  The rotor codec
//!   converts decimal degrees to rotor units and to the fixed-width
//!   hexadecimal text the controller expects; the command module frames the
//!   supported operations and interprets their single-byte replies.
//!
//! - **`domain`** – Telescope-side types with no protocol knowledge: the
//!   closed table of known mount models and the azimuth/elevation coordinate
//!   pair.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/protocol/mod.rs).
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `nexstar_core::Command` instead of `nexstar_core::protocol::command::Command`.
pub use domain::coordinates::HorizontalCoordinates;
pub use domain::model::TelescopeModel;
pub use protocol::command::{Command, ReplyShape};
pub use protocol::rotor::{decode_hex, degrees_to_rotor, encode_hex, rotor_to_degrees};
pub use protocol::ProtocolError;
