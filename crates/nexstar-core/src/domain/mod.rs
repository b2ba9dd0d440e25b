//! Domain entities for NexStar-RS.
//!
//! This module contains telescope-side types with no protocol or
//! infrastructure dependencies.  Code in the outer layers (the command
//! framing, the transport, the client facade) depends on the domain; the
//! domain never depends on them, which keeps these types trivially
//! unit-testable.

/// The closed table of known mount models.
pub mod model;

/// Azimuth/elevation coordinate pair.
pub mod coordinates;
