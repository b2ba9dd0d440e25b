//! Fixed-point rotor position codec.
//!
//! # What is a rotor unit? (for beginners)
//!
//! The hand controller does not speak degrees.  Each axis position is an
//! unsigned 32-bit counter where one full revolution spans the entire range:
//! 2^32 units = 360°.  So 90° is 2^30 units, 180° is 2^31 units, and 360°
//! wraps back around to 0 — exactly like the telescope axis itself, which
//! ends up in the same place after a full turn.
//!
//! On the wire a rotor position is written as exactly eight uppercase
//! hexadecimal characters, zero-padded: 2^31 units is `80000000`.
//!
//! # Truncation semantics
//!
//! Conversion truncates toward zero through a signed 64-bit intermediate and
//! then takes the low 32 bits.  This is what gives the wraparound its
//! two's-complement flavour: 360.0° maps to 0 units and −90.0° maps to
//! `C0000000` (the same position as 270°).  Do not "round to nearest" here —
//! the controller firmware truncates, and matching it keeps a host-side
//! position readback bit-identical with what was commanded.

/// Number of rotor units in one full 360° revolution (2^32).
pub const ROTOR_UNITS_PER_REVOLUTION: u64 = 1 << 32;

/// Converts decimal degrees to a 32-bit rotor position.
///
/// Values outside `[0, 360)` wrap: integer truncation of the signed 64-bit
/// intermediate reduces the result modulo 2^32.
///
/// # Examples
///
/// ```rust
/// use nexstar_core::protocol::rotor::degrees_to_rotor;
///
/// assert_eq!(degrees_to_rotor(180.0), 0x8000_0000);
/// assert_eq!(degrees_to_rotor(360.0), 0);
/// ```
pub fn degrees_to_rotor(degrees: f64) -> u32 {
    let fraction = degrees / 360.0;
    // Truncate toward zero as i64, then keep the low 32 bits.  The i64 step
    // is load-bearing: it is what makes negative degrees wrap instead of
    // saturating at zero.
    (fraction * ROTOR_UNITS_PER_REVOLUTION as f64) as i64 as u32
}

/// Converts a 32-bit rotor position back to decimal degrees in `[0, 360)`.
///
/// No current wire command needs this direction; it is the algebraic inverse
/// of [`degrees_to_rotor`] and exists so the codec can be verified both ways.
pub fn rotor_to_degrees(units: u32) -> f64 {
    units as f64 / ROTOR_UNITS_PER_REVOLUTION as f64 * 360.0
}

/// Formats a rotor position as the 8-character uppercase hex field the wire
/// format requires.
///
/// Always exactly 8 characters, left-zero-padded: `2147483648` → `"80000000"`.
pub fn encode_hex(units: u32) -> String {
    format!("{units:08X}")
}

/// Parses an 8-character hex field back into a rotor position.
///
/// # Errors
///
/// Returns [`ProtocolError::BadHexLength`] if `text` is not exactly 8
/// characters, or [`ProtocolError::BadHexDigit`] if any character is not a
/// hexadecimal digit.
pub fn decode_hex(text: &str) -> Result<u32, super::ProtocolError> {
    if text.len() != 8 {
        return Err(super::ProtocolError::BadHexLength(text.len()));
    }
    u32::from_str_radix(text, 16)
        .map_err(|_| super::ProtocolError::BadHexDigit(text.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
