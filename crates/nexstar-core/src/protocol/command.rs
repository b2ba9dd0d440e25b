//! Command framing for the hand-controller wire protocol.
//!
//! Every supported operation is a short ASCII line followed by at most one
//! reply byte.  A [`Command`] is transient: it is built, written, and
//! forgotten within a single exchange — there is no sequence numbering and
//! no correlation between commands, which is why callers must fully
//! serialize exchanges on one connection.
//!
//! | Command         | Wire form                          | Reply  |
//! |-----------------|------------------------------------|--------|
//! | Goto            | `b<az:8-hex>,<el:8-hex>`           | none   |
//! | Cancel goto     | `M`                                | none   |
//! | Query moving    | `L`                                | 1 byte |
//! | Query model     | `m` (must stay lowercase)          | 1 byte |
//! | Query alignment | `J`                                | 1 byte |
//!
//! The line terminator (`\n`) is appended by the transport's `write_line`,
//! not stored in the command.

use crate::domain::coordinates::HorizontalCoordinates;
use crate::protocol::rotor::{degrees_to_rotor, encode_hex};

/// Shape of the reply a command expects from the controller.
///
/// `SingleByte` carries an opaque value (a model code); `SingleByteBoolean`
/// is a yes/no answer whose encoding depends on the command — see the
/// interpretation helpers on [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    /// The controller sends nothing back.
    None,
    /// One reply byte carrying a value.
    SingleByte,
    /// One reply byte carrying a truth value.
    SingleByteBoolean,
}

/// A single framed hand-controller command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Single-character opcode.  Case matters on the wire: the model query
    /// is `m` and sending `M` would cancel a goto instead.
    opcode: char,
    /// Optional ASCII payload appended directly after the opcode.
    payload: Option<String>,
    /// What the controller will send back.
    reply: ReplyShape,
}

impl Command {
    /// Slew to the given azimuth/elevation.
    ///
    /// Both coordinates are encoded as 8-character uppercase rotor-unit hex
    /// fields, comma-separated: `b80000000,20000000` for (180°, 45°).
    /// No acknowledgement is sent — success means the line was written, not
    /// that the mount accepted it.
    pub fn goto_azm_elev(target: HorizontalCoordinates) -> Self {
        let az_hex = encode_hex(degrees_to_rotor(target.azimuth));
        let el_hex = encode_hex(degrees_to_rotor(target.elevation));
        Self {
            opcode: 'b',
            payload: Some(format!("{az_hex},{el_hex}")),
            reply: ReplyShape::None,
        }
    }

    /// Immediately cancel the goto in progress.  No reply.
    pub fn cancel_goto() -> Self {
        Self {
            opcode: 'M',
            payload: None,
            reply: ReplyShape::None,
        }
    }

    /// Ask whether a goto is currently moving the mount.
    pub fn query_moving() -> Self {
        Self {
            opcode: 'L',
            payload: None,
            reply: ReplyShape::SingleByteBoolean,
        }
    }

    /// Ask for the numeric mount model code.
    pub fn query_model() -> Self {
        Self {
            opcode: 'm',
            payload: None,
            reply: ReplyShape::SingleByte,
        }
    }

    /// Ask whether the mount has completed alignment.
    pub fn query_alignment() -> Self {
        Self {
            opcode: 'J',
            payload: None,
            reply: ReplyShape::SingleByteBoolean,
        }
    }

    /// The unterminated command line as it goes on the wire.
    pub fn wire_text(&self) -> String {
        match &self.payload {
            Some(payload) => format!("{}{payload}", self.opcode),
            None => self.opcode.to_string(),
        }
    }

    /// The reply shape this command expects.
    pub fn reply_shape(&self) -> ReplyShape {
        self.reply
    }

    /// Interprets the motion-query reply byte.
    ///
    /// The controller answers the `L` query with an ASCII digit: byte 49
    /// (`'1'`) means a goto is in progress, and any other byte — including
    /// 48 (`'0'`) — means the mount is idle.
    pub fn interpret_moving_reply(byte: u8) -> bool {
        byte == b'1'
    }

    /// Interprets the alignment-query reply byte.
    ///
    /// Unlike the motion query, the `J` reply is a raw numeric byte: value 1
    /// means aligned.  The observed firmware really does mix ASCII and raw
    /// encodings between these two queries, so the comparisons are kept
    /// separate rather than unified.
    pub fn interpret_aligned_reply(byte: u8) -> bool {
        byte == 1
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Wire framing ──────────────────────────────────────────────────────────

    #[test]
    fn test_goto_wire_text_encodes_both_axes() {
        // Arrange: 180° az is 2^31 units, 45° el is 2^29 units.
        let target = HorizontalCoordinates {
            azimuth: 180.0,
            elevation: 45.0,
        };

        // Act
        let cmd = Command::goto_azm_elev(target);

        // Assert
        assert_eq!(cmd.wire_text(), "b80000000,20000000");
        assert_eq!(cmd.reply_shape(), ReplyShape::None);
    }

    #[test]
    fn test_goto_wire_text_wraps_at_full_revolution() {
        let cmd = Command::goto_azm_elev(HorizontalCoordinates {
            azimuth: 360.0,
            elevation: 0.0,
        });
        assert_eq!(cmd.wire_text(), "b00000000,00000000");
    }

    #[test]
    fn test_cancel_goto_is_uppercase_m() {
        let cmd = Command::cancel_goto();
        assert_eq!(cmd.wire_text(), "M");
        assert_eq!(cmd.reply_shape(), ReplyShape::None);
    }

    #[test]
    fn test_query_moving_is_uppercase_l() {
        let cmd = Command::query_moving();
        assert_eq!(cmd.wire_text(), "L");
        assert_eq!(cmd.reply_shape(), ReplyShape::SingleByteBoolean);
    }

    #[test]
    fn test_query_model_stays_lowercase_on_the_wire() {
        // Case-sensitivity guard: `m` queries the model, `M` cancels a goto.
        let cmd = Command::query_model();
        assert_eq!(cmd.wire_text(), "m");
        assert_eq!(cmd.reply_shape(), ReplyShape::SingleByte);
    }

    #[test]
    fn test_query_alignment_is_uppercase_j() {
        let cmd = Command::query_alignment();
        assert_eq!(cmd.wire_text(), "J");
        assert_eq!(cmd.reply_shape(), ReplyShape::SingleByteBoolean);
    }

    // ── Reply interpretation ──────────────────────────────────────────────────

    #[test]
    fn test_moving_reply_true_only_for_ascii_one() {
        assert!(Command::interpret_moving_reply(49));
        assert!(!Command::interpret_moving_reply(48), "ASCII '0' is idle");
        // Every other byte value is "not moving", including raw numeric 1.
        for byte in (0..=u8::MAX).filter(|&b| b != 49) {
            assert!(!Command::interpret_moving_reply(byte));
        }
    }

    #[test]
    fn test_aligned_reply_true_only_for_numeric_one() {
        assert!(Command::interpret_aligned_reply(1));
        // ASCII '1' (49) is NOT aligned — the alignment query uses the raw
        // numeric encoding, not the ASCII digit the motion query uses.
        assert!(!Command::interpret_aligned_reply(b'1'));
        assert!(!Command::interpret_aligned_reply(0));
    }
}
