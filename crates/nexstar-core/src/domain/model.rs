//! The table of known mount model codes.
//!
//! The `m` query returns one byte identifying the mount family.  The table
//! below is the set of codes the hand-controller firmware documents; codes
//! outside it are reported by [`TelescopeModel::Unknown`] rather than
//! treated as a failure, because newer firmware adds codes faster than this
//! table is updated.

use std::fmt;

use tracing::debug;

/// Mount model reported by the hand controller.
///
/// A closed set of known variants plus an explicit unrecognized-code variant
/// carrying the raw byte, so out-of-range codes have defined behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelescopeModel {
    /// Code 1 — NexStar GPS Series.
    GpsSeries,
    /// Code 3 — NexStar i-Series.
    ISeries,
    /// Code 4 — NexStar i-Series SE.
    ISeriesSe,
    /// Code 5 — CGE.
    Cge,
    /// Code 6 — Advanced GT.
    AdvancedGt,
    /// Code 7 — SLT.
    Slt,
    /// Code 9 — CPC.
    Cpc,
    /// Code 10 — GT.
    Gt,
    /// Code 11 — NexStar SE 4/5.
    Se45,
    /// Code 12 — NexStar SE 6/8.
    Se68,
    /// Any code not in the table, carrying the raw reply byte.
    Unknown(u8),
}

impl TelescopeModel {
    /// Maps a raw model-code byte to its variant.
    ///
    /// Total function: unrecognized codes yield [`TelescopeModel::Unknown`],
    /// never an error.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::GpsSeries,
            3 => Self::ISeries,
            4 => Self::ISeriesSe,
            5 => Self::Cge,
            6 => Self::AdvancedGt,
            7 => Self::Slt,
            9 => Self::Cpc,
            10 => Self::Gt,
            11 => Self::Se45,
            12 => Self::Se68,
            other => {
                debug!("unrecognized mount model code {other}");
                Self::Unknown(other)
            }
        }
    }

    /// The raw byte this model is reported as on the wire.
    pub fn code(&self) -> u8 {
        match self {
            Self::GpsSeries => 1,
            Self::ISeries => 3,
            Self::ISeriesSe => 4,
            Self::Cge => 5,
            Self::AdvancedGt => 6,
            Self::Slt => 7,
            Self::Cpc => 9,
            Self::Gt => 10,
            Self::Se45 => 11,
            Self::Se68 => 12,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for TelescopeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpsSeries => write!(f, "NexStar GPS Series"),
            Self::ISeries => write!(f, "NexStar i-Series"),
            Self::ISeriesSe => write!(f, "NexStar i-Series SE"),
            Self::Cge => write!(f, "CGE"),
            Self::AdvancedGt => write!(f, "Advanced GT"),
            Self::Slt => write!(f, "SLT"),
            Self::Cpc => write!(f, "CPC"),
            Self::Gt => write!(f, "GT"),
            Self::Se45 => write!(f, "NexStar SE 4/5"),
            Self::Se68 => write!(f, "NexStar SE 6/8"),
            Self::Unknown(code) => write!(f, "unknown model (code {code})"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
