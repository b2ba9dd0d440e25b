//! Horizontal (azimuth/elevation) coordinates in decimal degrees.

use std::fmt;

/// A pointing target in the horizontal coordinate system.
///
/// Both angles are decimal degrees and are logically defined modulo 360°.
/// No range invariant is enforced here: the rotor codec wraps values outside
/// `[0, 360)` at encoding time, so `azimuth: -90.0` and `azimuth: 270.0`
/// command the same axis position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    /// Compass bearing in degrees, 0° = north, increasing eastward.
    pub azimuth: f64,
    /// Angle above the horizon in degrees.
    pub elevation: f64,
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "az {:.4}°, el {:.4}°", self.azimuth, self.elevation)
    }
}
