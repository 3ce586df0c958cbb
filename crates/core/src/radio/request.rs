//! Typed request values.
//!
//! The parser's output is a closed tagged union with one variant per
//! recognized trigger. Callers dispatch on the variant directly; there is
//! no runtime type inspection anywhere. Every variant carries the decoded
//! pilot callsign the response should be addressed to.

use serde::{Deserialize, Serialize};

/// A parsed radio request, tagged by request kind.
///
/// Bearings are degrees true in `[0, 360)`. Ranges and distances are
/// nautical miles; altitudes are feet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Request {
    /// ALPHA CHECK — the pilot asks for a position readback.
    AlphaCheck {
        /// Decoded pilot callsign.
        callsign: String,
    },
    /// BOGEY DOPE — the pilot asks for the nearest threat.
    BogeyDope {
        /// Decoded pilot callsign.
        callsign: String,
        /// Restrict the answer to one contact category, when given.
        filter: Option<ContactFilter>,
    },
    /// DECLARE — the pilot asks for identification of a bullseye position.
    Declare {
        /// Decoded pilot callsign.
        callsign: String,
        /// Queried position relative to bullseye.
        bullseye: Bullseye,
        /// Queried altitude in feet.
        altitude_ft: u32,
    },
    /// PICTURE — the pilot asks for a tactical overview.
    Picture {
        /// Decoded pilot callsign.
        callsign: String,
        /// Radius of interest in nautical miles, when given.
        radius_nm: Option<u32>,
    },
    /// RADIO CHECK — the pilot checks the link.
    RadioCheck {
        /// Decoded pilot callsign.
        callsign: String,
    },
    /// SPIKED — the pilot reports an RWR spike and asks what is there.
    Spiked {
        /// Decoded pilot callsign.
        callsign: String,
        /// Spike bearing, degrees true in `[0, 360)`.
        bearing: u16,
    },
    /// SNAPLOCK — the pilot asks for identification of a BRAA position.
    Snaplock {
        /// Decoded pilot callsign.
        callsign: String,
        /// Queried position as bearing, range, altitude.
        braa: Braa,
    },
}

impl Request {
    /// The decoded pilot callsign this request came from.
    pub fn callsign(&self) -> &str {
        match self {
            Self::AlphaCheck { callsign }
            | Self::BogeyDope { callsign, .. }
            | Self::Declare { callsign, .. }
            | Self::Picture { callsign, .. }
            | Self::RadioCheck { callsign }
            | Self::Spiked { callsign, .. }
            | Self::Snaplock { callsign, .. } => callsign,
        }
    }
}

/// A position relative to the briefed bullseye point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bullseye {
    /// Bearing from bullseye, degrees true in `[0, 360)`.
    pub bearing: u16,
    /// Distance from bullseye in nautical miles.
    pub distance_nm: u32,
}

/// A bearing/range/altitude position group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Braa {
    /// Bearing from the requesting aircraft, degrees true in `[0, 360)`.
    pub bearing: u16,
    /// Range in nautical miles.
    pub range_nm: u32,
    /// Altitude in feet.
    pub altitude_ft: u32,
}

/// Contact category filter for BOGEY DOPE.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactFilter {
    /// Fixed-wing contacts only.
    Airplanes,
    /// Rotary-wing contacts only.
    Helicopters,
}
