//! Coalition identifiers.
//!
//! The telemetry link tags every client with a numeric coalition. Exactly
//! two values are reserved for the opposing teams; every other value —
//! zero, or anything above the reserved pair — is a spectator slot. The
//! reserved values are a wire contract with the telemetry server and must
//! never change.

use serde::{Deserialize, Serialize};

/// A coalition identifier as carried on the telemetry wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coalition(
    /// The raw wire value.
    pub u32,
);

impl Coalition {
    /// The red team's reserved wire value.
    pub const RED: Coalition = Coalition(1);
    /// The blue team's reserved wire value.
    pub const BLUE: Coalition = Coalition(2);

    /// True when this value belongs to neither team.
    pub fn is_spectator(self) -> bool {
        self != Self::RED && self != Self::BLUE
    }
}

impl From<u32> for Coalition {
    fn from(value: u32) -> Self {
        Coalition(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teams_are_not_spectators() {
        assert!(!Coalition::RED.is_spectator());
        assert!(!Coalition::BLUE.is_spectator());
    }

    #[test]
    fn everything_else_is_a_spectator() {
        assert!(Coalition(0).is_spectator());
        for value in 3..1024 {
            assert!(Coalition(value).is_spectator());
        }
        assert!(Coalition(u32::MAX).is_spectator());
    }
}
