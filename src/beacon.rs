//! Beacon Identifiers
//!
//! The fixed set of proximity transmitters the app can observe, and their
//! names on the wire.

/// A proximity beacon observed near the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beacon {
    Bc1,
    Bc2,
    Bc3,
    /// Detected hardware with no assigned name.
    Unmapped,
}

impl Beacon {
    /// Name used in outgoing reports. Unmapped beacons have none and are
    /// dropped from the sequence.
    pub fn wire_name(&self) -> Option<&'static str> {
        match self {
            Beacon::Bc1 => Some("bc1"),
            Beacon::Bc2 => Some("bc2"),
            Beacon::Bc3 => Some("bc3"),
            Beacon::Unmapped => None,
        }
    }
}

/// Map a beacon sequence to wire names, preserving order and duplicates.
pub fn wire_names(beacons: &[Beacon]) -> Vec<&'static str> {
    beacons.iter().filter_map(Beacon::wire_name).collect()
}
