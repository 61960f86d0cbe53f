//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Airframe shaping class. Selects the baseline signature factor and the
/// aspect-angle curve used by the detection engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryClass {
    /// Faceted low-observable shaping. Very low baseline, sharp off-axis growth.
    Stealth,
    /// Fighter-class airframe.
    #[default]
    Fighter,
    /// Transport or airliner. High baseline signature.
    Conventional,
}

/// Stealth mode over the aircraft-configuration/flag pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StealthState {
    #[default]
    Normal,
    Stealth,
}

/// Leg of a pulse's round trip, derived from its progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PulsePhase {
    /// Travelling from the radar toward the target.
    #[default]
    Outbound,
    /// Echo travelling back to the radar.
    Return,
}

/// Top-level run state of a simulation session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

/// Why a pulse left the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetireReason {
    /// Completed its round trip.
    RoundTripComplete,
    /// Travelled past the display radius.
    BeyondDisplay,
}

/// Named aircraft configurations a host can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftPreset {
    /// The canonical stealth configuration.
    OptimalStealth,
    /// Stealth airframe with partial coatings.
    StealthFighter,
    /// Fourth-generation fighter.
    Fighter,
    /// Wide-body airliner.
    Airliner,
}

/// Named radar configurations a host can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarPreset {
    /// Long-range, low-frequency surveillance radar.
    SearchRadar,
    /// X-band fire-control radar.
    FireControl,
}
