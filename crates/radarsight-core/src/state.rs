//! Snapshots: the read-only state handed to rendering collaborators.

use serde::{Deserialize, Serialize};

use crate::config::{AircraftConfig, RadarConfig};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Detection verdict for one aircraft/radar configuration pair.
/// Recomputed on every change; carries no identity or history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarResult {
    pub distance_m: f64,
    /// Degrees, 0 along +z, increasing toward +x.
    pub bearing_deg: f64,
    pub effective_rcs_m2: f64,
    pub signal_strength_dbm: f64,
    /// Signal strength above receiver sensitivity (dB).
    pub snr_db: f64,
    /// In [0, 1].
    pub detection_probability: f64,
    pub is_detected: bool,
    /// Round-trip light time to the target (seconds).
    pub propagation_time_s: f64,
}

/// A live pulse as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseView {
    pub id: u64,
    pub progress: f64,
    pub range_traveled: f64,
    pub phase: PulsePhase,
}

/// Output of one simulation-clock tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub time: SimTime,
    /// Live pulses, oldest first.
    pub pulses: Vec<PulseView>,
    pub stealth_active: bool,
    pub events: Vec<SimEvent>,
}

/// Complete session state broadcast to the host after each engine tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub aircraft: AircraftConfig,
    pub radar_config: RadarConfig,
    pub radar: RadarResult,
    pub pulses: Vec<PulseView>,
    pub stealth: StealthState,
    /// Whether the current aircraft matches the canonical stealth
    /// configuration (drives the "manual edit breaks stealth" warning).
    pub optimal_stealth_config: bool,
    pub events: Vec<SimEvent>,
}
