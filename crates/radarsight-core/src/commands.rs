//! Session commands sent from the host UI to the simulation.
//!
//! Commands are either applied immediately or queued for processing at the
//! next tick boundary. Either way they are validated before any state changes.

use serde::{Deserialize, Serialize};

use crate::config::{AircraftConfig, RadarConfig};
use crate::enums::*;
use crate::types::Position;

/// All possible parameter edits and mode changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // --- Aircraft ---
    SetBaseCrossSection { value: f64 },
    SetAbsorption { value: f64 },
    SetGeometry { geometry: GeometryClass },
    /// Wrapped into [0, 360) before validation.
    SetAngle { degrees: f64 },
    SetPosition { position: Position },
    /// Replace the whole aircraft configuration.
    SetAircraft { aircraft: AircraftConfig },
    /// Load a named aircraft, keeping the current position.
    LoadAircraftPreset { preset: AircraftPreset },

    // --- Radar ---
    SetFrequency { ghz: f64 },
    SetPower { kw: f64 },
    SetRange { km: f64 },
    SetSensitivity { dbm: f64 },
    /// Replace the whole radar configuration.
    SetRadar { radar: RadarConfig },
    LoadRadarPreset { preset: RadarPreset },

    // --- Stealth mode ---
    /// Snap the aircraft to the canonical stealth configuration.
    EnterStealth,
    /// Leave stealth mode without touching the configuration.
    ExitStealth,

    // --- Simulation control ---
    Pause,
    Resume,
}
