//! Preset aircraft and radar configurations.
//!
//! Presets set signature and radar parameters only. Aircraft presets keep
//! whatever position the caller supplies.

use radarsight_core::config::{AircraftConfig, RadarConfig};
use radarsight_core::enums::{AircraftPreset, GeometryClass, RadarPreset};
use radarsight_core::types::Position;

/// Build an aircraft preset placed at `position`.
pub fn aircraft_preset(preset: AircraftPreset, position: Position) -> AircraftConfig {
    match preset {
        AircraftPreset::OptimalStealth => AircraftConfig::optimal_stealth(position),
        // Coated airframe, stealth shaping, slightly off the canonical values.
        AircraftPreset::StealthFighter => AircraftConfig {
            base_cross_section: 0.01,
            absorption_coefficient: 0.8,
            geometry: GeometryClass::Stealth,
            angle_to_radar_deg: 0.0,
            position,
        },
        AircraftPreset::Fighter => AircraftConfig {
            base_cross_section: 1.0,
            absorption_coefficient: 0.1,
            geometry: GeometryClass::Fighter,
            angle_to_radar_deg: 0.0,
            position,
        },
        AircraftPreset::Airliner => AircraftConfig {
            base_cross_section: 4.0,
            absorption_coefficient: 0.0,
            geometry: GeometryClass::Conventional,
            angle_to_radar_deg: 0.0,
            position,
        },
    }
}

pub fn radar_preset(preset: RadarPreset) -> RadarConfig {
    match preset {
        // S-band surveillance
        RadarPreset::SearchRadar => RadarConfig {
            frequency_ghz: 3.0,
            power_kw: 1000.0,
            range_km: 300.0,
            sensitivity_dbm: -100.0,
        },
        // X-band tracking
        RadarPreset::FireControl => RadarConfig {
            frequency_ghz: 10.0,
            power_kw: 500.0,
            range_km: 100.0,
            sensitivity_dbm: -90.0,
        },
    }
}
