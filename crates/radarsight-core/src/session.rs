//! The caller-owned session: current aircraft and radar configuration.
//!
//! A `Session` is passed by reference into the detection engine and the
//! simulation clock. Every setter validates before writing, so a session
//! only ever holds configuration the engine can compute with.

use serde::{Deserialize, Serialize};

use crate::config::{AircraftConfig, RadarConfig};
use crate::error::{ConfigurationError, SessionLoadError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    aircraft: AircraftConfig,
    radar: RadarConfig,
}

impl Session {
    pub fn new(aircraft: AircraftConfig, radar: RadarConfig) -> Result<Self, ConfigurationError> {
        aircraft.validate()?;
        radar.validate()?;
        Ok(Self { aircraft, radar })
    }

    /// Load and validate a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionLoadError> {
        let session: Session = serde_json::from_str(json)?;
        Ok(Self::new(session.aircraft, session.radar)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn aircraft(&self) -> &AircraftConfig {
        &self.aircraft
    }

    pub fn radar(&self) -> &RadarConfig {
        &self.radar
    }

    pub fn set_aircraft(&mut self, aircraft: AircraftConfig) -> Result<(), ConfigurationError> {
        aircraft.validate()?;
        self.aircraft = aircraft;
        Ok(())
    }

    pub fn set_radar(&mut self, radar: RadarConfig) -> Result<(), ConfigurationError> {
        radar.validate()?;
        self.radar = radar;
        Ok(())
    }

    /// Edit a copy of the aircraft configuration; commit only if it validates.
    pub fn update_aircraft(
        &mut self,
        edit: impl FnOnce(&mut AircraftConfig),
    ) -> Result<(), ConfigurationError> {
        let mut next = self.aircraft;
        edit(&mut next);
        self.set_aircraft(next)
    }

    /// Edit a copy of the radar configuration; commit only if it validates.
    pub fn update_radar(
        &mut self,
        edit: impl FnOnce(&mut RadarConfig),
    ) -> Result<(), ConfigurationError> {
        let mut next = self.radar;
        edit(&mut next);
        self.set_radar(next)
    }
}
