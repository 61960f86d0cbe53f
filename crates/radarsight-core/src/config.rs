//! Aircraft and radar configuration.
//!
//! Both are plain value objects. The engine never clamps them; hosts keep
//! values inside their slider limits and `validate()` rejects anything the
//! radar equation cannot compute with.

use serde::{Deserialize, Serialize};

use crate::constants::{STEALTH_MAX_ABSORPTION, STEALTH_MIN_CROSS_SECTION};
use crate::enums::GeometryClass;
use crate::error::{
    require_finite, require_in_range, require_positive, ConfigurationError,
};
use crate::types::Position;

/// Aircraft signature and placement relative to the radar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Material/shape baseline RCS (m²).
    pub base_cross_section: f64,
    /// Fraction of incident energy absorbed, in [0, 1).
    pub absorption_coefficient: f64,
    pub geometry: GeometryClass,
    /// Aspect angle to the radar (degrees, [0, 360)). 0 = nose-on.
    pub angle_to_radar_deg: f64,
    /// Meters, radar at origin.
    pub position: Position,
}

/// Monostatic radar parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    pub frequency_ghz: f64,
    pub power_kw: f64,
    pub range_km: f64,
    /// Minimum detectable signal (dBm), typically negative.
    pub sensitivity_dbm: f64,
}

impl AircraftConfig {
    /// The canonical low-observability configuration at `position`:
    /// minimal cross-section, maximal absorption, stealth shaping, nose-on.
    pub fn optimal_stealth(position: Position) -> Self {
        Self {
            base_cross_section: STEALTH_MIN_CROSS_SECTION,
            absorption_coefficient: STEALTH_MAX_ABSORPTION,
            geometry: GeometryClass::Stealth,
            angle_to_radar_deg: 0.0,
            position,
        }
    }

    /// Exact field-wise match against the canonical stealth configuration.
    /// Position is not part of the comparison.
    pub fn is_optimal_stealth(&self) -> bool {
        let canonical = Self::optimal_stealth(self.position);
        self.base_cross_section == canonical.base_cross_section
            && self.absorption_coefficient == canonical.absorption_coefficient
            && self.geometry == canonical.geometry
            && self.angle_to_radar_deg == canonical.angle_to_radar_deg
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("base_cross_section", self.base_cross_section)?;
        require_in_range("absorption_coefficient", self.absorption_coefficient, 0.0, 1.0)?;
        require_in_range("angle_to_radar_deg", self.angle_to_radar_deg, 0.0, 360.0)?;
        require_finite("position.x", self.position.x)?;
        require_finite("position.y", self.position.y)?;
        require_finite("position.z", self.position.z)?;
        Ok(())
    }
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            base_cross_section: 5.0,
            absorption_coefficient: 0.0,
            geometry: GeometryClass::Fighter,
            angle_to_radar_deg: 0.0,
            position: Position::new(50.0, 8.0, 50.0),
        }
    }
}

impl RadarConfig {
    /// Instrumented range in meters.
    pub fn range_m(&self) -> f64 {
        self.range_km * 1000.0
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("frequency_ghz", self.frequency_ghz)?;
        require_positive("power_kw", self.power_kw)?;
        require_positive("range_km", self.range_km)?;
        require_finite("sensitivity_dbm", self.sensitivity_dbm)?;
        Ok(())
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            frequency_ghz: 10.0,
            power_kw: 500.0,
            range_km: 100.0,
            sensitivity_dbm: -90.0,
        }
    }
}

/// Whether `aircraft` matches the canonical stealth configuration. Hosts use
/// this to warn that a manual edit will break stealth mode.
pub fn is_optimal_stealth_config(aircraft: &AircraftConfig) -> bool {
    aircraft.is_optimal_stealth()
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_angle_deg(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
