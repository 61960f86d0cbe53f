//! Stealth-invariant enforcement.
//!
//! While the stealth flag is set, the aircraft configuration must equal the
//! canonical stealth configuration. Any drift clears the flag; it is a
//! self-correction, never an error.

use tracing::info;

use radarsight_core::config::AircraftConfig;
use radarsight_core::events::SimEvent;

/// Clear `stealth_active` if `aircraft` no longer matches the canonical
/// configuration. Returns true when the flag was cleared.
pub fn enforce(
    stealth_active: &mut bool,
    aircraft: &AircraftConfig,
    events: &mut Vec<SimEvent>,
) -> bool {
    if !*stealth_active || aircraft.is_optimal_stealth() {
        return false;
    }

    *stealth_active = false;
    info!(
        base_cross_section = aircraft.base_cross_section,
        absorption = aircraft.absorption_coefficient,
        geometry = ?aircraft.geometry,
        angle_deg = aircraft.angle_to_radar_deg,
        "configuration drifted from optimal stealth; stealth mode disengaged"
    );
    events.push(SimEvent::StealthBroken);
    true
}
