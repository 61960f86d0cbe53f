//! Radar detection engine.
//!
//! Turns aircraft and radar configuration into a `RadarResult` using the
//! monostatic radar equation with unity antenna gain:
//!
//! `P_r = P_t λ² σ / ((4π)³ R⁴)`
//!
//! Everything here is a pure function of its inputs. Identical inputs give
//! bit-identical results.

use std::f64::consts::PI;

use radarsight_core::config::{AircraftConfig, RadarConfig};
use radarsight_core::constants::*;
use radarsight_core::enums::GeometryClass;
use radarsight_core::error::{require_finite, require_in_range, ConfigurationError};
use radarsight_core::state::RadarResult;

/// Signature parameters for one geometry class.
pub struct GeometryProfile {
    /// Baseline signature multiplier.
    pub base_factor: f64,
    /// Off-axis gain of the aspect curve.
    pub angular_gain: f64,
    /// Power of `sin θ` in the aspect curve.
    pub sine_power: i32,
}

/// Get the signature profile for a geometry class.
pub fn geometry_profile(class: GeometryClass) -> GeometryProfile {
    match class {
        // Faceted shaping only works near nose/tail aspect: sharp sin⁴ peak.
        GeometryClass::Stealth => GeometryProfile {
            base_factor: STEALTH_GEOMETRY_FACTOR,
            angular_gain: STEALTH_ANGULAR_GAIN,
            sine_power: 4,
        },
        GeometryClass::Fighter => GeometryProfile {
            base_factor: FIGHTER_GEOMETRY_FACTOR,
            angular_gain: CONVENTIONAL_ANGULAR_GAIN,
            sine_power: 2,
        },
        GeometryClass::Conventional => GeometryProfile {
            base_factor: CONVENTIONAL_GEOMETRY_FACTOR,
            angular_gain: CONVENTIONAL_ANGULAR_GAIN,
            sine_power: 2,
        },
    }
}

pub fn geometry_factor(class: GeometryClass) -> f64 {
    geometry_profile(class).base_factor
}

/// Aspect-dependent RCS growth, `1 + gain * sin^n θ`.
/// Always >= 1 and periodic with period 180°.
pub fn angular_factor(class: GeometryClass, angle_deg: f64) -> f64 {
    let profile = geometry_profile(class);
    let sine = angle_deg.to_radians().sin();
    1.0 + profile.angular_gain * sine.powi(profile.sine_power)
}

/// Shape-only cross-section (m²), before absorption.
pub fn effective_cross_section(aircraft: &AircraftConfig) -> f64 {
    aircraft.base_cross_section
        * geometry_factor(aircraft.geometry)
        * angular_factor(aircraft.geometry, aircraft.angle_to_radar_deg)
}

pub fn wavelength_m(frequency_ghz: f64) -> f64 {
    SPEED_OF_LIGHT / (frequency_ghz * 1e9)
}

/// Received echo power (W) for a target of cross-section `rcs_m2` at `range_m`.
pub fn received_power_w(transmit_w: f64, wavelength_m: f64, rcs_m2: f64, range_m: f64) -> f64 {
    let four_pi_cubed = (4.0 * PI).powi(3);
    let range_sq = range_m * range_m;
    (transmit_w * wavelength_m * wavelength_m * rcs_m2) / (four_pi_cubed * range_sq * range_sq)
}

pub fn watts_to_dbm(watts: f64) -> f64 {
    10.0 * (watts * 1000.0).log10()
}

/// Probability of detection as a piecewise-linear function of SNR (dB).
///
/// Non-decreasing and continuous:
/// - `snr <= -10`: 0
/// - `-10 < snr <= 0`: `(snr + 10) / 20`, rising to 0.5
/// - `0 < snr <= 10`: `0.5 + snr / 20`, rising to 1.0
/// - `snr > 10`: 1
///
/// The upper ramp is not the plain `snr / 10`: that curve falls back to zero
/// just above 0 dB, so it is shifted to join the lower ramp at 0.5.
pub fn detection_probability(snr_db: f64) -> f64 {
    if snr_db > PD_SATURATION_SNR_DB {
        1.0
    } else if snr_db > 0.0 {
        0.5 + snr_db / (2.0 * PD_SATURATION_SNR_DB)
    } else if snr_db > PD_FLOOR_SNR_DB {
        ((snr_db - PD_FLOOR_SNR_DB) / (2.0 * -PD_FLOOR_SNR_DB)).max(0.0)
    } else {
        0.0
    }
}

/// Round-trip light time to a target at `distance_m` (seconds).
/// Display pacing only; detection never reads it.
pub fn propagation_time(distance_m: f64) -> f64 {
    2.0 * (distance_m / SPEED_OF_LIGHT)
}

pub fn validate_threshold(threshold: f64) -> Result<f64, ConfigurationError> {
    require_in_range("detection_threshold", threshold, 0.0, 1.0)
}

/// Evaluate detection with the default threshold.
pub fn evaluate(
    aircraft: &AircraftConfig,
    radar: &RadarConfig,
) -> Result<RadarResult, ConfigurationError> {
    evaluate_with_threshold(aircraft, radar, DEFAULT_DETECTION_THRESHOLD)
}

/// Evaluate detection. `is_detected` is `detection_probability > threshold`.
pub fn evaluate_with_threshold(
    aircraft: &AircraftConfig,
    radar: &RadarConfig,
    threshold: f64,
) -> Result<RadarResult, ConfigurationError> {
    aircraft.validate()?;
    radar.validate()?;
    validate_threshold(threshold)?;

    let distance_m = require_finite("distance_m", aircraft.position.magnitude())?;
    let bearing_deg = aircraft.position.bearing_deg();
    let propagation_time_s = propagation_time(distance_m);

    // Range gate comes first: nothing past here is evaluated at extreme range.
    if distance_m > radar.range_m() {
        return Ok(RadarResult {
            distance_m,
            bearing_deg,
            effective_rcs_m2: 0.0,
            signal_strength_dbm: SIGNAL_FLOOR_DBM,
            snr_db: SIGNAL_FLOOR_DBM - radar.sensitivity_dbm,
            detection_probability: 0.0,
            is_detected: false,
            propagation_time_s,
        });
    }
    if distance_m == 0.0 {
        return Err(ConfigurationError::TargetAtRadar);
    }

    let effective_rcs_m2 = require_finite(
        "effective_rcs_m2",
        effective_cross_section(aircraft) * (1.0 - aircraft.absorption_coefficient),
    )?;
    let wavelength = wavelength_m(radar.frequency_ghz);
    let transmit_w = radar.power_kw * 1000.0;
    // Inputs are finite but their products can still overflow.
    let received_w = require_finite(
        "received_power_w",
        received_power_w(transmit_w, wavelength, effective_rcs_m2, distance_m),
    )?;
    // Floor keeps an underflowed echo finite.
    let signal_strength_dbm = watts_to_dbm(received_w).max(SIGNAL_FLOOR_DBM);
    let snr_db = require_finite("snr_db", signal_strength_dbm - radar.sensitivity_dbm)?;
    let detection_probability = detection_probability(snr_db);

    Ok(RadarResult {
        distance_m,
        bearing_deg,
        effective_rcs_m2,
        signal_strength_dbm,
        snr_db,
        detection_probability,
        is_detected: detection_probability > threshold,
        propagation_time_s,
    })
}
