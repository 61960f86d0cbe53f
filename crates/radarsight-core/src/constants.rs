//! Physical constants, detection policy, and pulse-simulation tuning.

// --- Physics ---

/// Propagation speed used by the radar equation (m/s).
/// Rounded on purpose; results are reproducible against this value.
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Signal strength reported for a target outside the radar's range gate (dBm).
pub const SIGNAL_FLOOR_DBM: f64 = -200.0;

// --- Geometry classes ---

/// Baseline signature multiplier for faceted stealth airframes.
pub const STEALTH_GEOMETRY_FACTOR: f64 = 0.001;

/// Baseline signature multiplier for fighter-class airframes.
pub const FIGHTER_GEOMETRY_FACTOR: f64 = 5.0;

/// Baseline signature multiplier for conventional (transport, airliner) airframes.
pub const CONVENTIONAL_GEOMETRY_FACTOR: f64 = 25.0;

/// Off-axis gain of the stealth aspect curve (`1 + gain * sin^4`).
pub const STEALTH_ANGULAR_GAIN: f64 = 50.0;

/// Off-axis gain of the fighter/conventional aspect curve (`1 + gain * sin^2`).
pub const CONVENTIONAL_ANGULAR_GAIN: f64 = 2.0;

// --- Detection probability ---

/// SNR above which detection is certain (dB).
pub const PD_SATURATION_SNR_DB: f64 = 10.0;

/// SNR at or below which detection is impossible (dB).
pub const PD_FLOOR_SNR_DB: f64 = -10.0;

/// Default probability a target must exceed to be reported as detected.
pub const DEFAULT_DETECTION_THRESHOLD: f64 = 0.5;

// --- Stealth configuration ---

/// Smallest base cross-section a host may configure (m²).
pub const STEALTH_MIN_CROSS_SECTION: f64 = 0.001;

/// Largest absorption coefficient a host may configure.
pub const STEALTH_MAX_ABSORPTION: f64 = 0.95;

// --- Pulse simulation ---

/// Time between pulse emissions (simulation time units).
pub const PULSE_SPAWN_PERIOD: f64 = 1.0;

/// Time between pulse advance steps (simulation time units).
pub const PULSE_ADVANCE_PERIOD: f64 = 0.05;

/// Round-trip fraction added to each live pulse per advance step.
pub const PULSE_PROGRESS_STEP: f64 = 0.02;

/// Scene distance added to each live pulse per advance step.
pub const PULSE_RANGE_STEP: f64 = 1.5;

/// Pulses beyond this scene radius are retired.
pub const MAX_DISPLAY_RADIUS: f64 = 80.0;

/// Tolerance for timer and progress comparisons against accumulated floats.
pub const TIMER_EPSILON: f64 = 1e-9;

// --- Host driver ---

/// Maximum fixed steps a driver runs for one host frame before resetting.
pub const DRIVER_MAX_STEPS_PER_FRAME: u32 = 8;
