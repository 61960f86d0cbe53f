//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in scene space (meters, Cartesian), radar at the origin.
/// Bearing 0° lies along +z and increases toward +x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of clock ticks processed.
    pub tick: u64,
    /// Elapsed simulation time (time units, seconds by convention).
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the radar at the origin. Finite for any
    /// finite coordinates short of `f64::MAX` on every axis.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Bearing from the origin in degrees, `atan2(x, z)`, in (-180, 180].
    pub fn bearing_deg(&self) -> f64 {
        self.x.atan2(self.z).to_degrees()
    }
}

impl SimTime {
    /// Record one tick covering `delta_secs` of simulation time.
    pub fn advance(&mut self, delta_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += delta_secs;
    }
}
