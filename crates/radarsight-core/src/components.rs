//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Pulse logic lives in the simulator's systems.

use serde::{Deserialize, Serialize};

/// One outbound radar emission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    /// Unique, monotonically assigned by the clock.
    pub id: u64,
    /// Fraction of the round trip elapsed, in [0, 1) while live.
    pub progress: f64,
    /// Scene distance travelled so far.
    pub range_traveled: f64,
}
