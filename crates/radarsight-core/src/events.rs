//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::RetireReason;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new pulse left the radar.
    PulseEmitted { id: u64 },
    /// A pulse left the live set.
    PulseRetired { id: u64, reason: RetireReason },
    /// Pulses `first_id..first_id + count` were emitted and retired inside a
    /// single long tick. Reported in bulk instead of one event pair each.
    PulsesSkipped { first_id: u64, count: u64 },
    /// Stealth mode entered explicitly.
    StealthEngaged,
    /// Stealth mode left explicitly.
    StealthDisengaged,
    /// Stealth mode dropped because the configuration drifted.
    StealthBroken,
    /// Detection verdict flipped after a configuration change.
    DetectionChanged { detected: bool },
}
