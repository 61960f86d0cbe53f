//! Cleanup system: retires pulses that finished their round trip or left
//! the display. This is the only place pulses are destroyed.

use hecs::{Entity, World};
use tracing::debug;

use radarsight_core::components::Pulse;
use radarsight_core::constants::TIMER_EPSILON;
use radarsight_core::enums::RetireReason;
use radarsight_core::events::SimEvent;

/// Why `pulse` should leave the live set, if it should.
pub fn retire_reason(pulse: &Pulse, max_display_radius: f64) -> Option<RetireReason> {
    if pulse.progress + TIMER_EPSILON >= 1.0 {
        Some(RetireReason::RoundTripComplete)
    } else if pulse.range_traveled > max_display_radius {
        Some(RetireReason::BeyondDisplay)
    } else {
        None
    }
}

/// Remove expired pulses.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    max_display_radius: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    for (entity, pulse) in world.query_mut::<&Pulse>() {
        if let Some(reason) = retire_reason(pulse, max_display_radius) {
            debug!(pulse_id = pulse.id, ?reason, "pulse retired");
            events.push(SimEvent::PulseRetired {
                id: pulse.id,
                reason,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
