//! Pulse spawning system. Emits one new pulse per spawn event.

use hecs::World;
use tracing::debug;

use radarsight_core::components::Pulse;
use radarsight_core::events::SimEvent;

/// Spawn a fresh pulse at the radar and assign it the next id.
pub fn run(world: &mut World, next_pulse_id: &mut u64, events: &mut Vec<SimEvent>) {
    let id = *next_pulse_id;
    *next_pulse_id += 1;

    world.spawn((Pulse {
        id,
        progress: 0.0,
        range_traveled: 0.0,
    },));

    debug!(pulse_id = id, "pulse emitted");
    events.push(SimEvent::PulseEmitted { id });
}
