//! Snapshot system: reads the pulse world and builds renderer views.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use radarsight_core::components::Pulse;
use radarsight_core::enums::PulsePhase;
use radarsight_core::state::PulseView;

/// Round-trip fraction at which a pulse turns into its echo.
const RETURN_LEG_START: f64 = 0.5;

/// Build the live pulse list, oldest (lowest id) first.
pub fn build_pulses(world: &World) -> Vec<PulseView> {
    let mut pulses: Vec<PulseView> = world
        .query::<&Pulse>()
        .iter()
        .map(|(_, pulse)| PulseView {
            id: pulse.id,
            progress: pulse.progress,
            range_traveled: pulse.range_traveled,
            phase: pulse_phase(pulse.progress),
        })
        .collect();

    // Sort for stable rendering order (ECS iteration order is not guaranteed).
    pulses.sort_by_key(|p| p.id);
    pulses
}

pub fn pulse_phase(progress: f64) -> PulsePhase {
    if progress < RETURN_LEG_START {
        PulsePhase::Outbound
    } else {
        PulsePhase::Return
    }
}
