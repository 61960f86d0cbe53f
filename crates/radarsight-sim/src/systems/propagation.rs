//! Pulse propagation system.
//!
//! Advances every live pulse by one fixed step:
//! progress += progress_step, range_traveled += range_step.

use hecs::World;

use radarsight_core::components::Pulse;

pub fn run(world: &mut World, progress_step: f64, range_step: f64) {
    for (_entity, pulse) in world.query_mut::<&mut Pulse>() {
        pulse.progress += progress_step;
        pulse.range_traveled += range_step;
    }
}
