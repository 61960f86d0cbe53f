//! Detection engine and pulse simulator for RADARSIGHT.
//!
//! `detection` is a pure function library. `SimulationClock` owns the hecs
//! world of live pulses and the stealth flag; `SimulationEngine` wraps a
//! caller's session, clock, and latest detection verdict behind a command
//! interface. Nothing here owns a timer: hosts call `tick(delta_time)`.

pub mod clock;
pub mod detection;
pub mod driver;
pub mod engine;
pub mod presets;
pub mod systems;

pub use radarsight_core as core;
pub use clock::{ClockConfig, SimulationClock};
pub use engine::{SimConfig, SimulationEngine};
