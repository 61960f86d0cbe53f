//! ECS systems that operate on the pulse world.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all pulse state lives in components.

pub mod cleanup;
pub mod propagation;
pub mod pulse_spawner;
pub mod snapshot;
pub mod stealth;
