//! Core types and definitions for the RADARSIGHT simulation.
//!
//! This crate defines the vocabulary shared by the detection engine and the
//! pulse simulator: configuration, the session object, commands, snapshots,
//! events, and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod session;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
