//! Simulation engine for one radar session.
//!
//! `SimulationEngine` owns the caller's `Session`, the `SimulationClock`,
//! and the latest `RadarResult`. Every accepted configuration write is
//! followed, before anything else runs, by a stealth-invariant check and a
//! fresh detection evaluation. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use radarsight_core::commands::SessionCommand;
use radarsight_core::config::{normalize_angle_deg, AircraftConfig, RadarConfig};
use radarsight_core::constants::DEFAULT_DETECTION_THRESHOLD;
use radarsight_core::enums::SimPhase;
use radarsight_core::error::{require_non_negative, ConfigurationError};
use radarsight_core::events::SimEvent;
use radarsight_core::session::Session;
use radarsight_core::state::{ClockSnapshot, RadarResult, SimulationSnapshot};

use crate::clock::{ClockConfig, SimulationClock};
use crate::detection;
use crate::presets;

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub clock: ClockConfig,
    /// Probability a target must exceed to count as detected.
    pub detection_threshold: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.clock.validate()?;
        detection::validate_threshold(self.detection_threshold)?;
        Ok(())
    }
}

/// The simulation engine. Owns the session and all simulation state.
pub struct SimulationEngine {
    session: Session,
    clock: SimulationClock,
    result: RadarResult,
    phase: SimPhase,
    detection_threshold: f64,
    command_queue: VecDeque<SessionCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine for `session`. Fails if the configuration cannot be
    /// evaluated.
    pub fn new(session: Session, config: SimConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let clock = SimulationClock::new(config.clock)?;
        let result = detection::evaluate_with_threshold(
            session.aircraft(),
            session.radar(),
            config.detection_threshold,
        )?;

        Ok(Self {
            session,
            clock,
            result,
            phase: SimPhase::default(),
            detection_threshold: config.detection_threshold,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command now. On error nothing changes.
    pub fn apply_command(&mut self, command: SessionCommand) -> Result<(), ConfigurationError> {
        self.handle_command(command)
    }

    /// Process queued commands, advance the clock by `delta_time` (unless
    /// paused), and return the resulting snapshot.
    pub fn tick(&mut self, delta_time: f64) -> Result<SimulationSnapshot, ConfigurationError> {
        require_non_negative("delta_time", delta_time)?;
        self.process_commands();

        let clock = if self.phase == SimPhase::Running {
            self.clock.tick(&self.session, delta_time)?
        } else {
            self.clock.enforce_stealth_invariant(self.session.aircraft());
            self.clock.take_snapshot()
        };

        Ok(self.build_snapshot(clock))
    }

    /// Enter stealth mode, keeping the current position.
    pub fn enter_stealth(&mut self) -> Result<AircraftConfig, ConfigurationError> {
        self.handle_command(SessionCommand::EnterStealth)?;
        Ok(*self.session.aircraft())
    }

    pub fn exit_stealth(&mut self) {
        self.clock.exit_stealth();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Latest detection verdict.
    pub fn result(&self) -> &RadarResult {
        &self.result
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn detection_threshold(&self) -> f64 {
        self.detection_threshold
    }

    pub fn is_stealth_active(&self) -> bool {
        self.clock.is_stealth_active()
    }

    /// Process all queued commands. Rejected commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(error) = self.handle_command(command) {
                warn!(?command, %error, "rejected queued command");
            }
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SessionCommand) -> Result<(), ConfigurationError> {
        match command {
            SessionCommand::SetBaseCrossSection { value } => {
                self.edit_aircraft(|a| a.base_cross_section = value)
            }
            SessionCommand::SetAbsorption { value } => {
                self.edit_aircraft(|a| a.absorption_coefficient = value)
            }
            SessionCommand::SetGeometry { geometry } => {
                self.edit_aircraft(|a| a.geometry = geometry)
            }
            SessionCommand::SetAngle { degrees } => {
                self.edit_aircraft(|a| a.angle_to_radar_deg = normalize_angle_deg(degrees))
            }
            SessionCommand::SetPosition { position } => {
                self.edit_aircraft(|a| a.position = position)
            }
            SessionCommand::SetAircraft { aircraft } => self.commit(aircraft, *self.session.radar()),
            SessionCommand::LoadAircraftPreset { preset } => {
                let aircraft = presets::aircraft_preset(preset, self.session.aircraft().position);
                self.commit(aircraft, *self.session.radar())
            }
            SessionCommand::SetFrequency { ghz } => self.edit_radar(|r| r.frequency_ghz = ghz),
            SessionCommand::SetPower { kw } => self.edit_radar(|r| r.power_kw = kw),
            SessionCommand::SetRange { km } => self.edit_radar(|r| r.range_km = km),
            SessionCommand::SetSensitivity { dbm } => {
                self.edit_radar(|r| r.sensitivity_dbm = dbm)
            }
            SessionCommand::SetRadar { radar } => self.commit(*self.session.aircraft(), radar),
            SessionCommand::LoadRadarPreset { preset } => {
                self.commit(*self.session.aircraft(), presets::radar_preset(preset))
            }
            SessionCommand::EnterStealth => {
                let position = self.session.aircraft().position;
                let stealth = AircraftConfig::optimal_stealth(position);
                // Commit first so the flag is only raised on a config that holds.
                self.commit(stealth, *self.session.radar())?;
                let applied = self.clock.enter_stealth(position);
                debug_assert_eq!(applied, *self.session.aircraft());
                Ok(())
            }
            SessionCommand::ExitStealth => {
                self.clock.exit_stealth();
                Ok(())
            }
            SessionCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
                Ok(())
            }
            SessionCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
                Ok(())
            }
        }
    }

    fn edit_aircraft(
        &mut self,
        edit: impl FnOnce(&mut AircraftConfig),
    ) -> Result<(), ConfigurationError> {
        let mut aircraft = *self.session.aircraft();
        edit(&mut aircraft);
        self.commit(aircraft, *self.session.radar())
    }

    fn edit_radar(&mut self, edit: impl FnOnce(&mut RadarConfig)) -> Result<(), ConfigurationError> {
        let mut radar = *self.session.radar();
        edit(&mut radar);
        self.commit(*self.session.aircraft(), radar)
    }

    /// Evaluate a candidate configuration and, if it computes, write it,
    /// re-check the stealth invariant, and publish the new result.
    fn commit(
        &mut self,
        aircraft: AircraftConfig,
        radar: RadarConfig,
    ) -> Result<(), ConfigurationError> {
        let result =
            detection::evaluate_with_threshold(&aircraft, &radar, self.detection_threshold)?;

        self.session.set_aircraft(aircraft)?;
        self.session.set_radar(radar)?;
        self.clock.enforce_stealth_invariant(self.session.aircraft());

        if result.is_detected != self.result.is_detected {
            debug!(
                detected = result.is_detected,
                probability = result.detection_probability,
                "detection verdict changed"
            );
            self.events.push(SimEvent::DetectionChanged {
                detected: result.is_detected,
            });
        }
        self.result = result;
        Ok(())
    }

    fn build_snapshot(&mut self, clock: ClockSnapshot) -> SimulationSnapshot {
        let mut events = std::mem::take(&mut self.events);
        events.extend(clock.events);

        SimulationSnapshot {
            time: clock.time,
            phase: self.phase,
            aircraft: *self.session.aircraft(),
            radar_config: *self.session.radar(),
            radar: self.result,
            pulses: clock.pulses,
            stealth: self.clock.stealth_state(),
            optimal_stealth_config: self.session.aircraft().is_optimal_stealth(),
            events,
        }
    }
}
