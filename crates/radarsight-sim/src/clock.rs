//! Simulation clock: pulse lifecycle and stealth flag.
//!
//! `SimulationClock` owns a hecs world of live pulses and the stealth flag.
//! Two periodic drivers run inside `tick`: a spawn driver that emits one
//! pulse per `spawn_period`, and an advance driver that steps every pulse
//! once per `advance_period` and retires the expired ones. Timer events are
//! processed in chronological order, so output depends only on the sequence
//! of `delta_time` values the host supplies.
//!
//! A long tick does not replay every event. Pulses are independent of each
//! other, so spawns whose whole lifetime falls inside the tick are skipped
//! arithmetically and only the tail that can still be alive at the end is
//! simulated. Work per tick is bounded by the pulse lifetime, not by
//! `delta_time`.

use hecs::World;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use radarsight_core::config::AircraftConfig;
use radarsight_core::constants::*;
use radarsight_core::enums::StealthState;
use radarsight_core::error::{
    require_above, require_non_negative, require_positive, ConfigurationError,
};
use radarsight_core::events::SimEvent;
use radarsight_core::session::Session;
use radarsight_core::state::{ClockSnapshot, PulseView};
use radarsight_core::types::{Position, SimTime};

use crate::systems;

/// Pulse timing and geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Time between pulse emissions.
    pub spawn_period: f64,
    /// Time between advance steps.
    pub advance_period: f64,
    /// Round-trip fraction added per advance step.
    pub progress_step: f64,
    /// Scene distance added per advance step.
    pub range_step: f64,
    /// Pulses past this radius are retired.
    pub max_display_radius: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            spawn_period: PULSE_SPAWN_PERIOD,
            advance_period: PULSE_ADVANCE_PERIOD,
            progress_step: PULSE_PROGRESS_STEP,
            range_step: PULSE_RANGE_STEP,
            max_display_radius: MAX_DISPLAY_RADIUS,
        }
    }
}

impl ClockConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        // Anything at or below the timer tolerance would fire every iteration.
        require_above("spawn_period", self.spawn_period, TIMER_EPSILON)?;
        require_above("advance_period", self.advance_period, TIMER_EPSILON)?;
        require_above("progress_step", self.progress_step, TIMER_EPSILON)?;
        require_non_negative("range_step", self.range_step)?;
        require_positive("max_display_radius", self.max_display_radius)?;
        Ok(())
    }

    /// Number of advance steps a pulse survives before it is retired.
    pub fn pulse_lifetime(&self) -> u64 {
        let by_progress = ((1.0 - TIMER_EPSILON) / self.progress_step).ceil().max(1.0);
        let by_range = if self.range_step > 0.0 {
            (self.max_display_radius / self.range_step).floor() + 1.0
        } else {
            f64::INFINITY
        };
        by_progress.min(by_range) as u64
    }
}

/// Owns the live pulse set and the stealth flag.
pub struct SimulationClock {
    world: World,
    config: ClockConfig,
    time: SimTime,
    /// Time since the last spawn event.
    spawn_elapsed: f64,
    /// Time since the last advance event.
    advance_elapsed: f64,
    next_pulse_id: u64,
    stealth_active: bool,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::build(ClockConfig::default())
    }
}

impl SimulationClock {
    pub fn new(config: ClockConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ClockConfig) -> Self {
        Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            spawn_elapsed: 0.0,
            advance_elapsed: 0.0,
            next_pulse_id: 0,
            stealth_active: false,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the clock by `delta_time` and return the resulting snapshot.
    ///
    /// The stealth invariant is checked against the session before any
    /// timer fires, so a snapshot never pairs a stale flag with the
    /// configuration it was taken under.
    pub fn tick(
        &mut self,
        session: &Session,
        delta_time: f64,
    ) -> Result<ClockSnapshot, ConfigurationError> {
        require_non_negative("delta_time", delta_time)?;

        self.enforce_stealth_invariant(session.aircraft());
        self.run_timers(delta_time);
        self.time.advance(delta_time);

        Ok(self.take_snapshot())
    }

    /// Current state without advancing time. Drains pending events.
    pub fn take_snapshot(&mut self) -> ClockSnapshot {
        ClockSnapshot {
            time: self.time,
            pulses: self.pulses(),
            stealth_active: self.stealth_active,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Enter stealth mode. Returns the canonical stealth configuration at
    /// `position`; the caller must write it into its session.
    pub fn enter_stealth(&mut self, position: Position) -> AircraftConfig {
        if !self.stealth_active {
            info!(?position, "stealth mode engaged");
            self.events.push(SimEvent::StealthEngaged);
        }
        self.stealth_active = true;
        AircraftConfig::optimal_stealth(position)
    }

    /// Leave stealth mode. Configuration is untouched.
    pub fn exit_stealth(&mut self) {
        if self.stealth_active {
            info!("stealth mode disengaged");
            self.events.push(SimEvent::StealthDisengaged);
        }
        self.stealth_active = false;
    }

    /// Check the stealth invariant after an aircraft change.
    /// Returns true when the flag was cleared.
    pub fn enforce_stealth_invariant(&mut self, aircraft: &AircraftConfig) -> bool {
        systems::stealth::enforce(&mut self.stealth_active, aircraft, &mut self.events)
    }

    pub fn is_stealth_active(&self) -> bool {
        self.stealth_active
    }

    pub fn stealth_state(&self) -> StealthState {
        if self.stealth_active {
            StealthState::Stealth
        } else {
            StealthState::Normal
        }
    }

    /// Live pulses, oldest first.
    pub fn pulses(&self) -> Vec<PulseView> {
        systems::snapshot::build_pulses(&self.world)
    }

    pub fn pulse_count(&self) -> usize {
        self.world.len() as usize
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Get a read-only reference to the pulse world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Fire every timer event falling inside `delta_time`, in time order.
    /// When both drivers are due at the same instant the advance runs first,
    /// so a freshly spawned pulse is reported with zero progress.
    fn run_timers(&mut self, delta_time: f64) {
        let mut remaining = delta_time;
        self.skip_expired_spawns(&mut remaining);

        loop {
            let until_advance = (self.config.advance_period - self.advance_elapsed).max(0.0);
            let until_spawn = (self.config.spawn_period - self.spawn_elapsed).max(0.0);
            let step = until_advance.min(until_spawn);

            if step > remaining + TIMER_EPSILON {
                self.advance_elapsed += remaining;
                self.spawn_elapsed += remaining;
                break;
            }

            remaining = (remaining - step).max(0.0);
            self.advance_elapsed += step;
            self.spawn_elapsed += step;

            if self.advance_elapsed + TIMER_EPSILON >= self.config.advance_period {
                self.advance_elapsed = 0.0;
                self.advance_pulses();
            }
            if self.spawn_elapsed + TIMER_EPSILON >= self.config.spawn_period {
                self.spawn_elapsed = 0.0;
                systems::pulse_spawner::run(
                    &mut self.world,
                    &mut self.next_pulse_id,
                    &mut self.events,
                );
            }
        }
    }

    /// Fast-forward over the head of a long tick.
    ///
    /// Every spawn except the last few retires before the tick ends. Those are
    /// issued ids and reported as one `PulsesSkipped` event without entering
    /// the world. Live pulses are run to retirement, then the timers jump to
    /// the instant of the last skipped spawn and `remaining` shrinks to the
    /// tail the event loop still has to simulate.
    fn skip_expired_spawns(&mut self, remaining: &mut f64) {
        let config = self.config;
        let lifetime = config.pulse_lifetime();
        // Upper bound on the time from spawn to retirement.
        let horizon = (lifetime as f64 + 1.0) * config.advance_period;

        let until_spawn = (config.spawn_period - self.spawn_elapsed).max(0.0);
        if until_spawn > *remaining + TIMER_EPSILON {
            return;
        }
        let spawns =
            ((*remaining + TIMER_EPSILON - until_spawn) / config.spawn_period).floor() + 1.0;
        let keep = (horizon / config.spawn_period).ceil() + 1.0;
        if spawns <= keep {
            return;
        }
        let skipped = spawns - keep;
        let jump = until_spawn + (skipped - 1.0) * config.spawn_period;
        if jump < horizon {
            return;
        }

        // Current pulses retire within `lifetime` advances, all before `jump`.
        for _ in 0..lifetime.saturating_add(2) {
            if self.world.is_empty() {
                break;
            }
            self.advance_pulses();
        }

        let first_id = self.next_pulse_id;
        let count = skipped as u64;
        self.next_pulse_id += count;
        debug!(first_id, count, "pulses skipped inside long tick");
        self.events.push(SimEvent::PulsesSkipped { first_id, count });

        // Advance phase drifts by `spawn_period mod advance_period` per spawn.
        let drift = wrap_phase(config.spawn_period, config.advance_period);
        self.advance_elapsed = wrap_phase(
            self.advance_elapsed + until_spawn + (skipped - 1.0) * drift,
            config.advance_period,
        );
        self.spawn_elapsed = 0.0;
        *remaining = (*remaining - jump).max(0.0);
    }

    fn advance_pulses(&mut self) {
        // 1. Propagation
        systems::propagation::run(
            &mut self.world,
            self.config.progress_step,
            self.config.range_step,
        );
        // 2. Retirement
        systems::cleanup::run(
            &mut self.world,
            self.config.max_display_radius,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }
}

/// Time since the last event of a timer with `period`, given `elapsed` since
/// some earlier event. Values within the timer tolerance of an event snap to it.
fn wrap_phase(elapsed: f64, period: f64) -> f64 {
    let wrapped = elapsed % period;
    if wrapped < TIMER_EPSILON || wrapped + TIMER_EPSILON >= period {
        0.0
    } else {
        wrapped
    }
}
