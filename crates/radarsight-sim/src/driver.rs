//! Fixed-timestep driver.
//!
//! Hosts that render at an uneven frame rate feed real frame durations in
//! here; the driver slices them into equal engine ticks. If the host falls
//! too far behind, excess time is dropped instead of spiralling into
//! catch-up.

use tracing::warn;

use radarsight_core::constants::{DRIVER_MAX_STEPS_PER_FRAME, PULSE_ADVANCE_PERIOD};
use radarsight_core::error::{require_non_negative, require_positive, ConfigurationError};
use radarsight_core::state::SimulationSnapshot;

use crate::engine::SimulationEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepDriver {
    step: f64,
    accumulator: f64,
    max_steps: u32,
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self {
            step: PULSE_ADVANCE_PERIOD,
            accumulator: 0.0,
            max_steps: DRIVER_MAX_STEPS_PER_FRAME,
        }
    }
}

impl FixedStepDriver {
    pub fn new(step: f64) -> Result<Self, ConfigurationError> {
        require_positive("step", step)?;
        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// Cap on ticks per frame. Zero is raised to one.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add a frame's worth of time and return how many ticks to run.
    pub fn advance(&mut self, frame_secs: f64) -> Result<u32, ConfigurationError> {
        require_non_negative("frame_secs", frame_secs)?;
        self.accumulator += frame_secs;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            // Too far behind, drop the backlog.
            warn!(
                dropped_secs = self.accumulator,
                max_steps = self.max_steps,
                "fixed-step driver fell behind"
            );
            self.accumulator = 0.0;
        }
        Ok(steps)
    }

    /// Run the engine for one frame. Returns the last snapshot produced, or
    /// `None` when the frame was shorter than one step.
    pub fn drive(
        &mut self,
        engine: &mut SimulationEngine,
        frame_secs: f64,
    ) -> Result<Option<SimulationSnapshot>, ConfigurationError> {
        let steps = self.advance(frame_secs)?;
        let mut last = None;
        for _ in 0..steps {
            last = Some(engine.tick(self.step)?);
        }
        Ok(last)
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radarsight_core::session::Session;

    use crate::engine::SimConfig;

    #[test]
    fn test_short_frames_accumulate() {
        let mut driver = FixedStepDriver::new(0.05).unwrap();
        assert_eq!(driver.advance(0.03).unwrap(), 0);
        assert_eq!(driver.advance(0.03).unwrap(), 1);
        assert!((driver.alpha() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_backlog_is_dropped() {
        let mut driver = FixedStepDriver::new(0.05).unwrap().with_max_steps(4);
        assert_eq!(driver.advance(10.0).unwrap(), 4);
        assert_eq!(driver.alpha(), 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(FixedStepDriver::new(0.0).is_err());
        let mut driver = FixedStepDriver::default();
        assert!(driver.advance(-1.0).is_err());
    }

    #[test]
    fn test_drive_ticks_engine() {
        let mut engine = SimulationEngine::new(Session::default(), SimConfig::default()).unwrap();
        let mut driver = FixedStepDriver::new(0.25).unwrap();

        assert!(driver.drive(&mut engine, 0.1).unwrap().is_none());
        let snapshot = driver.drive(&mut engine, 0.9).unwrap().unwrap();
        assert_eq!(snapshot.time.tick, 4);
        assert!((snapshot.time.elapsed_secs - 1.0).abs() < 1e-9);
        assert_eq!(snapshot.pulses.len(), 1);
    }
}
