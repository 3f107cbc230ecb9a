//! Time-stepping driver with fixed-cadence sampling.
//!
//! Samples are taken from accepted states, not interpolated: a row is emitted
//! for the first state whose time passes the next sample time, and the sample
//! time then advances by one interval. Sampled times are therefore strictly
//! increasing but not evenly spaced, and a step longer than the interval
//! leaves the schedule lagging behind the solution. Rejected attempts are never
//! sampled. With the default settings no rejection falls past a pending sample
//! time, so a full run to t = 300 yields the same rows either way.

use crate::error::IntegrationError;
use crate::solvers::{BogackiShampine, IntegrationState, StepControl, StepOutcome};
use crate::traits::{AdaptiveSteppable, DynamicalSystem};
use log::info;
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub t_start: f64,
    pub t_end: f64,
    pub initial_step: f64,
    /// Simulated time between output samples.
    pub sample_interval: f64,
    #[serde(default)]
    pub control: StepControl,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            t_start: 0.0,
            t_end: 300.0,
            initial_step: 0.01,
            sample_interval: 0.1,
            control: StepControl::default(),
        }
    }
}

impl IntegrationSettings {
    pub fn validate(&self) -> Result<(), IntegrationError> {
        if !(self.t_end > self.t_start) {
            return Err(IntegrationError::InvalidSettings(format!(
                "end time {} must be after start time {}",
                self.t_end, self.t_start
            )));
        }
        if !(self.initial_step > 0.0) {
            return Err(IntegrationError::InvalidSettings(
                "initial step must be positive".to_string(),
            ));
        }
        if !(self.sample_interval > 0.0) {
            return Err(IntegrationError::InvalidSettings(
                "sample interval must be positive".to_string(),
            ));
        }
        self.control.validate()
    }
}

/// Receives sampled states during integration.
pub trait SampleSink {
    fn record(&mut self, t: f64, state: &[f64]) -> io::Result<()>;
}

/// In-memory sink keeping every sampled row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub states: Vec<Vec<f64>>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl SampleSink for Trajectory {
    fn record(&mut self, t: f64, state: &[f64]) -> io::Result<()> {
        self.times.push(t);
        self.states.push(state.to_vec());
        Ok(())
    }
}

/// Step statistics of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Attempted steps, accepted and rejected.
    pub steps: usize,
    pub accepted: usize,
    pub min_step: f64,
    pub max_step: f64,
    pub t_end: f64,
    /// Time actually reached; the last step may overshoot `t_end`.
    pub final_time: f64,
    pub samples: usize,
}

impl RunSummary {
    pub fn rejected(&self) -> usize {
        self.steps - self.accepted
    }

    pub fn rejected_fraction(&self) -> f64 {
        1.0 - self.accepted as f64 / self.steps as f64
    }

    /// Nominal mean step size, `t_end / steps`.
    pub fn mean_step(&self) -> f64 {
        self.t_end / self.steps as f64
    }
}

/// Integrates `system` from `initial` with a Bogacki-Shampine stepper.
pub fn integrate<S, K>(
    system: &S,
    initial: &[f64],
    settings: &IntegrationSettings,
    sink: &mut K,
) -> Result<RunSummary, IntegrationError>
where
    S: DynamicalSystem<f64>,
    K: SampleSink,
{
    let mut stepper = BogackiShampine::new(system.dimension(), settings.control);
    integrate_with(&mut stepper, system, initial, settings, sink)
}

/// Drives `stepper` until `t_end`, handing every sample to `sink`.
///
/// Returns as soon as the stepper reports a fatal error; rows already
/// recorded stay in the sink.
pub fn integrate_with<St, S, K>(
    stepper: &mut St,
    system: &S,
    initial: &[f64],
    settings: &IntegrationSettings,
    sink: &mut K,
) -> Result<RunSummary, IntegrationError>
where
    St: AdaptiveSteppable<f64>,
    S: DynamicalSystem<f64>,
    K: SampleSink,
{
    settings.validate()?;
    if initial.len() != system.dimension() {
        return Err(IntegrationError::InvalidSettings(format!(
            "initial state has {} entries, system dimension is {}",
            initial.len(),
            system.dimension()
        )));
    }

    info!(
        "integrating to t = {} (h0 = {}, tolerance = {})",
        settings.t_end, settings.initial_step, settings.control.tolerance
    );

    let mut state =
        IntegrationState::new(system, settings.t_start, initial, settings.initial_step);
    let mut steps = 0usize;
    let mut accepted = 0usize;
    let mut samples = 0usize;
    let mut min_step = settings.initial_step;
    let mut max_step = settings.control.min_step;
    let mut next_sample = settings.t_start;

    while state.t < settings.t_end {
        let outcome = stepper.try_step(system, &mut state)?;
        steps += 1;
        if outcome == StepOutcome::Accepted {
            accepted += 1;
        }

        if state.h < min_step {
            min_step = state.h;
        } else if state.h > max_step {
            max_step = state.h;
        }

        // a rejected attempt leaves (t, x) unchanged and would repeat the last row
        if outcome == StepOutcome::Accepted && state.t > next_sample {
            sink.record(state.t, &state.x)
                .map_err(|source| IntegrationError::Sample { t: state.t, source })?;
            samples += 1;
            next_sample += settings.sample_interval;
        }
    }

    info!(
        "integration complete: {} steps, {} accepted, {} samples",
        steps, accepted, samples
    );

    Ok(RunSummary {
        steps,
        accepted,
        min_step,
        max_step,
        t_end: settings.t_end,
        final_time: state.t,
        samples,
    })
}
