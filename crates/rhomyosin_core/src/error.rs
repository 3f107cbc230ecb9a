use thiserror::Error;

/// Failures that end an integration run.
///
/// Rejected steps are not errors; they are reported through
/// [`StepOutcome::Rejected`](crate::solvers::StepOutcome) and retried.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The error estimate stayed above tolerance until the step size
    /// dropped below the configured minimum.
    #[error("step size underflow at t = {t}: h = {h} is below the minimum step size {min_step}")]
    StepSizeUnderflow { t: f64, h: f64, min_step: f64 },

    #[error("failed to record sample at t = {t}")]
    Sample {
        t: f64,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid integration settings: {0}")]
    InvalidSettings(String),
}
