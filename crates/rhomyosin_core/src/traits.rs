use crate::error::IntegrationError;
use crate::solvers::{IntegrationState, StepOutcome};
use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the integrator.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Represents a continuous-time dynamical system dx/dt = f(t, x).
pub trait DynamicalSystem<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field.
    /// t: current time
    /// x: current state
    /// out: buffer to write dx/dt into (fully overwritten)
    fn apply(&self, t: T, x: &[T], out: &mut [T]);
}

/// A trait for error-controlled solvers that attempt one step at a time.
pub trait AdaptiveSteppable<T: Scalar> {
    /// Attempts a single step of size `state.h`.
    ///
    /// On acceptance `t`, `x` and `dxdt` advance; on rejection they are left
    /// untouched. In both cases `h` is replaced by the size to try next.
    fn try_step(
        &mut self,
        system: &impl DynamicalSystem<T>,
        state: &mut IntegrationState<T>,
    ) -> Result<StepOutcome, IntegrationError>;
}
