//! The `rhomyosin_core` crate integrates the 46-species CaMKII/actin/Rho-myosin
//! signaling network with an adaptive embedded Runge-Kutta method.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (ODE right-hand
//!   sides), `AdaptiveSteppable` (error-controlled solvers).
//! - **Species**: the fixed state layout and the reference initial conditions.
//! - **Kinetics**: five pathway modules composed additively into `RhoMyosinNetwork`.
//! - **Solvers**: the Bogacki-Shampine 3(2) stepper and its `StepControl`.
//! - **Integration**: the sampling driver, `SampleSink`, and `RunSummary` statistics.

pub mod error;
pub mod integration;
pub mod kinetics;
pub mod solvers;
pub mod species;
pub mod traits;

pub use error::IntegrationError;
pub use integration::{
    integrate, integrate_with, IntegrationSettings, RunSummary, SampleSink, Trajectory,
};
pub use kinetics::RhoMyosinNetwork;
pub use solvers::{BogackiShampine, IntegrationState, StepControl, StepOutcome};
pub use species::{initial_conditions, Pathway, Species, StateVector, SPECIES_COUNT};
