use crate::error::IntegrationError;
use crate::traits::{AdaptiveSteppable, DynamicalSystem, Scalar};
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// Error tolerance and step-size limits for adaptive stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepControl {
    /// Acceptable absolute local error per component.
    pub tolerance: f64,
    pub safety: f64,
    /// Largest factor by which an accepted step may grow.
    pub grow_max: f64,
    /// Smallest factor by which a rejected step may shrink.
    pub shrink_max: f64,
    /// A rejected step that ends up below this size aborts the run.
    pub min_step: f64,
}

impl Default for StepControl {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-6,
            safety: 0.9,
            grow_max: 1.2,
            shrink_max: 0.1,
            min_step: 1.0e-6,
        }
    }
}

impl StepControl {
    pub fn validate(&self) -> Result<(), IntegrationError> {
        let invalid = |msg: &str| Err(IntegrationError::InvalidSettings(msg.to_string()));
        if !(self.tolerance > 0.0) {
            return invalid("tolerance must be positive");
        }
        if !(self.safety > 0.0 && self.safety <= 1.0) {
            return invalid("safety factor must lie in (0, 1]");
        }
        if !(self.grow_max >= 1.0) {
            return invalid("growth cap must be at least 1");
        }
        if !(self.shrink_max > 0.0 && self.shrink_max < 1.0) {
            return invalid("shrink floor must lie in (0, 1)");
        }
        if !(self.min_step >= 0.0) {
            return invalid("minimum step size must not be negative");
        }
        Ok(())
    }
}

/// Time, state, derivative at (t, x), and the step size to try next.
#[derive(Debug, Clone)]
pub struct IntegrationState<T: Scalar> {
    pub t: T,
    pub x: Vec<T>,
    pub dxdt: Vec<T>,
    pub h: T,
}

impl<T: Scalar> IntegrationState<T> {
    /// Seeds the state and evaluates the first derivative f(t0, x0).
    pub fn new(system: &impl DynamicalSystem<T>, t0: T, x0: &[T], h0: T) -> Self {
        let mut dxdt = vec![T::zero(); x0.len()];
        system.apply(t0, x0, &mut dxdt);
        Self {
            t: t0,
            x: x0.to_vec(),
            dxdt,
            h: h0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Accepted,
    Rejected,
}

/// Bogacki-Shampine 3(2) embedded pair with first-same-as-last reuse.
///
/// The derivative at the end of an accepted step becomes the first stage of
/// the next one, so an accepted step costs three evaluations.
pub struct BogackiShampine<T: Scalar> {
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    tmp: Vec<T>,
    tolerance: T,
    safety: T,
    grow_max: T,
    shrink_max: T,
    min_step: T,
    last_error: T,
}

impl<T: Scalar> BogackiShampine<T> {
    pub fn new(dim: usize, control: StepControl) -> Self {
        let z = T::zero();
        Self {
            k2: vec![z; dim],
            k3: vec![z; dim],
            k4: vec![z; dim],
            tmp: vec![z; dim],
            tolerance: T::from_f64(control.tolerance).unwrap(),
            safety: T::from_f64(control.safety).unwrap(),
            grow_max: T::from_f64(control.grow_max).unwrap(),
            shrink_max: T::from_f64(control.shrink_max).unwrap(),
            min_step: T::from_f64(control.min_step).unwrap(),
            last_error: z,
        }
    }

    /// Scaled error norm of the most recent attempt (accepted or not).
    pub fn last_error(&self) -> T {
        self.last_error
    }
}

impl<T: Scalar> AdaptiveSteppable<T> for BogackiShampine<T> {
    fn try_step(
        &mut self,
        system: &impl DynamicalSystem<T>,
        state: &mut IntegrationState<T>,
    ) -> Result<StepOutcome, IntegrationError> {
        let half = T::from_f64(0.5).unwrap();
        let three_quarters = T::from_f64(0.75).unwrap();
        let ninth = T::from_f64(1.0 / 9.0).unwrap();
        let two = T::from_f64(2.0).unwrap();
        let three = T::from_f64(3.0).unwrap();
        let four = T::from_f64(4.0).unwrap();
        let six = T::from_f64(6.0).unwrap();
        let seven = T::from_f64(7.0).unwrap();
        let eight = T::from_f64(8.0).unwrap();
        let twenty_fourth = T::from_f64(24.0).unwrap();
        let e1 = T::from_f64(5.0 / 72.0).unwrap();
        let e2 = T::from_f64(1.0 / 12.0).unwrap();
        let e3 = T::from_f64(1.0 / 9.0).unwrap();
        let e4 = T::from_f64(1.0 / 8.0).unwrap();
        let third = T::from_f64(1.0 / 3.0).unwrap();

        let IntegrationState { t, x, dxdt: k1, h } = state;
        let (t0, h0) = (*t, *h);
        let n = x.len();

        // k2 = f(t + h/2, x + h/2 k1)
        for i in 0..n {
            self.tmp[i] = x[i] + half * h0 * k1[i];
        }
        system.apply(t0 + half * h0, &self.tmp, &mut self.k2);

        // k3 = f(t + 3h/4, x + 3h/4 k2)
        for i in 0..n {
            self.tmp[i] = x[i] + three_quarters * h0 * self.k2[i];
        }
        system.apply(t0 + three_quarters * h0, &self.tmp, &mut self.k3);

        // k4 = f(t + h, x + h/9 (2k1 + 3k2 + 4k3))
        for i in 0..n {
            self.tmp[i] =
                x[i] + ninth * h0 * (two * k1[i] + three * self.k2[i] + four * self.k3[i]);
        }
        system.apply(t0 + h0, &self.tmp, &mut self.k4);

        // Propagated solution and per-component error
        let mut err_max = T::zero();
        for i in 0..n {
            self.tmp[i] = x[i]
                + h0 / twenty_fourth
                    * (seven * k1[i] + six * self.k2[i] + eight * self.k3[i] + three * self.k4[i]);

            let err = (h0
                * (e1 * k1[i] - e2 * self.k2[i] - e3 * self.k3[i] + e4 * self.k4[i]))
                .abs()
                / self.tolerance;
            if err > err_max {
                err_max = err;
            }
        }
        self.last_error = err_max;

        let fct = if err_max > T::zero() {
            self.safety / err_max.powf(third)
        } else {
            self.grow_max
        };

        if err_max > T::one() {
            *h = if fct < self.shrink_max {
                h0 * self.shrink_max
            } else {
                h0 * fct
            };
            debug!(
                "rejected step at t = {:?}: error {:?}, h {:?} -> {:?}",
                t0, err_max, h0, *h
            );
            if *h < self.min_step {
                let err = IntegrationError::StepSizeUnderflow {
                    t: t0.to_f64().unwrap_or(f64::NAN),
                    h: h.to_f64().unwrap_or(f64::NAN),
                    min_step: self.min_step.to_f64().unwrap_or(f64::NAN),
                };
                error!("{err}");
                return Err(err);
            }
            return Ok(StepOutcome::Rejected);
        }

        k1.copy_from_slice(&self.k4);
        x.copy_from_slice(&self.tmp);
        *t = t0 + h0;
        *h = if fct > self.grow_max {
            h0 * self.grow_max
        } else {
            h0 * fct
        };
        Ok(StepOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::{BogackiShampine, IntegrationState, StepControl, StepOutcome};
    use crate::error::IntegrationError;
    use crate::traits::{AdaptiveSteppable, DynamicalSystem};
    use approx::assert_relative_eq;

    struct Decay {
        rate: f64,
    }

    impl DynamicalSystem<f64> for Decay {
        fn dimension(&self) -> usize {
            1
        }

        fn apply(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = -self.rate * x[0];
        }
    }

    /// dx/dt = t, integrated exactly by the propagated solution.
    struct Ramp;

    impl DynamicalSystem<f64> for Ramp {
        fn dimension(&self) -> usize {
            1
        }

        fn apply(&self, t: f64, _x: &[f64], out: &mut [f64]) {
            out[0] = t;
        }
    }

    struct Constant;

    impl DynamicalSystem<f64> for Constant {
        fn dimension(&self) -> usize {
            2
        }

        fn apply(&self, _t: f64, _x: &[f64], out: &mut [f64]) {
            out[0] = 1.0;
            out[1] = -2.0;
        }
    }

    #[test]
    fn accepted_step_advances_by_exactly_h() {
        let system = Decay { rate: 0.5 };
        let mut state = IntegrationState::new(&system, 0.3, &[1.0], 0.01);
        let mut stepper = BogackiShampine::new(1, StepControl::default());

        let h_old = state.h;
        let outcome = stepper.try_step(&system, &mut state).unwrap();
        assert_eq!(outcome, StepOutcome::Accepted);
        assert_eq!(state.t, 0.3 + h_old);
        assert!(state.h <= 1.2 * h_old);
        assert_relative_eq!(state.x[0], (-0.5f64 * 0.01).exp(), max_relative = 1e-8);
    }

    #[test]
    fn accepted_step_reuses_last_stage_as_next_derivative() {
        let system = Decay { rate: 2.0 };
        let mut state = IntegrationState::new(&system, 0.0, &[3.0], 0.001);
        let mut stepper = BogackiShampine::new(1, StepControl::default());
        stepper.try_step(&system, &mut state).unwrap();

        let mut fresh = [0.0];
        system.apply(state.t, &state.x, &mut fresh);
        // k4 is evaluated at the intermediate point, not the returned solution
        assert_relative_eq!(state.dxdt[0], fresh[0], max_relative = 1e-6);
    }

    #[test]
    fn zero_error_grows_by_the_cap() {
        let mut state = IntegrationState::new(&Constant, 0.0, &[0.0, 0.0], 0.25);
        let mut stepper = BogackiShampine::new(2, StepControl::default());
        let outcome = stepper.try_step(&Constant, &mut state).unwrap();

        assert_eq!(outcome, StepOutcome::Accepted);
        assert!(stepper.last_error() < 1e-6);
        assert_eq!(state.h, 0.25 * 1.2);
        assert_relative_eq!(state.x[0], 0.25, max_relative = 1e-15);
        assert_relative_eq!(state.x[1], -0.5, max_relative = 1e-15);
    }

    #[test]
    fn propagated_solution_is_exact_for_ramp_rates() {
        let mut state = IntegrationState::new(&Ramp, 0.0, &[1.0], 0.1);
        let mut stepper = BogackiShampine::new(1, StepControl::default());
        let outcome = stepper.try_step(&Ramp, &mut state).unwrap();
        assert_eq!(outcome, StepOutcome::Accepted);
        assert_relative_eq!(state.x[0], 1.0 + 0.5 * 0.1 * 0.1, max_relative = 1e-14);
        assert!(stepper.last_error() < 1e-6);
    }

    #[test]
    fn rejected_step_keeps_state_and_shrinks_at_most_tenfold() {
        let system = Decay { rate: 50.0 };
        let mut state = IntegrationState::new(&system, 1.0, &[1.0], 0.5);
        let before = state.clone();
        let mut stepper = BogackiShampine::new(1, StepControl::default());

        let outcome = stepper.try_step(&system, &mut state).unwrap();
        assert_eq!(outcome, StepOutcome::Rejected);
        assert!(stepper.last_error() > 1.0);
        assert_eq!(state.t, before.t);
        assert_eq!(state.x, before.x);
        assert_eq!(state.dxdt, before.dxdt);
        assert!(state.h < before.h);
        assert!(state.h >= 0.1 * before.h);
    }

    #[test]
    fn growth_and_shrink_bounds_hold_over_many_attempts() {
        let system = Decay { rate: 20.0 };
        let mut state = IntegrationState::new(&system, 0.0, &[5.0], 0.2);
        let mut stepper = BogackiShampine::new(1, StepControl::default());
        let mut accepted = 0;
        let mut rejected = 0;
        for _ in 0..200 {
            let h_old = state.h;
            let t_old = state.t;
            match stepper.try_step(&system, &mut state).unwrap() {
                StepOutcome::Accepted => {
                    accepted += 1;
                    assert_eq!(state.t, t_old + h_old);
                    assert!(state.h <= 1.2 * h_old);
                }
                StepOutcome::Rejected => {
                    rejected += 1;
                    assert_eq!(state.t, t_old);
                    assert!(state.h >= 0.1 * h_old);
                }
            }
        }
        assert!(accepted > 0);
        assert!(rejected > 0);
    }

    #[test]
    fn stiff_decay_with_tight_tolerance_underflows() {
        let system = Decay { rate: 1.0e9 };
        let control = StepControl {
            tolerance: 1.0e-12,
            ..StepControl::default()
        };
        let mut state = IntegrationState::new(&system, 0.0, &[1.0], 0.01);
        let mut stepper = BogackiShampine::new(1, control);

        let mut rejections = 0;
        let err = loop {
            match stepper.try_step(&system, &mut state) {
                Ok(StepOutcome::Rejected) => rejections += 1,
                Ok(StepOutcome::Accepted) => panic!("stiff step should never be accepted"),
                Err(err) => break err,
            }
        };
        assert!(rejections >= 3);
        match err {
            IntegrationError::StepSizeUnderflow { t, h, min_step } => {
                assert_eq!(t, 0.0);
                assert!(h < min_step);
                assert_eq!(min_step, 1.0e-6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn step_control_validation() {
        assert!(StepControl::default().validate().is_ok());
        let bad = StepControl {
            shrink_max: 1.5,
            ..StepControl::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(IntegrationError::InvalidSettings(msg)) if msg.contains("shrink")
        ));
        let bad = StepControl {
            tolerance: 0.0,
            ..StepControl::default()
        };
        assert!(bad.validate().is_err());
    }
}
