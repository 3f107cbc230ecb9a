//! RhoA GTPase cycle, ROCK, myosin phosphatase and myosin light chain.

use super::{michaelis_menten, Contributions, ReactionModule};
use crate::species::{Concentrations, Pathway, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhoKinetics {
    pub gef_activation_vmax: f64,
    /// Added to the RhoGEF ordinal in the activation denominator.
    pub gef_activation_km: f64,
    pub gef_inactivation_vmax: f64,
    pub gef_inactivation_km: f64,
    pub rho_loading_vmax: f64,
    pub rho_loading_km: f64,
    pub rho_hydrolysis_vmax: f64,
    pub rho_hydrolysis_km: f64,
    pub rock_on: f64,
    pub rock_off: f64,
    pub myoppase_basal_activation: f64,
    pub myoppase_autoactivation_vmax: f64,
    pub myoppase_autoactivation_km: f64,
    pub myoppase_inhibition_vmax: f64,
    pub myoppase_inhibition_km: f64,
    pub mlc_basal_phos: f64,
    pub mlc_rock_phos_vmax: f64,
    pub mlc_rock_phos_km: f64,
    pub mlc_dephos_vmax: f64,
    pub mlc_dephos_km: f64,
}

impl Default for RhoKinetics {
    fn default() -> Self {
        Self {
            gef_activation_vmax: 0.01,
            gef_activation_km: 1.0,
            gef_inactivation_vmax: 0.1,
            gef_inactivation_km: 1.0,
            rho_loading_vmax: 0.75,
            rho_loading_km: 1.0,
            rho_hydrolysis_vmax: 0.1,
            rho_hydrolysis_km: 1.0,
            rock_on: 0.02,
            rock_off: 0.001,
            myoppase_basal_activation: 0.01,
            myoppase_autoactivation_vmax: 3.0,
            myoppase_autoactivation_km: 16.0,
            myoppase_inhibition_vmax: 2.357,
            myoppase_inhibition_km: 0.1,
            mlc_basal_phos: 0.01,
            mlc_rock_phos_vmax: 1.8,
            mlc_rock_phos_km: 2.47,
            mlc_dephos_vmax: 1.0,
            mlc_dephos_km: 16.0,
        }
    }
}

impl RhoKinetics {
    /// CaMKII-driven RhoGEF activation.
    ///
    /// The published model divides by `km + RhoGEF` where `RhoGEF` is the
    /// species' position in the state vector (36), not its concentration.
    /// Runs are only comparable with the reference data if that is kept.
    pub fn gef_activation(&self, x: Concentrations<'_>) -> f64 {
        let rho_gef_ordinal = Species::RhoGEF.index() as f64;
        (self.gef_activation_vmax * x[Species::CaMKIIp] * x[Species::RhoGEF])
            / (self.gef_activation_km + rho_gef_ordinal)
    }
}

impl ReactionModule for RhoKinetics {
    fn pathway(&self) -> Pathway {
        Pathway::RhoMyosin
    }

    fn contribute(&self, _t: f64, x: Concentrations<'_>, out: &mut Contributions) {
        use Species::*;

        let gef_on = self.gef_activation(x);
        let gef_off = michaelis_menten(
            self.gef_inactivation_vmax,
            x[PP1act],
            x[RhoGEFact],
            self.gef_inactivation_km,
        );
        let loading =
            michaelis_menten(self.rho_loading_vmax, x[RhoGEFact], x[RhoGDP], self.rho_loading_km);
        let hydrolysis = michaelis_menten(
            self.rho_hydrolysis_vmax,
            x[GAPact],
            x[RhoGTP],
            self.rho_hydrolysis_km,
        );
        let rock = self.rock_on * x[RhoGTP] * x[ROCK] - self.rock_off * x[ROCKact];
        let myoppase_on = self.myoppase_basal_activation * x[MyoPpase]
            + michaelis_menten(
                self.myoppase_autoactivation_vmax,
                x[MyoPpaseact],
                x[MyoPpase],
                self.myoppase_autoactivation_km,
            );
        let myoppase_off = michaelis_menten(
            self.myoppase_inhibition_vmax,
            x[ROCKact],
            x[MyoPpaseact],
            self.myoppase_inhibition_km,
        );
        let mlc_phos = self.mlc_basal_phos * x[MLC]
            + michaelis_menten(self.mlc_rock_phos_vmax, x[ROCKact], x[MLC], self.mlc_rock_phos_km);
        let mlc_dephos =
            michaelis_menten(self.mlc_dephos_vmax, x[MyoPpaseact], x[MLCact], self.mlc_dephos_km);

        out.add(RhoGEF, -gef_on + gef_off);
        out.add(RhoGEFact, gef_on - gef_off);
        out.add(RhoGDP, -loading + hydrolysis);
        out.add(RhoGTP, loading - hydrolysis - rock);
        out.add(ROCK, -rock);
        out.add(ROCKact, rock);
        out.add(MyoPpase, -myoppase_on + myoppase_off);
        out.add(MyoPpaseact, myoppase_on - myoppase_off);
        out.add(MLC, -mlc_phos + mlc_dephos);
        out.add(MLCact, mlc_phos - mlc_dephos);
    }
}

#[cfg(test)]
mod tests {
    use super::RhoKinetics;
    use crate::kinetics::{Contributions, ReactionModule};
    use crate::species::{initial_conditions, Concentrations, Species};
    use approx::assert_abs_diff_eq;

    #[test]
    fn gef_activation_uses_the_ordinal_denominator() {
        let mut x = initial_conditions();
        x[Species::CaMKIIp] = 2.0;
        x[Species::RhoGEF] = 0.5;
        let rho = RhoKinetics::default();
        let rate = rho.gef_activation(Concentrations::new(x.as_slice()));
        // 0.01 * 2 * 0.5 / (1 + 36)
        assert_abs_diff_eq!(rate, 0.01 / 37.0, epsilon = 1e-15);

        // changing the RhoGEF concentration does not move the denominator
        x[Species::RhoGEF] = 1.0;
        let doubled = rho.gef_activation(Concentrations::new(x.as_slice()));
        assert_abs_diff_eq!(doubled, 2.0 * rate, epsilon = 1e-15);
    }

    #[test]
    fn rho_and_myosin_cycles_are_closed() {
        let mut x = initial_conditions();
        x[Species::CaMKIIp] = 1.0;
        x[Species::PP1act] = 0.2;
        x[Species::RhoGEFact] = 0.3;
        x[Species::RhoGTP] = 0.4;
        x[Species::GAPact] = 0.05;
        x[Species::ROCKact] = 0.2;
        x[Species::MLCact] = 1.0;
        let mut out = Contributions::default();
        RhoKinetics::default().contribute(0.0, Concentrations::new(x.as_slice()), &mut out);
        let d = |s: Species| out.total(s);
        use Species::*;

        assert_eq!(out.len(), 10);
        assert_abs_diff_eq!(d(RhoGEF) + d(RhoGEFact), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d(RhoGDP) + d(RhoGTP) + d(ROCKact), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d(ROCK) + d(ROCKact), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d(MyoPpase) + d(MyoPpaseact), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d(MLC) + d(MLCact), 0.0, epsilon = 1e-12);
    }
}
