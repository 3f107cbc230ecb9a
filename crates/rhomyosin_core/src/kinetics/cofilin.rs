//! SSH1 and LIMK control of cofilin activity.

use super::{michaelis_menten, Contributions, ReactionModule};
use crate::species::{Concentrations, Pathway, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CofilinKinetics {
    pub ssh1_activation_vmax: f64,
    pub ssh1_activation_km: f64,
    pub ssh1_inactivation_vmax: f64,
    pub ssh1_inactivation_km: f64,
    /// LIMK phosphorylation by active ROCK.
    pub limk_activation_vmax: f64,
    pub limk_activation_km: f64,
    pub limk_inactivation_vmax: f64,
    pub limk_inactivation_km: f64,
    pub cofilin_activation_vmax: f64,
    pub cofilin_activation_km: f64,
    pub cofilin_inactivation_vmax: f64,
    pub cofilin_inactivation_km: f64,
}

impl Default for CofilinKinetics {
    fn default() -> Self {
        Self {
            ssh1_activation_vmax: 0.34,
            ssh1_activation_km: 4.97,
            ssh1_inactivation_vmax: 127.0,
            ssh1_inactivation_km: 0.34,
            limk_activation_vmax: 0.9,
            limk_activation_km: 0.3,
            limk_inactivation_vmax: 0.34,
            limk_inactivation_km: 4.0,
            cofilin_activation_vmax: 0.34,
            cofilin_activation_km: 4.0,
            cofilin_inactivation_vmax: 0.34,
            cofilin_inactivation_km: 4.0,
        }
    }
}

impl ReactionModule for CofilinKinetics {
    fn pathway(&self) -> Pathway {
        Pathway::Cofilin
    }

    fn contribute(&self, _t: f64, x: Concentrations<'_>, out: &mut Contributions) {
        use Species::*;

        let ssh1_on = michaelis_menten(
            self.ssh1_activation_vmax,
            x[CaNact],
            x[SSH1],
            self.ssh1_activation_km,
        );
        let ssh1_off = michaelis_menten(
            self.ssh1_inactivation_vmax,
            x[CaMKIIp],
            x[SSH1act],
            self.ssh1_inactivation_km,
        );
        let limk_on = michaelis_menten(
            self.limk_activation_vmax,
            x[ROCKact],
            x[LIMK],
            self.limk_activation_km,
        );
        let limk_off = michaelis_menten(
            self.limk_inactivation_vmax,
            x[SSH1act],
            x[LIMKact],
            self.limk_inactivation_km,
        );
        let cofilin_on = michaelis_menten(
            self.cofilin_activation_vmax,
            x[SSH1act],
            x[Cofilin],
            self.cofilin_activation_km,
        );
        let cofilin_off = michaelis_menten(
            self.cofilin_inactivation_vmax,
            x[LIMKact],
            x[Cofilinact],
            self.cofilin_inactivation_km,
        );

        out.add(SSH1, -ssh1_on + ssh1_off);
        out.add(SSH1act, ssh1_on - ssh1_off);
        out.add(LIMK, -limk_on + limk_off);
        out.add(LIMKact, limk_on - limk_off);
        out.add(Cofilin, -cofilin_on + cofilin_off);
        out.add(Cofilinact, cofilin_on - cofilin_off);
    }
}

#[cfg(test)]
mod tests {
    use super::CofilinKinetics;
    use crate::kinetics::{Contributions, ReactionModule};
    use crate::species::{initial_conditions, Concentrations, Species};
    use approx::assert_abs_diff_eq;

    #[test]
    fn active_rock_phosphorylates_limk() {
        let mut x = initial_conditions();
        x[Species::ROCKact] = 0.5;
        let mut out = Contributions::default();
        CofilinKinetics::default().contribute(0.0, Concentrations::new(x.as_slice()), &mut out);

        // 0.9 * 0.5 * 2 / (0.3 + 2)
        let expected = 0.9 * 0.5 * 2.0 / 2.3;
        assert_abs_diff_eq!(out.total(Species::LIMKact), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(out.total(Species::LIMK), -expected, epsilon = 1e-12);
    }

    #[test]
    fn phosphorylation_cycles_are_closed() {
        let mut x = initial_conditions();
        x[Species::CaNact] = 0.7;
        x[Species::CaMKIIp] = 0.2;
        x[Species::SSH1act] = 0.6;
        x[Species::LIMKact] = 0.8;
        x[Species::Cofilinact] = 0.4;
        x[Species::ROCKact] = 0.1;
        let mut out = Contributions::default();
        CofilinKinetics::default().contribute(0.0, Concentrations::new(x.as_slice()), &mut out);
        let d = |s: Species| out.total(s);

        assert_abs_diff_eq!(d(Species::SSH1) + d(Species::SSH1act), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d(Species::LIMK) + d(Species::LIMKact), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d(Species::Cofilin) + d(Species::Cofilinact), 0.0, epsilon = 1e-12);
    }
}
