//! Cdc42 GTPase cycle and WASP-mediated Arp2/3 activation.

use super::{michaelis_menten, Contributions, ReactionModule};
use crate::species::{Concentrations, Pathway, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arp23Kinetics {
    pub gef_activation_vmax: f64,
    pub gef_inactivation_vmax: f64,
    pub gef_km: f64,
    pub cdc42_loading_vmax: f64,
    pub cdc42_hydrolysis_vmax: f64,
    pub cdc42_km: f64,
    pub gap_activation_vmax: f64,
    pub gap_inactivation_vmax: f64,
    pub gap_km: f64,
    pub wasp_on: f64,
    pub wasp_off: f64,
    pub arp23_on: f64,
    /// Reverse Arp2/3 activation; zero in the published model.
    pub arp23_off: f64,
}

impl Default for Arp23Kinetics {
    fn default() -> Self {
        Self {
            gef_activation_vmax: 0.01,
            gef_inactivation_vmax: 0.01,
            gef_km: 1.0,
            cdc42_loading_vmax: 0.75,
            cdc42_hydrolysis_vmax: 0.1,
            cdc42_km: 1.0,
            gap_activation_vmax: 0.01,
            gap_inactivation_vmax: 0.01,
            gap_km: 1.0,
            wasp_on: 0.02,
            wasp_off: 0.001,
            arp23_on: 0.1,
            arp23_off: 0.0,
        }
    }
}

impl ReactionModule for Arp23Kinetics {
    fn pathway(&self) -> Pathway {
        Pathway::Arp23
    }

    fn contribute(&self, _t: f64, x: Concentrations<'_>, out: &mut Contributions) {
        use Species::*;

        let gef_on =
            michaelis_menten(self.gef_activation_vmax, x[CaMKIIp], x[Cdc42GEF], self.gef_km);
        let gef_off =
            michaelis_menten(self.gef_inactivation_vmax, x[PP1act], x[Cdc42GEFact], self.gef_km);
        let loading =
            michaelis_menten(self.cdc42_loading_vmax, x[Cdc42GEFact], x[Cdc42GDP], self.cdc42_km);
        let hydrolysis =
            michaelis_menten(self.cdc42_hydrolysis_vmax, x[GAPact], x[Cdc42GTP], self.cdc42_km);
        let gap_on = michaelis_menten(self.gap_activation_vmax, x[CaMKIIp], x[GAP], self.gap_km);
        let gap_off =
            michaelis_menten(self.gap_inactivation_vmax, x[PP1act], x[GAPact], self.gap_km);
        let wasp = self.wasp_on * x[Cdc42GTP] * x[WASP] - self.wasp_off * x[WASPact];
        let arp23 = self.arp23_on * x[Arp23] * x[WASPact] - self.arp23_off * x[Arp23act];

        out.add(Cdc42GEF, -gef_on + gef_off);
        out.add(Cdc42GEFact, gef_on - gef_off);
        out.add(Cdc42GDP, -loading + hydrolysis);
        out.add(Cdc42GTP, loading - hydrolysis - wasp);
        out.add(GAP, -gap_on + gap_off);
        out.add(GAPact, gap_on - gap_off);
        out.add(WASP, -wasp);
        out.add(WASPact, wasp - arp23);
        out.add(Arp23, -arp23);
        out.add(Arp23act, arp23);
    }
}
