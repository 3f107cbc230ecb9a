//! Actin severing, nucleation and polymerization, and membrane protrusion.
//!
//! `Factin`, `Gactin` and `Arp23act` are owned by inner pathways; the terms
//! pushed here are added on top of theirs.

use super::{Contributions, ReactionModule};
use crate::species::{Concentrations, Pathway, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActinKinetics {
    /// Severing: `(sever_rate * cofilin_coupling * Cofilinact^n * Factin) / sever_scale`.
    pub sever_rate: f64,
    pub cofilin_coupling: f64,
    pub cofilin_hill: f64,
    pub sever_scale: f64,
    /// Arp2/3 branched nucleation.
    pub nucleation_vmax: f64,
    pub nucleation_km: f64,
    pub new_filament_maturation: f64,
    pub depolymerization: f64,
    pub capping: f64,
    /// Barbed ends created per severing or nucleation event (unit conversion included).
    pub barbed_end_yield: f64,
    pub barbed_end_decay: f64,
    /// Membrane velocity: `vmb_max * Bp / (Bp + vmb_load * exp(vmb_force / Bp))`.
    pub vmb_max: f64,
    pub vmb_load: f64,
    pub vmb_force: f64,
    /// Rate at which barbed ends become protruding ends, before membrane drag.
    pub protrusion_rate: f64,
    pub protrusion_decay: f64,
}

impl Default for ActinKinetics {
    fn default() -> Self {
        Self {
            sever_rate: 0.1,
            cofilin_coupling: 0.0002,
            cofilin_hill: 4.0,
            sever_scale: 0.0001,
            nucleation_vmax: 15.3,
            nucleation_km: 2.0,
            new_filament_maturation: 0.001,
            depolymerization: 0.1,
            capping: 0.01,
            barbed_end_yield: 106.0,
            barbed_end_decay: 0.04,
            vmb_max: 0.1,
            vmb_load: 10.0,
            vmb_force: 50.0,
            protrusion_rate: 0.1,
            protrusion_decay: 0.04,
        }
    }
}

impl ActinKinetics {
    /// Membrane protrusion velocity for `bp` protruding barbed ends.
    pub fn membrane_velocity(&self, bp: f64) -> f64 {
        self.vmb_max * bp / (bp + self.vmb_load * (self.vmb_force / bp).exp())
    }
}

impl ReactionModule for ActinKinetics {
    fn pathway(&self) -> Pathway {
        Pathway::Actin
    }

    fn contribute(&self, _t: f64, x: Concentrations<'_>, out: &mut Contributions) {
        use Species::*;

        let severing = (self.sever_rate
            * self.cofilin_coupling
            * x[Cofilinact].powf(self.cofilin_hill)
            * x[Factin])
            / self.sever_scale;
        let nucleation = (self.nucleation_vmax * x[Arp23act] * x[Factin] * x[Gactin])
            / (self.nucleation_km + x[Arp23act]);
        let vmb = self.membrane_velocity(x[Bp]);

        let maturation = self.new_filament_maturation * x[Fnewactin];
        let disassembly = severing + self.depolymerization * x[Factin] + self.capping * x[Factin];
        let barbed_ends =
            self.barbed_end_yield * (severing + nucleation) - self.barbed_end_decay * x[B];
        let protrusion = (self.protrusion_rate - vmb) * x[B] - self.protrusion_decay * x[Bp];

        out.add(Fnewactin, -maturation);
        out.add(Factin, maturation - disassembly);
        out.add(Gactin, disassembly - nucleation);
        out.add(Arp23act, -nucleation);
        out.add(B, barbed_ends);
        out.add(Bp, protrusion);
    }
}
