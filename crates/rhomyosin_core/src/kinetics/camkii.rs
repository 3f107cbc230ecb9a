//! Fast-equilibrium Ca2+/calmodulin binding and the CaMKII/calcineurin/PP1 cycle.

use super::{hill_activation, michaelis_menten, Contributions, ReactionModule};
use crate::species::{Concentrations, Pathway, Species};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CamkiiKinetics {
    /// Ca3·CaM association constant.
    pub ca_cam_binding: f64,
    /// Calcium ions per calmodulin (Hill exponent and stoichiometry).
    pub ca_per_cam: f64,
    pub ng_cam_binding: f64,
    pub camkii_factin_dissociation: f64,
    pub camkii_gactin_dissociation: f64,
    /// CaMKII autophosphorylation driven by Ca/CaM.
    pub camkii_autophos_vmax: f64,
    pub camkii_autophos_k: f64,
    pub cacam_hill: f64,
    /// CaMKII phosphorylation by already phosphorylated CaMKII.
    pub camkii_transphos_vmax: f64,
    pub camkii_transphos_km: f64,
    pub pp1_camkii_vmax: f64,
    pub pp1_camkii_km: f64,
    pub can_activation_vmax: f64,
    pub can_activation_k: f64,
    pub can_inactivation_vmax: f64,
    pub can_inactivation_km: f64,
    pub i1_activation_vmax: f64,
    pub i1_activation_km: f64,
    pub i1_inactivation_vmax: f64,
    pub i1_inactivation_km: f64,
    pub pp1_activation_by_i1_vmax: f64,
    pub pp1_autoactivation_vmax: f64,
    pub pp1_activation_km: f64,
    pub pp1_inactivation_vmax: f64,
    pub pp1_inactivation_km: f64,
}

impl Default for CamkiiKinetics {
    fn default() -> Self {
        Self {
            ca_cam_binding: 7.75,
            ca_per_cam: 3.0,
            ng_cam_binding: 5.0,
            camkii_factin_dissociation: 4.0,
            camkii_gactin_dissociation: 4.0,
            camkii_autophos_vmax: 120.0,
            camkii_autophos_k: 4.0,
            cacam_hill: 4.0,
            camkii_transphos_vmax: 1.0,
            camkii_transphos_km: 10.0,
            pp1_camkii_vmax: 15.0,
            pp1_camkii_km: 3.0,
            can_activation_vmax: 127.0,
            can_activation_k: 0.34,
            can_inactivation_vmax: 0.34,
            can_inactivation_km: 127.0,
            i1_activation_vmax: 0.034,
            i1_activation_km: 4.97,
            i1_inactivation_vmax: 0.0688,
            i1_inactivation_km: 127.0,
            pp1_activation_by_i1_vmax: 50.0,
            pp1_autoactivation_vmax: 2.0,
            pp1_activation_km: 80.0,
            pp1_inactivation_vmax: 0.07166,
            pp1_inactivation_km: 4.97,
        }
    }
}

impl ReactionModule for CamkiiKinetics {
    fn pathway(&self) -> Pathway {
        Pathway::Camkii
    }

    fn contribute(&self, _t: f64, x: Concentrations<'_>, out: &mut Contributions) {
        use Species::*;

        let ca_cam = self.ca_cam_binding * x[Ca].powf(self.ca_per_cam) - x[CaCaM];
        let ng_cam = self.ng_cam_binding * x[Ng] * x[CaM] - x[NgCaM];
        let factin_binding =
            x[CaMKII] * x[Factin] - self.camkii_factin_dissociation * x[CaMKIIFactin];
        let gactin_binding =
            x[CaMKII] * x[Gactin] - self.camkii_gactin_dissociation * x[CaMKIIGactin];
        let camkii_phos = hill_activation(
            self.camkii_autophos_vmax,
            x[CaCaM],
            self.cacam_hill,
            self.camkii_autophos_k,
            x[CaMKII],
        ) + michaelis_menten(
            self.camkii_transphos_vmax,
            x[CaMKIIp],
            x[CaMKII],
            self.camkii_transphos_km,
        );
        let camkii_dephos =
            michaelis_menten(self.pp1_camkii_vmax, x[PP1act], x[CaMKIIp], self.pp1_camkii_km);
        let can_on = hill_activation(
            self.can_activation_vmax,
            x[CaCaM],
            self.cacam_hill,
            self.can_activation_k,
            x[CaN],
        );
        let can_off = michaelis_menten(
            self.can_inactivation_vmax,
            x[CaMKIIp],
            x[CaN],
            self.can_inactivation_km,
        );
        let i1_on =
            michaelis_menten(self.i1_activation_vmax, x[CaNact], x[I1], self.i1_activation_km);
        let i1_off = michaelis_menten(
            self.i1_inactivation_vmax,
            x[CaMKIIp],
            x[I1act],
            self.i1_inactivation_km,
        );
        let pp1_on = michaelis_menten(
            self.pp1_activation_by_i1_vmax,
            x[I1act],
            x[PP1],
            self.pp1_activation_km,
        ) + michaelis_menten(
            self.pp1_autoactivation_vmax,
            x[PP1act],
            x[PP1],
            self.pp1_activation_km,
        );
        let pp1_off = michaelis_menten(
            self.pp1_inactivation_vmax,
            x[CaMKIIp],
            x[PP1act],
            self.pp1_inactivation_km,
        );

        out.add(Ca, -self.ca_per_cam * ca_cam);
        out.add(CaM, -ca_cam - ng_cam);
        out.add(CaCaM, ca_cam);
        out.add(Ng, -ng_cam);
        out.add(NgCaM, ng_cam);
        out.add(CaMKII, -factin_binding - gactin_binding - camkii_phos + camkii_dephos);
        out.add(Factin, -factin_binding);
        out.add(CaMKIIFactin, factin_binding);
        out.add(Gactin, -gactin_binding);
        out.add(CaMKIIGactin, gactin_binding);
        out.add(CaMKIIp, camkii_phos - camkii_dephos);
        out.add(CaN, -can_on + can_off);
        out.add(CaNact, can_on - can_off);
        out.add(I1, -i1_on + i1_off);
        out.add(I1act, i1_on - i1_off);
        out.add(PP1, -pp1_on + pp1_off);
        out.add(PP1act, pp1_on - pp1_off);
    }
}
