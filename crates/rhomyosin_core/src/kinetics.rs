//! Reaction kinetics of the CaMKII/actin/Rho-myosin network.
//!
//! Each pathway module turns the current concentrations into a sparse list of
//! derivative contributions. [`RhoMyosinNetwork`] composes them in pathway
//! order by summing contributions into a zeroed derivative vector, so a
//! species touched by several pathways (`Factin`, `Gactin`, `Arp23act`)
//! accumulates every term instead of keeping the last write.

pub mod actin;
pub mod arp23;
pub mod camkii;
pub mod cofilin;
pub mod rho;

pub use actin::ActinKinetics;
pub use arp23::Arp23Kinetics;
pub use camkii::CamkiiKinetics;
pub use cofilin::CofilinKinetics;
pub use rho::RhoKinetics;

use crate::species::{Concentrations, Pathway, Species, SPECIES_COUNT};
use crate::traits::DynamicalSystem;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Derivative terms produced by one pathway for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct Contributions {
    entries: Vec<(Species, f64)>,
}

impl Contributions {
    /// Records `rate` as a term of d[species]/dt.
    pub fn add(&mut self, species: Species, rate: f64) {
        self.entries.push((species, rate));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Species, f64)> {
        self.entries.iter()
    }

    /// Sum of all terms recorded for `species`.
    pub fn total(&self, species: Species) -> f64 {
        self.entries
            .iter()
            .filter(|(s, _)| *s == species)
            .map(|(_, rate)| rate)
            .sum()
    }

    /// Adds every term into `dxdt`; entries are never overwritten.
    pub fn merge_into(&self, dxdt: &mut [f64]) {
        for &(species, rate) in &self.entries {
            dxdt[species.index()] += rate;
        }
    }
}

/// One sub-network of the model.
pub trait ReactionModule {
    fn pathway(&self) -> Pathway;

    /// Pushes this pathway's derivative terms for state `x` at time `t`.
    fn contribute(&self, t: f64, x: Concentrations<'_>, out: &mut Contributions);
}

/// `(vmax * enzyme * substrate) / (km + substrate)`
#[inline]
pub(crate) fn michaelis_menten(vmax: f64, enzyme: f64, substrate: f64, km: f64) -> f64 {
    (vmax * enzyme * substrate) / (km + substrate)
}

/// `(vmax * activator^n * target) / (k_half^n + activator^n)`
#[inline]
pub(crate) fn hill_activation(vmax: f64, activator: f64, n: f64, k_half: f64, target: f64) -> f64 {
    (vmax * activator.powf(n) * target) / (k_half.powf(n) + activator.powf(n))
}

/// The full 46-species model: all five pathway parameter tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RhoMyosinNetwork {
    pub camkii: CamkiiKinetics,
    pub arp23: Arp23Kinetics,
    pub cofilin: CofilinKinetics,
    pub actin: ActinKinetics,
    pub rho: RhoKinetics,
    // Interior mutability for the contribution buffer to avoid allocation in apply.
    #[serde(skip)]
    scratch: RefCell<Contributions>,
}

impl RhoMyosinNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(&self, pathway: Pathway) -> &dyn ReactionModule {
        match pathway {
            Pathway::Camkii => &self.camkii,
            Pathway::Arp23 => &self.arp23,
            Pathway::Cofilin => &self.cofilin,
            Pathway::Actin => &self.actin,
            Pathway::RhoMyosin => &self.rho,
        }
    }

    /// Evaluates every pathway from the innermost up to and including
    /// `outermost`, writing the summed derivative into `dxdt`.
    ///
    /// Species owned by pathways outside the evaluated range get zero.
    pub fn evaluate_through(&self, outermost: Pathway, t: f64, x: &[f64], dxdt: &mut [f64]) {
        let concentrations = Concentrations::new(x);
        dxdt.fill(0.0);

        let mut scratch = self.scratch.borrow_mut();
        for pathway in Pathway::ALL.into_iter().take_while(|p| *p <= outermost) {
            scratch.clear();
            self.module(pathway).contribute(t, concentrations, &mut scratch);
            scratch.merge_into(dxdt);
        }
    }
}

impl DynamicalSystem<f64> for RhoMyosinNetwork {
    fn dimension(&self) -> usize {
        SPECIES_COUNT
    }

    fn apply(&self, t: f64, x: &[f64], out: &mut [f64]) {
        self.evaluate_through(Pathway::RhoMyosin, t, x, out);
    }
}
