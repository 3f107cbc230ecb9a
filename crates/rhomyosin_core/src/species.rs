//! Species identifiers and the fixed-layout state vector.
//!
//! The enumeration order is the column order of the output table and must
//! not change: every kinetics module indexes the state through [`Species`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of species tracked by the network.
pub const SPECIES_COUNT: usize = 46;

/// Sub-networks of the model, in composition order (innermost first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pathway {
    /// Calcium/calmodulin binding and the CaMKII/phosphatase cycle.
    Camkii,
    /// Cdc42/WASP control of Arp2/3 nucleation.
    Arp23,
    /// SSH1/LIMK regulation of cofilin.
    Cofilin,
    /// Actin polymerization and membrane protrusion.
    Actin,
    /// RhoGTPase/ROCK/myosin light chain contractility.
    RhoMyosin,
}

impl Pathway {
    pub const ALL: [Pathway; 5] = [
        Pathway::Camkii,
        Pathway::Arp23,
        Pathway::Cofilin,
        Pathway::Actin,
        Pathway::RhoMyosin,
    ];

    /// Species introduced by this pathway, in enumeration order.
    pub fn species(self) -> &'static [Species] {
        static ORDER: [Species; SPECIES_COUNT] = Species::ALL;
        let (start, end) = match self {
            Pathway::Camkii => (0, 17),
            Pathway::Arp23 => (17, 27),
            Pathway::Cofilin => (27, 33),
            Pathway::Actin => (33, 36),
            Pathway::RhoMyosin => (36, SPECIES_COUNT),
        };
        &ORDER[start..end]
    }
}

macro_rules! species {
    ($($name:ident),+ $(,)?) => {
        /// A tracked molecular species. The discriminant is its state index.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Species {
            $($name),+
        }

        impl Species {
            /// All species in state-vector order.
            pub const ALL: [Species; SPECIES_COUNT] = [$(Species::$name),+];

            /// Column label used in the output table.
            pub fn name(self) -> &'static str {
                match self {
                    $(Species::$name => stringify!($name)),+
                }
            }
        }
    };
}

species!(
    Ca, CaM, CaCaM, Ng, NgCaM, CaMKII, Factin, CaMKIIFactin, Gactin, CaMKIIGactin, CaMKIIp, CaN,
    CaNact, I1, I1act, PP1, PP1act,
    Cdc42GEF, Cdc42GEFact, Cdc42GDP, Cdc42GTP, GAP, GAPact, WASP, WASPact, Arp23, Arp23act,
    SSH1, SSH1act, LIMK, LIMKact, Cofilin, Cofilinact,
    Fnewactin, B, Bp,
    RhoGEF, RhoGEFact, RhoGDP, RhoGTP, ROCK, ROCKact, MyoPpase, MyoPpaseact, MLC, MLCact,
);

impl Species {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The pathway that first assigns this species' derivative.
    pub fn pathway(self) -> Pathway {
        match self.index() {
            0..=16 => Pathway::Camkii,
            17..=26 => Pathway::Arp23,
            27..=32 => Pathway::Cofilin,
            33..=35 => Pathway::Actin,
            _ => Pathway::RhoMyosin,
        }
    }
}

/// Owned concentration vector with one slot per [`Species`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector([f64; SPECIES_COUNT]);

impl StateVector {
    pub fn zeros() -> Self {
        Self([0.0; SPECIES_COUNT])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

}

impl Default for StateVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Index<Species> for StateVector {
    type Output = f64;

    fn index(&self, species: Species) -> &f64 {
        &self.0[species.index()]
    }
}

impl IndexMut<Species> for StateVector {
    fn index_mut(&mut self, species: Species) -> &mut f64 {
        &mut self.0[species.index()]
    }
}

/// Read-only, species-indexed view over a raw state slice.
#[derive(Debug, Clone, Copy)]
pub struct Concentrations<'a> {
    values: &'a [f64],
}

impl<'a> Concentrations<'a> {
    /// Panics if `values` does not hold exactly one entry per species.
    pub fn new(values: &'a [f64]) -> Self {
        assert_eq!(
            values.len(),
            SPECIES_COUNT,
            "state slice must hold {SPECIES_COUNT} species"
        );
        Self { values }
    }
}

impl Index<Species> for Concentrations<'_> {
    type Output = f64;

    #[inline]
    fn index(&self, species: Species) -> &f64 {
        &self.values[species.index()]
    }
}

/// Initial concentrations of the reference run (Table S8); unlisted
/// species start at zero.
pub fn initial_conditions() -> StateVector {
    use Species::*;

    let mut x = StateVector::zeros();
    x[Ca] = 1.0;
    x[CaMKIIFactin] = 10.0;
    x[CaMKIIGactin] = 10.0;
    x[CaN] = 1.0;
    x[CaM] = 10.0;
    x[Ng] = 20.0;
    x[I1] = 1.8;
    x[PP1] = 0.27;
    x[WASP] = 1.0;
    x[Arp23] = 1.0;
    x[Cdc42GDP] = 1.0;
    x[Cdc42GEF] = 0.1;
    x[LIMK] = 2.0;
    x[SSH1] = 2.0;
    x[Cofilin] = 2.0;
    x[Bp] = 1.0;
    x[B] = 30.0;
    x[MyoPpaseact] = 0.1;
    x[RhoGEF] = 0.1;
    x[RhoGDP] = 1.0;
    x[ROCK] = 1.0;
    x[MyoPpase] = 1.1;
    x[MLC] = 5.0;
    x[GAP] = 0.1;
    x
}

#[cfg(test)]
mod tests {
    use super::{initial_conditions, Pathway, Species, SPECIES_COUNT};

    #[test]
    fn discriminants_match_positions() {
        for (i, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.index(), i, "{} out of place", species.name());
        }
    }

    #[test]
    fn pathways_partition_all_species() {
        let mut seen = Vec::new();
        for pathway in Pathway::ALL {
            for &species in pathway.species() {
                assert_eq!(species.pathway(), pathway);
                seen.push(species);
            }
        }
        assert_eq!(seen.len(), SPECIES_COUNT);
        assert_eq!(seen, Species::ALL.to_vec());
    }

    #[test]
    fn pathway_sizes_follow_the_model() {
        let sizes: Vec<usize> = Pathway::ALL.iter().map(|p| p.species().len()).collect();
        assert_eq!(sizes, vec![17, 10, 6, 3, 10]);
        assert_eq!(Pathway::Actin.species(), &[Species::Fnewactin, Species::B, Species::Bp]);
    }

    #[test]
    fn boundary_species_names() {
        assert_eq!(Species::Ca.name(), "Ca");
        assert_eq!(Species::PP1act.name(), "PP1act");
        assert_eq!(Species::Cdc42GEF.index(), 17);
        assert_eq!(Species::RhoGEF.index(), 36);
        assert_eq!(Species::MLCact.index(), SPECIES_COUNT - 1);
    }

    #[test]
    fn initial_conditions_set_listed_species_only() {
        let x = initial_conditions();
        assert_eq!(x[Species::Ng], 20.0);
        assert_eq!(x[Species::B], 30.0);
        assert_eq!(x[Species::MyoPpase], 1.1);
        assert_eq!(x[Species::CaMKII], 0.0);
        assert_eq!(x[Species::Factin], 0.0);
        let nonzero = x.as_slice().iter().filter(|v| **v != 0.0).count();
        assert_eq!(nonzero, 24);
    }
}
