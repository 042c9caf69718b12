//! Fixed ion registry
//!
//! The two ion sets are compiled in as ordered const arrays; nothing is ever
//! added or removed at runtime. Lookup is by exact, case-sensitive name.

use crate::core::{Anion, Cation, Ion};
use rand::Rng;

/// All supported cations, in presentation order
pub const CATIONS: [Cation; 8] = [
    Cation::Sodium,
    Cation::Potassium,
    Cation::Calcium,
    Cation::Magnesium,
    Cation::Barium,
    Cation::Silver,
    Cation::Ammonium,
    Cation::Lead,
];

/// All supported anions, in presentation order
pub const ANIONS: [Anion; 5] = [
    Anion::Nitrate,
    Anion::Sulfate,
    Anion::Chloride,
    Anion::Carbonate,
    Anion::Hydroxide,
];

/// Look up a cation by its exact name
#[must_use]
pub fn find_cation(name: &str) -> Option<Cation> {
    CATIONS.into_iter().find(|c| c.name() == name)
}

/// Look up an anion by its exact name
#[must_use]
pub fn find_anion(name: &str) -> Option<Anion> {
    ANIONS.into_iter().find(|a| a.name() == name)
}

/// Draw a cation uniformly at random
pub fn random_cation<G: Rng>(rng: &mut G) -> Cation {
    CATIONS[rng.random_range(0..CATIONS.len())]
}

/// Draw an anion uniformly at random
pub fn random_anion<G: Rng>(rng: &mut G) -> Anion {
    ANIONS[rng.random_range(0..ANIONS.len())]
}
