//! Solubility rule engine
//!
//! A single pure function over the 40 possible (cation, anion) pairs. The
//! rules form a priority-ordered chain where the first match wins; the
//! group-1/ammonium rule must fire before the anion rules so that e.g.
//! sodium carbonate comes out soluble despite carbonate's general rule.

use super::ion::{Anion, Cation};

/// Decide whether the compound formed by `cation` and `anion` dissolves in water
///
/// Total over all pairs and free of side effects; calling it twice with the
/// same pair always yields the same verdict.
#[must_use]
pub fn is_soluble(cation: Cation, anion: Anion) -> bool {
    // Sodium, potassium and ammonium salts are always soluble
    if matches!(cation, Cation::Sodium | Cation::Potassium | Cation::Ammonium) {
        return true;
    }

    // All nitrates are soluble
    if anion == Anion::Nitrate {
        return true;
    }

    // Most chlorides are soluble, except silver and lead chloride
    if anion == Anion::Chloride {
        return !matches!(cation, Cation::Silver | Cation::Lead);
    }

    // Most sulfates are soluble, except lead, barium and calcium sulfate
    if anion == Anion::Sulfate {
        return !matches!(cation, Cation::Lead | Cation::Barium | Cation::Calcium);
    }

    // Carbonates and hydroxides are insoluble (group-1 salts handled above)
    if matches!(anion, Anion::Carbonate | Anion::Hydroxide) {
        return false;
    }

    // No rule matched
    true
}
