//! Formatting utilities for compounds
//!
//! Builds display names and charge-balanced empirical formulas for any
//! (cation, anion) pair.

use crate::core::{Anion, Cation, Ion};

/// Format the English name of a compound, e.g. "Lead Chloride"
#[must_use]
pub fn compound_name(cation: Cation, anion: Anion) -> String {
    format!("{} {}", cation.name(), anion.name())
}

/// Build the empirical formula of a compound, e.g. `PbCl2` or `Ba(OH)2`
///
/// Ion counts are the opposite ion's charge magnitude divided by the gcd of
/// both magnitudes, so the formula is always charge-neutral and reduced.
#[must_use]
pub fn compound_formula(cation: Cation, anion: Anion) -> String {
    let positive = u32::from(cation.charge().unsigned_abs());
    let negative = u32::from(anion.charge().unsigned_abs());
    let divisor = gcd(positive, negative);

    let cation_count = negative / divisor;
    let anion_count = positive / divisor;

    format!(
        "{}{}",
        formula_unit(cation.symbol(), cation_count, cation.is_polyatomic()),
        formula_unit(anion.symbol(), anion_count, anion.is_polyatomic())
    )
}

/// Render one ion's part of a formula, parenthesising repeated polyatomic symbols
fn formula_unit(symbol: &str, count: u32, polyatomic: bool) -> String {
    if count == 1 {
        symbol.to_string()
    } else if polyatomic {
        format!("({symbol}){count}")
    } else {
        format!("{symbol}{count}")
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
