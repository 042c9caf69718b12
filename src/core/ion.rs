//! Ion representation
//!
//! Cations and anions are fieldless enums, so two ions compare equal exactly
//! when they are the same chemical species. Name, symbol, and charge are
//! looked up per variant rather than stored, keeping every ion `Copy`.

use std::fmt;

/// Whether an ion carries a positive or negative charge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Cation,
    Anion,
}

/// Common interface over both ion families
pub trait Ion {
    /// English name, unique within the ion's polarity group
    fn name(&self) -> &'static str;

    /// Chemical symbol used in formulas, e.g. `NH4`
    fn symbol(&self) -> &'static str;

    /// Signed ionic charge; positive for cations, negative for anions
    fn charge(&self) -> i8;

    /// Polarity derived from the charge sign
    fn polarity(&self) -> Polarity {
        if self.charge() > 0 {
            Polarity::Cation
        } else {
            Polarity::Anion
        }
    }

    /// Whether the ion consists of more than one atom
    ///
    /// Element symbols start with an uppercase letter, so a second uppercase
    /// letter in the symbol means a second atom. Polyatomic symbols get
    /// parenthesised in formulas when their count exceeds one.
    fn is_polyatomic(&self) -> bool {
        self.symbol()
            .chars()
            .filter(char::is_ascii_uppercase)
            .count()
            > 1
    }
}

/// A positively charged ion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cation {
    Sodium,
    Potassium,
    Calcium,
    Magnesium,
    Barium,
    Silver,
    Ammonium,
    Lead,
}

impl Ion for Cation {
    fn name(&self) -> &'static str {
        match self {
            Self::Sodium => "Sodium",
            Self::Potassium => "Potassium",
            Self::Calcium => "Calcium",
            Self::Magnesium => "Magnesium",
            Self::Barium => "Barium",
            Self::Silver => "Silver",
            Self::Ammonium => "Ammonium",
            Self::Lead => "Lead",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Sodium => "Na",
            Self::Potassium => "K",
            Self::Calcium => "Ca",
            Self::Magnesium => "Mg",
            Self::Barium => "Ba",
            Self::Silver => "Ag",
            Self::Ammonium => "NH4",
            Self::Lead => "Pb",
        }
    }

    fn charge(&self) -> i8 {
        match self {
            Self::Sodium | Self::Potassium | Self::Silver | Self::Ammonium => 1,
            Self::Calcium | Self::Magnesium | Self::Barium | Self::Lead => 2,
        }
    }
}

impl fmt::Display for Cation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A negatively charged ion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anion {
    Nitrate,
    Sulfate,
    Chloride,
    Carbonate,
    Hydroxide,
}

impl Ion for Anion {
    fn name(&self) -> &'static str {
        match self {
            Self::Nitrate => "Nitrate",
            Self::Sulfate => "Sulfate",
            Self::Chloride => "Chloride",
            Self::Carbonate => "Carbonate",
            Self::Hydroxide => "Hydroxide",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Nitrate => "NO3",
            Self::Sulfate => "SO4",
            Self::Chloride => "Cl",
            Self::Carbonate => "CO3",
            Self::Hydroxide => "OH",
        }
    }

    fn charge(&self) -> i8 {
        match self {
            Self::Nitrate | Self::Chloride | Self::Hydroxide => -1,
            Self::Sulfate | Self::Carbonate => -2,
        }
    }
}

impl fmt::Display for Anion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cation_polarity_matches_charge_sign() {
        let cations = [
            Cation::Sodium,
            Cation::Potassium,
            Cation::Calcium,
            Cation::Magnesium,
            Cation::Barium,
            Cation::Silver,
            Cation::Ammonium,
            Cation::Lead,
        ];
        for cation in cations {
            assert!(cation.charge() > 0, "{} has non-positive charge", cation.name());
            assert_eq!(cation.polarity(), Polarity::Cation);
        }
    }

    #[test]
    fn anion_polarity_matches_charge_sign() {
        let anions = [
            Anion::Nitrate,
            Anion::Sulfate,
            Anion::Chloride,
            Anion::Carbonate,
            Anion::Hydroxide,
        ];
        for anion in anions {
            assert!(anion.charge() < 0, "{} has non-negative charge", anion.name());
            assert_eq!(anion.polarity(), Polarity::Anion);
        }
    }

    #[test]
    fn identity_equality() {
        assert_eq!(Cation::Sodium, Cation::Sodium);
        assert_ne!(Cation::Sodium, Cation::Potassium);
        // Same charge and similar role, still distinct ions
        assert_ne!(Cation::Silver, Cation::Ammonium);
    }

    #[test]
    fn polyatomic_detection() {
        assert!(Cation::Ammonium.is_polyatomic());
        assert!(!Cation::Sodium.is_polyatomic());
        assert!(!Cation::Lead.is_polyatomic());

        assert!(Anion::Nitrate.is_polyatomic());
        assert!(Anion::Sulfate.is_polyatomic());
        assert!(Anion::Carbonate.is_polyatomic());
        assert!(Anion::Hydroxide.is_polyatomic());
        assert!(!Anion::Chloride.is_polyatomic());
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(format!("{}", Cation::Lead), "Pb");
        assert_eq!(format!("{}", Anion::Hydroxide), "OH");
    }
}
