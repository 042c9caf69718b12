//! Core domain types for solubility checking
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear chemical meaning.

mod ion;
mod rules;

pub use ion::{Anion, Cation, Ion, Polarity};
pub use rules::is_soluble;
