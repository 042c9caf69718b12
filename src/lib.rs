//! Solubility Trainer
//!
//! An interactive terminal trainer for the qualitative water-solubility rules
//! of ionic compounds. A fixed registry of 8 cations and 5 anions is paired
//! against an ordered rule chain to decide whether each of the 40 possible
//! compounds dissolves in water.
//!
//! # Quick Start
//!
//! ```rust
//! use solubility_trainer::core::{Anion, Cation, is_soluble};
//!
//! // Sodium salts dissolve even though carbonates generally do not
//! assert!(is_soluble(Cation::Sodium, Anion::Carbonate));
//!
//! // Lead chloride is one of the classic insoluble exceptions
//! assert!(!is_soluble(Cation::Lead, Anion::Chloride));
//! ```

// Core domain types and the rule engine
pub mod core;

// Fixed ion registry
pub mod registry;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
