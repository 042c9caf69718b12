//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_menu, print_quiz_summary, print_verdict};
pub use formatters::{compound_formula, compound_name};
