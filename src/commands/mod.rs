//! Command implementations

pub mod check;
pub mod menu;
mod prompt;
pub mod quiz;
pub mod table;

pub use check::{CheckOutcome, run_check, run_check_direct};
pub use menu::run_menu;
pub use quiz::{QuizSummary, run_quiz};
pub use table::run_table;
