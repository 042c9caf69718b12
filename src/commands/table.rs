//! Solubility table command
//!
//! Renders the full 8×5 grid of compound formulas as a study aid, green for
//! soluble and red for insoluble.

use crate::core::{Ion, is_soluble};
use crate::output::formatters::compound_formula;
use crate::registry::{ANIONS, CATIONS};
use colored::Colorize;

const CELL_WIDTH: usize = 12;
const ROW_LABEL_WIDTH: usize = 11;

/// Print the full solubility grid
///
/// Cells are padded before coloring so the ANSI codes do not break the
/// column alignment.
pub fn run_table() {
    print!("{:<ROW_LABEL_WIDTH$}", "");
    for anion in &ANIONS {
        print!("{}", format!("{:<CELL_WIDTH$}", anion.name()).bold());
    }
    println!();

    for &cation in &CATIONS {
        print!("{}", format!("{:<ROW_LABEL_WIDTH$}", cation.name()).bold());
        for &anion in &ANIONS {
            let cell = format!("{:<CELL_WIDTH$}", compound_formula(cation, anion));
            if is_soluble(cation, anion) {
                print!("{}", cell.green());
            } else {
                print!("{}", cell.red());
            }
        }
        println!();
    }

    println!("\n{} soluble   {} insoluble", "■".green(), "■".red());
}
