//! Display functions for menus, verdicts, and summaries

use super::formatters::{compound_formula, compound_name};
use crate::commands::QuizSummary;
use crate::core::{Anion, Cation, Ion, is_soluble};
use colored::Colorize;

/// Print the main menu options
pub fn print_menu() {
    println!();
    println!("    1. Check individual compounds");
    println!("    2. Do a quiz");
    println!("    3. Exit");
    println!();
}

/// Print the solubility verdict for one compound
pub fn print_verdict(cation: Cation, anion: Anion, soluble: bool) {
    let compound = format!(
        "{} {} ({})",
        cation.name().green(),
        anion.name().red(),
        compound_formula(cation, anion)
    );

    if soluble {
        println!("{compound} is {} in water.", "soluble".green().bold());
    } else {
        println!("{compound} is {} in water.", "not soluble".red().bold());
    }
}

/// Print the end-of-quiz score and the compounds answered wrong
pub fn print_quiz_summary(summary: &QuizSummary) {
    println!(
        "\nYou scored {} out of {} ({:.0}%)",
        summary.score.to_string().green().bold(),
        summary.rounds,
        summary.accuracy() * 100.0
    );

    let mut missed: Vec<(&(Cation, Anion), &u32)> = summary.missed.iter().collect();
    if missed.is_empty() {
        return;
    }
    missed.sort_by(|a, b| {
        b.1.cmp(a.1)
            .then_with(|| compound_name(a.0.0, a.0.1).cmp(&compound_name(b.0.0, b.0.1)))
    });

    println!("\nCompounds to review:");
    for (&(cation, anion), &count) in missed {
        let verdict = if is_soluble(cation, anion) {
            "soluble".green()
        } else {
            "insoluble".red()
        };
        println!(
            "  {:<10} {:<20} {verdict} (missed {count}x)",
            compound_formula(cation, anion),
            compound_name(cation, anion),
        );
    }
}
