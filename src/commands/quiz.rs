//! Solubility quiz
//!
//! Rounds of: draw a random compound, ask for a yes/no prediction, score it
//! against the rule engine. Every ten rounds the user is asked whether to
//! continue; the score accumulates until the quiz ends.

use super::prompt::{is_no, prompt_line, prompt_yes_no};
use crate::core::{Anion, Cation, Ion, is_soluble};
use crate::output::display::print_quiz_summary;
use crate::output::formatters::compound_formula;
use crate::registry::{random_anion, random_cation};
use colored::Colorize;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::io::{self, BufRead};

/// Rounds between continue prompts
const ROUNDS_PER_BLOCK: u32 = 10;

/// Accumulated quiz state, owned by a single quiz invocation
#[derive(Debug, Default)]
pub struct QuizSummary {
    /// Correct predictions
    pub score: u32,
    /// Rounds played; never resets within a session
    pub rounds: u32,
    /// Miss count per compound, for the end-of-quiz review list
    pub missed: FxHashMap<(Cation, Anion), u32>,
}

impl QuizSummary {
    /// Fraction of rounds answered correctly, 0.0 for an empty session
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.rounds)
        }
    }
}

/// Run the quiz against stdin and print the final summary
///
/// # Errors
///
/// Returns an error only on I/O failure; invalid answers are re-prompted.
pub fn run_quiz() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let summary = run_quiz_with(&mut input, &mut rand::rng())?;
    print_quiz_summary(&summary);
    Ok(())
}

/// Quiz loop over any line-based input and random source
///
/// Returns when the user answers a continue prompt with a no-token. The
/// round counter resets every [`ROUNDS_PER_BLOCK`] rounds; the score and
/// total round count never reset.
///
/// # Errors
///
/// Returns an error only on I/O failure; invalid answers are re-prompted.
pub fn run_quiz_with<R: BufRead, G: Rng>(input: &mut R, rng: &mut G) -> io::Result<QuizSummary> {
    let mut summary = QuizSummary::default();
    let mut rounds_in_block = 0;

    loop {
        let cation = random_cation(rng);
        let anion = random_anion(rng);

        println!(
            "Is {} {} ({}) soluble in water?",
            cation.name().green(),
            anion.name().red(),
            compound_formula(cation, anion)
        );

        let predicted = prompt_yes_no(input, "Enter yes or no")?;
        let soluble = is_soluble(cation, anion);

        summary.rounds += 1;
        if predicted == soluble {
            summary.score += 1;
            println!("{}", "Correct!".green());
        } else {
            println!(
                "{} {} is {} in water.",
                "Incorrect!".red(),
                compound_formula(cation, anion),
                if soluble { "soluble" } else { "not soluble" }
            );
            *summary.missed.entry((cation, anion)).or_insert(0) += 1;
        }

        rounds_in_block += 1;
        if rounds_in_block == ROUNDS_PER_BLOCK {
            let answer = prompt_line(input, "Continue? (y/n)")?;
            if is_no(&answer) {
                break;
            }
            rounds_in_block = 0;
        }
    }

    Ok(summary)
}
