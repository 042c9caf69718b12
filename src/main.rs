//! Solubility Trainer - CLI
//!
//! Interactive terminal trainer for the water-solubility rules of ionic
//! compounds. Running it with no arguments opens the menu loop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use solubility_trainer::commands::{run_check, run_check_direct, run_menu, run_quiz, run_table};

#[derive(Parser)]
#[command(
    name = "solubility_trainer",
    about = "Quiz yourself on the water solubility of ionic compounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Check one compound
    ///
    /// With both ion names given, prints the verdict and exits; with no
    /// arguments, prompts for the names interactively.
    Check {
        /// Cation name, e.g. "Sodium"
        cation: Option<String>,

        /// Anion name, e.g. "Nitrate"
        anion: Option<String>,
    },

    /// Jump straight into the quiz
    Quiz,

    /// Print the full solubility table
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the menu loop if no command given
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu()?,
        Commands::Check {
            cation: Some(cation),
            anion: Some(anion),
        } => run_check_direct(&cation, &anion)?,
        Commands::Check { cation, anion } => {
            if cation.is_some() || anion.is_some() {
                anyhow::bail!("check needs both ion names, or neither for interactive mode");
            }
            run_check()?;
        }
        Commands::Quiz => run_quiz()?,
        Commands::Table => run_table(),
    }

    Ok(())
}
