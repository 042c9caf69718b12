//! Single compound check
//!
//! Interactive flow: prompt for a cation name, then an anion name, retrying
//! until each matches the registry, then report one verdict. A direct
//! variant takes both names as CLI arguments instead.

use super::prompt::prompt_line;
use crate::core::{Anion, Cation, Ion, is_soluble};
use crate::output::display::print_verdict;
use crate::registry::{ANIONS, CATIONS, find_anion, find_cation};
use anyhow::bail;
use colored::Colorize;
use std::io::{self, BufRead};

/// Result of one interactive check, including how many prompts it took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub cation: Cation,
    pub anion: Anion,
    pub soluble: bool,
    /// Total prompts answered, 2 when both names were valid first try
    pub attempts: u32,
}

/// Run the interactive check flow against stdin
///
/// # Errors
///
/// Returns an error only on I/O failure; invalid names are re-prompted.
pub fn run_check() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_check_with(&mut input).map(|_| ())
}

/// Interactive check flow over any line-based input
///
/// # Errors
///
/// Returns an error only on I/O failure; invalid names are re-prompted.
pub fn run_check_with<R: BufRead>(input: &mut R) -> io::Result<CheckOutcome> {
    let mut attempts = 0;

    let cation = loop {
        attempts += 1;
        let name = prompt_line(input, "Enter cation")?;
        if let Some(cation) = find_cation(&name) {
            break cation;
        }
        println!("{}", "Invalid cation".yellow());
    };

    let anion = loop {
        attempts += 1;
        let name = prompt_line(input, "Enter anion")?;
        if let Some(anion) = find_anion(&name) {
            break anion;
        }
        println!("{}", "Invalid anion".yellow());
    };

    let soluble = is_soluble(cation, anion);
    print_verdict(cation, anion, soluble);

    Ok(CheckOutcome {
        cation,
        anion,
        soluble,
        attempts,
    })
}

/// Check one compound given both ion names as arguments
///
/// # Errors
///
/// Returns an error naming the valid options when either ion is unknown.
pub fn run_check_direct(cation_name: &str, anion_name: &str) -> anyhow::Result<()> {
    let Some(cation) = find_cation(cation_name) else {
        bail!(
            "unknown cation '{cation_name}' (expected one of: {})",
            ion_names(&CATIONS)
        );
    };
    let Some(anion) = find_anion(anion_name) else {
        bail!(
            "unknown anion '{anion_name}' (expected one of: {})",
            ion_names(&ANIONS)
        );
    };

    print_verdict(cation, anion, is_soluble(cation, anion));
    Ok(())
}

fn ion_names<I: Ion>(ions: &[I]) -> String {
    ions.iter()
        .map(Ion::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn valid_names_resolve_without_retries() {
        let mut input = Cursor::new("Sodium\nNitrate\n");
        let outcome = run_check_with(&mut input).unwrap();

        assert_eq!(outcome.cation, Cation::Sodium);
        assert_eq!(outcome.anion, Anion::Nitrate);
        assert!(outcome.soluble);
        assert_eq!(outcome.attempts, 2);
    }

    #[test]
    fn invalid_names_are_reprompted() {
        // Lowercase and unknown names are rejected until an exact match
        let mut input = Cursor::new("sodium\nSodiom\nLead\nLead\nChloride\n");
        let outcome = run_check_with(&mut input).unwrap();

        assert_eq!(outcome.cation, Cation::Lead);
        assert_eq!(outcome.anion, Anion::Chloride);
        assert!(!outcome.soluble);
        // Two failed cation prompts, one failed anion prompt ("Lead")
        assert_eq!(outcome.attempts, 5);
    }

    #[test]
    fn eof_mid_flow_is_an_error() {
        let mut input = Cursor::new("Sodium\n");
        let err = run_check_with(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn direct_check_rejects_unknown_ions() {
        assert!(run_check_direct("Sodium", "Nitrate").is_ok());

        let err = run_check_direct("Gold", "Nitrate").unwrap_err();
        assert!(err.to_string().contains("unknown cation 'Gold'"));
        assert!(err.to_string().contains("Sodium"));

        let err = run_check_direct("Sodium", "Acetate").unwrap_err();
        assert!(err.to_string().contains("unknown anion 'Acetate'"));
    }
}
