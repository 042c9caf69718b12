//! Main menu loop
//!
//! The session cycles between the menu, the single-check flow, and the quiz
//! until the user picks the exit option. Unrecognized choices warn and
//! redisplay the menu; end of input at the menu exits cleanly.

use super::check::run_check_with;
use super::prompt::prompt_line;
use super::quiz::run_quiz_with;
use crate::output::display::{print_menu, print_quiz_summary};
use colored::Colorize;
use std::io::{self, BufRead};

/// Run the interactive session against stdin
///
/// # Errors
///
/// Returns an error only on I/O failure inside a flow.
pub fn run_menu() -> io::Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Solubility Trainer          ║");
    println!("╚══════════════════════════════════════╝");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu_with(&mut input)
}

/// Menu loop over any line-based input
///
/// # Errors
///
/// Returns an error only on I/O failure inside a flow.
pub fn run_menu_with<R: BufRead>(input: &mut R) -> io::Result<()> {
    loop {
        print_menu();

        let choice = match prompt_line(input, "Enter your choice") {
            Ok(choice) => choice,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e),
        };

        match choice.as_str() {
            "1" => {
                run_check_with(input)?;
            }
            "2" => {
                let summary = run_quiz_with(input, &mut rand::rng())?;
                print_quiz_summary(&summary);
            }
            "3" => return Ok(()),
            _ => println!("{}", "Invalid choice.".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn exit_choice_ends_the_loop() {
        let mut input = Cursor::new("3\n");
        assert!(run_menu_with(&mut input).is_ok());
    }

    #[test]
    fn invalid_choices_redisplay_the_menu() {
        // Garbage tokens loop back to the menu until the exit choice
        let mut input = Cursor::new("0\nquiz\n\n3\n");
        assert!(run_menu_with(&mut input).is_ok());
    }

    #[test]
    fn eof_at_menu_exits_cleanly() {
        let mut input = Cursor::new("x\n");
        assert!(run_menu_with(&mut input).is_ok());
    }

    #[test]
    fn check_flow_returns_to_menu() {
        let mut input = Cursor::new("1\nBarium\nSulfate\n3\n");
        assert!(run_menu_with(&mut input).is_ok());
    }

    #[test]
    fn quiz_flow_returns_to_menu() {
        let script = format!("2\n{}n\n3\n", "yes\n".repeat(10));
        let mut input = Cursor::new(script);
        assert!(run_menu_with(&mut input).is_ok());
    }

    #[test]
    fn eof_inside_a_flow_propagates() {
        let mut input = Cursor::new("1\nBarium\n");
        let err = run_menu_with(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
