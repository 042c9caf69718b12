//! Line-based input prompting
//!
//! All interactive flows read trimmed lines through these helpers. Invalid
//! input is never an error; callers warn and re-prompt. A closed input
//! stream surfaces as `UnexpectedEof` so retry loops cannot spin forever.

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prompt and read one trimmed line
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed, the read fails, or the
/// input stream is exhausted.
pub(crate) fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }

    Ok(line.trim().to_string())
}

/// Prompt until the user answers yes or no
///
/// Accepts `yes`/`y` and `no`/`n`, case-insensitive; anything else warns
/// and re-prompts.
///
/// # Errors
///
/// Propagates I/O errors from [`prompt_line`].
pub(crate) fn prompt_yes_no<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<bool> {
    loop {
        let answer = prompt_line(input, prompt)?.to_lowercase();
        match answer.as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("{}", "Please answer yes or no.".yellow()),
        }
    }
}

/// Whether an already-read answer is one of the no-tokens
pub(crate) fn is_no(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "no" | "n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_line_trims() {
        let mut input = Cursor::new("  Sodium  \n");
        assert_eq!(prompt_line(&mut input, "Enter cation").unwrap(), "Sodium");
    }

    #[test]
    fn prompt_line_eof() {
        let mut input = Cursor::new("");
        let err = prompt_line(&mut input, "Enter cation").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn yes_no_accepts_both_token_lengths() {
        for token in ["yes\n", "y\n", "YES\n", "Y\n"] {
            let mut input = Cursor::new(token);
            assert!(prompt_yes_no(&mut input, "?").unwrap());
        }
        for token in ["no\n", "n\n", "No\n"] {
            let mut input = Cursor::new(token);
            assert!(!prompt_yes_no(&mut input, "?").unwrap());
        }
    }

    #[test]
    fn yes_no_retries_until_valid() {
        let mut input = Cursor::new("maybe\nperhaps\nyes\n");
        assert!(prompt_yes_no(&mut input, "?").unwrap());
        // All three lines consumed
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn no_tokens() {
        assert!(is_no("n"));
        assert!(is_no("NO"));
        assert!(!is_no("yes"));
        assert!(!is_no("nope"));
        assert!(!is_no(""));
    }
}
