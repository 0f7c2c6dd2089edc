//! Interactive assistant command
//!
//! Text loop over stdin/stdout: recommend a guess, read feedback, narrow
//! the candidates, repeat until solved, exhausted, or quit.

use crate::core::Word;
use crate::output::display;
use crate::solver::{Session, SessionConfig, Turn};
use std::io::{self, Write};

/// Run the interactive assistant until the session finishes
///
/// # Errors
///
/// Returns an error if reading user input or flushing the prompt fails.
pub fn run_assist(corpus: &[Word], config: SessionConfig) -> Result<(), String> {
    display::print_intro(corpus.len());

    let mut session = Session::new(corpus, config);

    while session.is_active() {
        display::print_round_header(session.round() + 1, session.current_guess());

        let Some(line) = read_feedback_line(session.current_guess())? else {
            // End of input counts as an explicit quit.
            session.abort();
            display::print_aborted();
            break;
        };

        match session.submit(&line) {
            Turn::Rejected(error) => display::print_rejected(&error),
            Turn::Aborted => display::print_aborted(),
            Turn::Solved(word) => display::print_solved(&word),
            Turn::Exhausted => display::print_exhausted(),
            Turn::Advanced(report) => display::print_round_report(&report),
        }
    }

    Ok(())
}

/// Prompt for feedback; `None` means stdin reached end of input
fn read_feedback_line(guess: &Word) -> Result<Option<String>, String> {
    print!(
        "Enter feedback for {} (G/Y/B): ",
        guess.text().to_uppercase()
    );
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input))
}
