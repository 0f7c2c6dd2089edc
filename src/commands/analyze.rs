//! History analysis command
//!
//! Replays guess/feedback records supplied on the command line and reports
//! the surviving candidates, ranking, and neighbor data without entering
//! the interactive loop.

use std::collections::BTreeSet;

use crate::core::{Feedback, GuessRecord, Word};
use crate::solver::{confirmed_letters, filter_candidates, recommend, Recommendation};

/// Everything the analyze command derives from a replayed history
pub struct HistoryAnalysis<'a> {
    /// The parsed records, in the order given
    pub history: Vec<GuessRecord>,
    /// Corpus words consistent with every record
    pub candidates: Vec<&'a Word>,
    /// Ranked guesses scored against those candidates
    pub recommendation: Recommendation<'a>,
    /// Letters confirmed green or yellow by the history
    pub known_letters: BTreeSet<u8>,
}

/// Parse one `guess:feedback` argument into a record
///
/// # Errors
///
/// Returns a message naming the offending argument when either half fails
/// to parse.
pub fn parse_record(raw: &str) -> Result<GuessRecord, String> {
    let (guess_part, feedback_part) = raw
        .split_once(':')
        .ok_or_else(|| format!("'{raw}' is not a guess:feedback pair"))?;

    let guess =
        Word::new(guess_part.trim()).map_err(|e| format!("bad guess in '{raw}': {e}"))?;
    let feedback = Feedback::parse(feedback_part.trim())
        .map_err(|e| format!("bad feedback in '{raw}': {e}"))?;

    Ok(GuessRecord::new(guess, feedback))
}

/// Filter and rank the corpus against records given on the command line
///
/// # Errors
///
/// Returns an error if any record fails to parse. The corpus itself is
/// assumed already validated by the loader.
pub fn analyze_history<'a>(
    corpus: &'a [Word],
    records: &[String],
    top_n: usize,
) -> Result<HistoryAnalysis<'a>, String> {
    let history: Vec<GuessRecord> = records
        .iter()
        .map(|raw| parse_record(raw))
        .collect::<Result<_, _>>()?;

    let candidates = filter_candidates(corpus, &history);
    let recommendation = recommend(&candidates, corpus, top_n);
    let known_letters = confirmed_letters(&history);

    Ok(HistoryAnalysis {
        history,
        candidates,
        recommendation,
        known_letters,
    })
}
