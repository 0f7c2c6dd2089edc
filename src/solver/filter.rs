//! Candidate filtering against accumulated feedback
//!
//! The candidate set is always derived fresh from the full corpus and the
//! full guess history. Nothing is mutated incrementally between rounds.

use crate::core::{GuessRecord, Word};

/// Filter corpus words to those consistent with the guess history
///
/// A word survives only if every record in the history admits it. Survivors
/// keep their relative corpus order (stable filter, never resorted), and the
/// same inputs always produce the same output.
///
/// # Examples
/// ```
/// use wordle_nodal::core::{Feedback, GuessRecord, Word};
/// use wordle_nodal::solver::filter_candidates;
/// use wordle_nodal::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["apple", "angle", "ankle", "ample", "amble"]);
/// let history = vec![GuessRecord::new(
///     Word::new("maple").unwrap(),
///     Feedback::parse("BYBGG").unwrap(),
/// )];
///
/// let candidates = filter_candidates(&corpus, &history);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["angle", "ankle"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(corpus: &'a [Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    corpus
        .iter()
        .filter(|candidate| history.iter().all(|record| record.admits(candidate)))
        .collect()
}
