//! Interactive session state machine
//!
//! A session owns the guess history and walks a fixed loop: recommend a
//! guess, take feedback, narrow the candidates, repeat. The seed guess opens
//! every game, and an exploratory probe overrides the ranking while too few
//! letters are confirmed.

use std::collections::BTreeSet;

use crate::core::{Feedback, FeedbackError, FeedbackSymbol, GuessRecord, Word};
use crate::solver::filter::filter_candidates;
use crate::solver::nodal::{recommend, Recommendation};

/// Opening guess when none is configured
pub const DEFAULT_SEED_GUESS: &str = "sauce";

/// Exploratory probe used while too few letters are confirmed
pub const DEFAULT_PROBE_WORD: &str = "broil";

/// Default length of the displayed recommendation list
pub const DEFAULT_TOP_N: usize = 10;

/// Confirmed-letter count below which the probe takes over
pub const EXPLORATION_THRESHOLD: usize = 2;

const QUIT_TOKENS: [&str; 3] = ["quit", "q", "exit"];

/// Tunable knobs for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    seed_guess: Word,
    probe_word: Word,
    top_n: usize,
}

impl SessionConfig {
    /// Create a config; `top_n` is clamped to at least one entry
    #[must_use]
    pub fn new(seed_guess: Word, probe_word: Word, top_n: usize) -> Self {
        Self {
            seed_guess,
            probe_word,
            top_n: top_n.max(1),
        }
    }

    /// The guess every session opens with
    #[must_use]
    pub const fn seed_guess(&self) -> &Word {
        &self.seed_guess
    }

    /// The exploratory probe word
    #[must_use]
    pub const fn probe_word(&self) -> &Word {
        &self.probe_word
    }

    /// How many ranked words to surface per round
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(
            Word::new(DEFAULT_SEED_GUESS).expect("default seed guess is a valid word"),
            Word::new(DEFAULT_PROBE_WORD).expect("default probe word is a valid word"),
            DEFAULT_TOP_N,
        )
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for feedback on the current recommendation
    AwaitingFeedback,
    /// Feedback was all green
    Solved,
    /// The user quit
    Aborted,
    /// The history eliminated every corpus word
    Exhausted,
}

/// What a round produced when the session advanced
#[derive(Debug, Clone)]
pub struct RoundReport<'a> {
    /// Corpus words still consistent with the history
    pub candidates: Vec<&'a Word>,
    /// Ranked guesses scored against the candidates
    pub recommendation: Recommendation<'a>,
    /// Letters confirmed green or yellow so far, in alphabetical order
    pub known_letters: BTreeSet<u8>,
    /// Whether the exploratory probe replaced the ranked pick
    pub probe_override: bool,
    /// The guess to propose next round
    pub next_guess: Word,
}

/// Outcome of submitting one line of input
#[derive(Debug, Clone)]
pub enum Turn<'a> {
    /// Input was not usable feedback; the round does not advance
    Rejected(FeedbackError),
    /// The user asked to stop
    Aborted,
    /// All-green feedback confirmed this word
    Solved(Word),
    /// No corpus word is consistent with the history
    Exhausted,
    /// The session advanced to a new round
    Advanced(RoundReport<'a>),
}

/// Interactive solving session over a fixed corpus
///
/// The candidate set is recomputed from the full corpus and complete history
/// on every round rather than narrowed in place.
#[derive(Debug)]
pub struct Session<'a> {
    corpus: &'a [Word],
    config: SessionConfig,
    history: Vec<GuessRecord>,
    state: SessionState,
    next_guess: Word,
    round: u32,
}

impl<'a> Session<'a> {
    /// Start a session; the first recommendation is the seed guess
    #[must_use]
    pub fn new(corpus: &'a [Word], config: SessionConfig) -> Self {
        debug_assert!(!corpus.is_empty(), "session requires a non-empty corpus");
        let next_guess = config.seed_guess().clone();
        Self {
            corpus,
            config,
            history: Vec::new(),
            state: SessionState::AwaitingFeedback,
            next_guess,
            round: 0,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Number of accepted feedback rounds so far
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The guess currently awaiting feedback
    #[must_use]
    pub const fn current_guess(&self) -> &Word {
        &self.next_guess
    }

    /// Accepted guess/feedback records, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Whether the session still wants input
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::AwaitingFeedback
    }

    /// Stop the session without feedback, as on end of input
    pub fn abort(&mut self) {
        self.state = SessionState::Aborted;
    }

    /// Feed one line of user input into the session
    ///
    /// Quit tokens (`quit`, `q`, `exit`, any case) abort. Anything else is
    /// parsed as feedback for the current guess; rejected input leaves the
    /// round counter and history untouched.
    pub fn submit(&mut self, input: &str) -> Turn<'a> {
        debug_assert!(self.is_active(), "submit on a finished session");

        let trimmed = input.trim();
        if QUIT_TOKENS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
        {
            self.state = SessionState::Aborted;
            return Turn::Aborted;
        }

        match Feedback::parse(trimmed) {
            Ok(feedback) => self.advance(feedback),
            Err(error) => Turn::Rejected(error),
        }
    }

    /// Record accepted feedback and work out the next recommendation
    fn advance(&mut self, feedback: Feedback) -> Turn<'a> {
        let guess = self.next_guess.clone();
        self.history.push(GuessRecord::new(guess.clone(), feedback));
        self.round += 1;

        if feedback.is_all_green() {
            self.state = SessionState::Solved;
            return Turn::Solved(guess);
        }

        let candidates = filter_candidates(self.corpus, &self.history);
        if candidates.is_empty() {
            self.state = SessionState::Exhausted;
            return Turn::Exhausted;
        }

        let recommendation = recommend(&candidates, self.corpus, self.config.top_n());
        let known_letters = confirmed_letters(&self.history);

        let probe_override = known_letters.len() < EXPLORATION_THRESHOLD
            && self.corpus.iter().any(|word| word == self.config.probe_word());

        let next_guess = if probe_override {
            self.config.probe_word().clone()
        } else {
            match recommendation.best() {
                Some(best) => best.clone(),
                None => {
                    self.state = SessionState::Exhausted;
                    return Turn::Exhausted;
                }
            }
        };
        self.next_guess = next_guess.clone();

        Turn::Advanced(RoundReport {
            candidates,
            recommendation,
            known_letters,
            probe_override,
            next_guess,
        })
    }
}

/// Letters marked green or yellow anywhere in the history
#[must_use]
pub fn confirmed_letters(history: &[GuessRecord]) -> BTreeSet<u8> {
    let mut letters = BTreeSet::new();
    for record in history {
        for (&symbol, &letter) in record
            .feedback()
            .symbols()
            .iter()
            .zip(record.guess().chars())
        {
            if matches!(symbol, FeedbackSymbol::Green | FeedbackSymbol::Yellow) {
                letters.insert(letter);
            }
        }
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn config_with_seed(seed: &str) -> SessionConfig {
        SessionConfig::new(
            Word::new(seed).unwrap(),
            Word::new(DEFAULT_PROBE_WORD).unwrap(),
            DEFAULT_TOP_N,
        )
    }

    #[test]
    fn new_session_recommends_the_seed_guess() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let session = Session::new(&corpus, SessionConfig::default());

        assert_eq!(session.current_guess().text(), "sauce");
        assert_eq!(session.round(), 0);
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
        assert!(session.is_active());
        assert!(session.history().is_empty());
    }

    #[test]
    fn all_green_feedback_solves_immediately() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        let turn = session.submit("GGGGG");
        match turn {
            Turn::Solved(word) => assert_eq!(word.text(), "sauce"),
            other => panic!("expected Solved, got {other:?}"),
        }
        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.round(), 1);
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_active());
    }

    #[test]
    fn mixed_case_and_dot_feedback_advances_the_round() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        // sauce with B Y G B B keeps gouda (a present elsewhere, u fixed)
        // and eliminates mount (no a).
        let turn = session.submit("bYgB.");
        match turn {
            Turn::Advanced(report) => {
                let texts: Vec<&str> =
                    report.candidates.iter().map(|w| w.text()).collect();
                assert_eq!(texts, ["gouda"]);
                assert_eq!(
                    report.known_letters,
                    BTreeSet::from([b'a', b'u'])
                );
                assert!(!report.probe_override);
            }
            other => panic!("expected Advanced, got {other:?}"),
        }
        assert_eq!(session.round(), 1);
        assert!(session.is_active());
    }

    #[test]
    fn short_feedback_is_rejected_without_advancing() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        let turn = session.submit("GYB");
        match turn {
            Turn::Rejected(FeedbackError::InvalidLength(3)) => {}
            other => panic!("expected Rejected(InvalidLength), got {other:?}"),
        }
        assert_eq!(session.round(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.current_guess().text(), "sauce");
        assert!(session.is_active());
    }

    #[test]
    fn empty_and_whitespace_input_are_rejected() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        assert!(matches!(
            session.submit(""),
            Turn::Rejected(FeedbackError::Empty)
        ));
        assert!(matches!(
            session.submit("   "),
            Turn::Rejected(FeedbackError::Empty)
        ));
        assert_eq!(session.round(), 0);
    }

    #[test]
    fn quit_tokens_abort_in_any_case() {
        for token in ["quit", "Q", "EXIT", "  qUiT  "] {
            let corpus = words_from_slice(&["gouda", "mount"]);
            let mut session = Session::new(&corpus, SessionConfig::default());

            assert!(matches!(session.submit(token), Turn::Aborted));
            assert_eq!(session.state(), SessionState::Aborted);
            assert!(!session.is_active());
        }
    }

    #[test]
    fn contradictory_feedback_exhausts_the_session() {
        // Graying l and e eliminates every word in this corpus.
        let corpus = words_from_slice(&["apple", "angle", "ankle", "ample", "amble"]);
        let mut session = Session::new(&corpus, config_with_seed("apple"));

        assert!(matches!(session.submit("GBBBB"), Turn::Exhausted));
        assert_eq!(session.state(), SessionState::Exhausted);
        assert_eq!(session.round(), 1);
        assert!(!session.is_active());
    }

    #[test]
    fn probe_overrides_while_letters_are_scarce() {
        // No word here shares a letter with sauce, so all-gray feedback
        // keeps them all and confirms nothing.
        let corpus = words_from_slice(&["broil", "thorn", "digit"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        let turn = session.submit("BBBBB");
        match turn {
            Turn::Advanced(report) => {
                assert!(report.probe_override);
                assert!(report.known_letters.is_empty());
                assert_eq!(report.next_guess.text(), "broil");
                // The ranking is still produced alongside the probe.
                assert!(!report.recommendation.ranked().is_empty());
            }
            other => panic!("expected Advanced, got {other:?}"),
        }
        assert_eq!(session.current_guess().text(), "broil");
    }

    #[test]
    fn no_probe_without_the_word_in_the_corpus() {
        let corpus = words_from_slice(&["thorn", "digit"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        let turn = session.submit("BBBBB");
        match turn {
            Turn::Advanced(report) => {
                assert!(!report.probe_override);
                assert_eq!(
                    report.next_guess.text(),
                    report.recommendation.best().unwrap().text()
                );
            }
            other => panic!("expected Advanced, got {other:?}"),
        }
    }

    #[test]
    fn no_probe_once_enough_letters_are_confirmed() {
        let corpus = words_from_slice(&["swamp", "broil"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        // sauce with G Y B B B confirms s and a, meeting the threshold.
        let turn = session.submit("GYBBB");
        match turn {
            Turn::Advanced(report) => {
                assert_eq!(
                    report.known_letters,
                    BTreeSet::from([b'a', b's'])
                );
                assert!(!report.probe_override);
                assert_eq!(report.next_guess.text(), "swamp");
            }
            other => panic!("expected Advanced, got {other:?}"),
        }
    }

    #[test]
    fn round_counter_skips_rejected_input() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        assert!(matches!(session.submit("XXXXX"), Turn::Rejected(_)));
        assert_eq!(session.round(), 0);

        assert!(matches!(session.submit("BYGBB"), Turn::Advanced(_)));
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn abort_marks_the_session_inactive() {
        let corpus = words_from_slice(&["gouda", "mount"]);
        let mut session = Session::new(&corpus, SessionConfig::default());

        session.abort();
        assert_eq!(session.state(), SessionState::Aborted);
        assert!(!session.is_active());
    }

    #[test]
    fn config_clamps_top_n_to_one() {
        let config = SessionConfig::new(
            Word::new("sauce").unwrap(),
            Word::new("broil").unwrap(),
            0,
        );
        assert_eq!(config.top_n(), 1);
    }

    #[test]
    fn confirmed_letters_accumulate_over_history() {
        let history = vec![
            GuessRecord::new(
                Word::new("sauce").unwrap(),
                Feedback::parse("BYGBB").unwrap(),
            ),
            GuessRecord::new(
                Word::new("gouda").unwrap(),
                Feedback::parse("GBBBB").unwrap(),
            ),
        ];

        assert_eq!(
            confirmed_letters(&history),
            BTreeSet::from([b'a', b'g', b'u'])
        );
    }

    #[test]
    fn confirmed_letters_ignore_gray_positions() {
        let history = vec![GuessRecord::new(
            Word::new("sauce").unwrap(),
            Feedback::parse("BBBBB").unwrap(),
        )];

        assert!(confirmed_letters(&history).is_empty());
    }
}
