//! Wordle feedback representation and the consistency rule
//!
//! Feedback is five positional symbols:
//! - `Green`: correct letter in the correct position
//! - `Yellow`: letter present elsewhere in the target, not at this position
//! - `Gray`: letter absent from the target
//!
//! The textual protocol accepts `G`/`Y`/`B` case-insensitively, with `.` as
//! an alias for `B` and ASCII spaces ignored.

use super::Word;
use std::fmt;

/// One position of feedback for a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSymbol {
    Green,
    Yellow,
    Gray,
}

impl FeedbackSymbol {
    /// Canonical protocol character for the symbol
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => 'B',
        }
    }
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Empty,
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "feedback is empty"),
            Self::InvalidLength(len) => {
                write!(f, "feedback must be exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "invalid feedback symbol '{ch}', expected G, Y, B or .")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for one guess: five symbols, positionally aligned with the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([FeedbackSymbol; 5]);

impl Feedback {
    /// The solved pattern (all greens)
    pub const ALL_GREEN: Self = Self([FeedbackSymbol::Green; 5]);

    /// Create feedback directly from five symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; 5]) -> Self {
        Self(symbols)
    }

    /// Parse feedback from the textual protocol
    ///
    /// ASCII spaces are stripped first; the remainder must be exactly five
    /// characters from `G`/`Y`/`B` (any case) or `.` (alias for `B`).
    ///
    /// # Errors
    /// Returns `FeedbackError::Empty` if nothing is left after stripping,
    /// `InvalidLength` for any count other than five, and `InvalidSymbol`
    /// for characters outside the protocol alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_nodal::core::{Feedback, FeedbackSymbol};
    ///
    /// let fb = Feedback::parse("bYgB.").unwrap();
    /// assert_eq!(
    ///     fb.symbols(),
    ///     &[
    ///         FeedbackSymbol::Gray,
    ///         FeedbackSymbol::Yellow,
    ///         FeedbackSymbol::Green,
    ///         FeedbackSymbol::Gray,
    ///         FeedbackSymbol::Gray,
    ///     ]
    /// );
    ///
    /// assert!(Feedback::parse("GYB").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, FeedbackError> {
        let stripped: Vec<char> = input.chars().filter(|ch| *ch != ' ').collect();

        if stripped.is_empty() {
            return Err(FeedbackError::Empty);
        }
        if stripped.len() != 5 {
            return Err(FeedbackError::InvalidLength(stripped.len()));
        }

        let mut symbols = [FeedbackSymbol::Gray; 5];
        for (slot, ch) in symbols.iter_mut().zip(stripped) {
            *slot = match ch {
                'G' | 'g' => FeedbackSymbol::Green,
                'Y' | 'y' => FeedbackSymbol::Yellow,
                'B' | 'b' | '.' => FeedbackSymbol::Gray,
                other => return Err(FeedbackError::InvalidSymbol(other)),
            };
        }

        Ok(Self(symbols))
    }

    /// Get the five symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; 5] {
        &self.0
    }

    /// Check whether every position is green (the guess was the answer)
    #[inline]
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.0 == Self::ALL_GREEN.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One round of history: a guess and the feedback observed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Pair a guess with its observed feedback
    #[inline]
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback observed for the guess
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Check whether a candidate word is consistent with this record
    ///
    /// Per position `i` with guess letter `g` and candidate letter `w`:
    /// - `Green` requires `w == g`;
    /// - `Yellow` requires the candidate to contain `g` somewhere, and
    ///   `w != g`;
    /// - `Gray` requires the candidate to contain `g` nowhere.
    ///
    /// Known limitation, preserved on purpose: the rule tests whole-word
    /// containment per position and performs no letter-multiplicity
    /// accounting. A guess with a repeated letter where real Wordle grays
    /// one occurrence (letter present once, guessed twice) produces feedback
    /// this rule treats as contradictory, because a letter cannot be both
    /// contained and absent. Correcting this would change every downstream
    /// recommendation, so it stays.
    ///
    /// # Examples
    /// ```
    /// use wordle_nodal::core::{Feedback, GuessRecord, Word};
    ///
    /// let record = GuessRecord::new(
    ///     Word::new("maple").unwrap(),
    ///     Feedback::parse("BYBGG").unwrap(),
    /// );
    /// assert!(record.admits(&Word::new("angle").unwrap()));
    /// assert!(!record.admits(&Word::new("apple").unwrap()));
    /// ```
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        self.feedback
            .symbols()
            .iter()
            .zip(self.guess.chars())
            .zip(candidate.chars())
            .all(|((&symbol, &guessed), &actual)| match symbol {
                FeedbackSymbol::Green => actual == guessed,
                FeedbackSymbol::Yellow => {
                    candidate.has_letter(guessed) && actual != guessed
                }
                FeedbackSymbol::Gray => !candidate.has_letter(guessed),
            })
    }
}
