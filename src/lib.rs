//! Wordle Nodal Analyzer
//!
//! An interactive assistant for five-letter word games. Feedback narrows the
//! cached solution list, and the next guess is ranked by letter-frequency
//! nodal analysis over the words still in play.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_nodal::core::{Feedback, GuessRecord, Word};
//! use wordle_nodal::solver::{filter_candidates, recommend};
//! use wordle_nodal::wordlists::loader::words_from_slice;
//!
//! let corpus = words_from_slice(&["apple", "angle", "ankle", "ample", "amble"]);
//! let history = vec![GuessRecord::new(
//!     Word::new("maple").unwrap(),
//!     Feedback::parse("BYBGG").unwrap(),
//! )];
//!
//! let candidates = filter_candidates(&corpus, &history);
//! assert_eq!(candidates.len(), 2);
//!
//! let recommendation = recommend(&candidates, &corpus, 10);
//! assert!(recommendation.best().is_some());
//! ```

// Core domain types
pub mod core;

// Filtering, scoring, and the session state machine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
