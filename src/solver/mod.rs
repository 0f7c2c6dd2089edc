//! Candidate filtering, nodal scoring, and the interactive session
//!
//! The pieces layer bottom-up: `filter` narrows the corpus, `nodal` ranks
//! guesses over it, and `session` drives both from user feedback.

mod filter;
mod nodal;
mod session;

pub use filter::filter_candidates;
pub use nodal::{recommend, NodalTables, Recommendation};
pub use session::{
    confirmed_letters, RoundReport, Session, SessionConfig, SessionState, Turn,
    DEFAULT_PROBE_WORD, DEFAULT_SEED_GUESS, DEFAULT_TOP_N, EXPLORATION_THRESHOLD,
};
