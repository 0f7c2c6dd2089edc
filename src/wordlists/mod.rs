//! Solution word lists
//!
//! Words come from a cached text file at runtime, so the corpus can track
//! the official answer schedule without rebuilding the binary.

pub mod loader;

/// Cache file consulted when no path is given on the command line
pub const DEFAULT_CACHE_FILE: &str = "wordle_solutions_cached.txt";
