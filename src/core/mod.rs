//! Core domain types for the assistant
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackSymbol, GuessRecord};
pub use word::{Word, WordError};
