//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, Word};

/// Format feedback as emoji tiles
#[must_use]
pub fn feedback_to_tiles(feedback: Feedback) -> String {
    let mut result = String::with_capacity(5 * 4);

    for symbol in feedback.symbols() {
        result.push(match symbol {
            FeedbackSymbol::Green => '🟩',
            FeedbackSymbol::Yellow => '🟨',
            FeedbackSymbol::Gray => '⬜',
        });
    }

    result
}

/// Format a numbered candidate preview, capped at `limit` entries
///
/// Words past the cap collapse into a single "...and N more" line.
#[must_use]
pub fn format_candidate_preview(candidates: &[&Word], limit: usize) -> String {
    let mut result = String::new();

    for (i, word) in candidates.iter().take(limit).enumerate() {
        result.push_str(&format!("{}. {}\n", i + 1, word.text()));
    }
    if candidates.len() > limit {
        result.push_str(&format!("...and {} more\n", candidates.len() - limit));
    }

    result
}

/// Format neighbor pairs as a comma-separated `letter(count)` list
#[must_use]
pub fn format_neighbor_entries(neighbors: &[(u8, u32)]) -> String {
    if neighbors.is_empty() {
        return "(no data)".to_string();
    }

    neighbors
        .iter()
        .map(|&(letter, count)| format!("{}({count})", letter as char))
        .collect::<Vec<_>>()
        .join(", ")
}
