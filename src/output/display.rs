//! Display functions for session and command results

use std::collections::BTreeSet;

use super::formatters::{feedback_to_tiles, format_candidate_preview, format_neighbor_entries};
use crate::commands::HistoryAnalysis;
use crate::core::{FeedbackError, Word};
use crate::solver::{Recommendation, RoundReport, EXPLORATION_THRESHOLD};
use colored::Colorize;

/// How many candidates to list before collapsing the rest
pub const PREVIEW_LIMIT: usize = 30;

/// How many co-occurring partners to show per known letter
pub const NEIGHBOR_TOP_K: usize = 6;

/// Print the interactive banner and input legend
pub fn print_intro(corpus_size: usize) {
    println!(
        "{}",
        "=== Wordle nodal-analyzer (interactive) ==="
            .bright_cyan()
            .bold()
    );
    println!("Feedback: 5 chars: G=green, Y=yellow, B=gray (or .). Example: BYGBB");
    println!("Type 'quit' to exit.");
    println!(
        "{} using {corpus_size} solution words for analysis.",
        "[info]".cyan()
    );
}

/// Print the per-round recommendation header
pub fn print_round_header(step: u32, guess: &Word) {
    println!(
        "\nStep {step}: I recommend you guess -> {}",
        guess.text().to_uppercase().bright_yellow().bold()
    );
}

/// Print everything an advanced round produced
pub fn print_round_report(report: &RoundReport) {
    println!(
        "{} {} candidate(s) remain.",
        "[info]".cyan(),
        report.candidates.len()
    );
    print!("{}", format_candidate_preview(&report.candidates, PREVIEW_LIMIT));

    if report.probe_override {
        println!(
            "{} Not enough confirmed letters yet; recommending exploratory probe: {}",
            "[strategy]".magenta(),
            report.next_guess.text().to_uppercase().bold()
        );
    } else if report.known_letters.len() < EXPLORATION_THRESHOLD {
        println!(
            "{} Not enough confirmed letters yet; recommending a high-information guess.",
            "[strategy]".magenta()
        );
    }

    print_ranking(&report.recommendation);
    print_neighbors(&report.known_letters, &report.recommendation);
}

/// Print the report for a history supplied on the command line
pub fn print_history_analysis(analysis: &HistoryAnalysis) {
    println!("Guess history:");
    for record in &analysis.history {
        println!(
            "  {} {}",
            record.guess().text().to_uppercase().bright_white().bold(),
            feedback_to_tiles(*record.feedback())
        );
    }

    println!(
        "\n{} {} candidate(s) remain.",
        "[info]".cyan(),
        analysis.candidates.len()
    );
    print!(
        "{}",
        format_candidate_preview(&analysis.candidates, PREVIEW_LIMIT)
    );

    print_ranking(&analysis.recommendation);
    print_neighbors(&analysis.known_letters, &analysis.recommendation);
}

/// Print the solved banner
pub fn print_solved(word: &Word) {
    println!(
        "\n{}",
        format!("Solved! Word is: {}", word.text().to_uppercase())
            .green()
            .bold()
    );
}

/// Print the contradictory-feedback failure notice
pub fn print_exhausted() {
    println!(
        "{} No candidate words remain. Double-check the feedback entered.",
        "[error]".red().bold()
    );
}

/// Print the rejection notice for unusable input
pub fn print_rejected(error: &FeedbackError) {
    match error {
        FeedbackError::Empty => println!(
            "{} empty input; please enter feedback like 'BYGBB'",
            "[info]".cyan()
        ),
        other => println!(
            "{} {other}. Use G/Y/B (or .). Try again.",
            "[error]".red().bold()
        ),
    }
}

/// Print the quit acknowledgement
pub fn print_aborted() {
    println!("Quitting.");
}

fn print_ranking(recommendation: &Recommendation) {
    println!("\nTop recommendations (by nodal score):");
    for (i, &(word, score)) in recommendation.ranked().iter().enumerate() {
        println!("  {}. {} ({score})", i + 1, word.text());
    }
}

fn print_neighbors(known_letters: &BTreeSet<u8>, recommendation: &Recommendation) {
    if known_letters.is_empty() {
        return;
    }

    println!("\nNodal neighbors for known letters (top co-occurring letters):");
    let tables = recommendation.tables();
    for &letter in known_letters {
        let neighbors = tables.neighbors_of(letter, NEIGHBOR_TOP_K);
        println!("  {}: {}", letter as char, format_neighbor_entries(&neighbors));
    }
}
