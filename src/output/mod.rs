//! Terminal output formatting
//!
//! Display utilities for session rounds and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_aborted, print_exhausted, print_history_analysis, print_intro, print_rejected,
    print_round_header, print_round_report, print_solved,
};
