//! Command implementations

pub mod analyze;
pub mod assist;

pub use analyze::{analyze_history, parse_record, HistoryAnalysis};
pub use assist::run_assist;
