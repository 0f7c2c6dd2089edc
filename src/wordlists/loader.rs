//! Word list loading utilities
//!
//! Reads the cached solution file. Lines are either bare words or dated
//! `YYYY-MM-DD word` entries; dated entries are kept only while their date
//! has not yet passed, which hides answers already played.

use crate::core::Word;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a cache file, dropping expired and malformed lines
///
/// Dated entries earlier than today are skipped silently; lines that are
/// neither a valid word nor a valid dated entry are skipped with a warning
/// on stderr.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_nodal::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions_sample.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let today = Local::now().date_naive();
    Ok(parse_cache(&content, today))
}

/// Parse cache content against a reference date
fn parse_cache(content: &str, today: NaiveDate) -> Vec<Word> {
    let mut words = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.split_once(' ') {
            Some((date_part, word_part)) => {
                let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
                    warn_skipped(trimmed);
                    continue;
                };
                if date < today {
                    continue;
                }
                match Word::new(word_part.trim()) {
                    Ok(word) => words.push(word),
                    Err(_) => warn_skipped(trimmed),
                }
            }
            None => match Word::new(trimmed) {
                Ok(word) => words.push(word),
                Err(_) => warn_skipped(trimmed),
            },
        }
    }

    words
}

fn warn_skipped(line: &str) {
    eprintln!("{} skipping malformed line: {line}", "[warn]".yellow());
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_nodal::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "gouda"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use std::io::Write as _;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn dated_entries_expire() {
        let content = "2026-02-28 crane\n2026-03-01 gouda\n2026-12-31 broil\n";
        let words = parse_cache(content, fixed_today());

        // Yesterday's answer is gone; today's and future ones remain.
        assert_eq!(texts(&words), ["gouda", "broil"]);
    }

    #[test]
    fn bare_words_never_expire() {
        let content = "crane\nslate\n";
        let words = parse_cache(content, fixed_today());
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn malformed_dates_are_skipped() {
        let content = "not-a-date crane\n2026-13-40 slate\n2026-12-31 gouda\n";
        let words = parse_cache(content, fixed_today());
        assert_eq!(texts(&words), ["gouda"]);
    }

    #[test]
    fn invalid_words_are_skipped() {
        let content = "2026-12-31 toolong\n2026-12-31 abc\nxyz\n2026-12-31 crane\n";
        let words = parse_cache(content, fixed_today());
        assert_eq!(texts(&words), ["crane"]);
    }

    #[test]
    fn blank_lines_and_padding_are_ignored() {
        let content = "\n  \n  2026-12-31 crane  \n\n";
        let words = parse_cache(content, fixed_today());
        assert_eq!(texts(&words), ["crane"]);
    }

    #[test]
    fn uppercase_entries_are_normalized() {
        let content = "2026-12-31 CRANE\nSLATE\n";
        let words = parse_cache(content, fixed_today());
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn load_from_file_reads_a_mixed_cache() {
        let today = Local::now().date_naive();
        let future = today + Days::new(30);
        let past = today - Days::new(30);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "{} crane", past.format("%Y-%m-%d")).unwrap();
        writeln!(file, "{} gouda", future.format("%Y-%m-%d")).unwrap();
        writeln!(file, "slate").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        assert_eq!(texts(&words), ["gouda", "slate"]);
    }

    #[test]
    fn load_from_file_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");
        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn bundled_sample_list_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/solutions_sample.txt");
        let words = load_from_file(path).unwrap();

        assert!(!words.is_empty());
        assert!(words.iter().any(|w| w.text() == "broil"));
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }
}
