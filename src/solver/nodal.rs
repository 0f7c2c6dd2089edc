//! Letter-frequency tallies and nodal scoring
//!
//! Tables are rebuilt from the live candidate set every round. Scores are
//! then applied across the full corpus, so exploratory guesses that have
//! already been eliminated as answers stay eligible as probes.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Positional letter tallies and co-occurrence counts over a candidate set
///
/// Every position of every candidate contributes one tally, so a letter
/// appearing twice in a word counts twice. Co-occurrence is over ordered
/// position pairs of the same word: `cooccurrence[x][y]` is the number of
/// position pairs `(i, j)` with `i != j` where position `i` holds `x` and
/// position `j` holds `y`.
#[derive(Debug, Clone, Default)]
pub struct NodalTables {
    letter_counts: FxHashMap<u8, u32>,
    cooccurrence: FxHashMap<u8, FxHashMap<u8, u32>>,
}

impl NodalTables {
    /// Tally letter frequencies and co-occurrences across the candidates
    #[must_use]
    pub fn build(candidates: &[&Word]) -> Self {
        let mut letter_counts = FxHashMap::default();
        let mut cooccurrence: FxHashMap<u8, FxHashMap<u8, u32>> = FxHashMap::default();

        for word in candidates {
            let chars = word.chars();
            for (i, &letter) in chars.iter().enumerate() {
                *letter_counts.entry(letter).or_insert(0) += 1;
                for (j, &partner) in chars.iter().enumerate() {
                    if i != j {
                        *cooccurrence
                            .entry(letter)
                            .or_default()
                            .entry(partner)
                            .or_insert(0) += 1;
                    }
                }
            }
        }

        Self {
            letter_counts,
            cooccurrence,
        }
    }

    /// Total tally for a letter across all candidate positions
    #[must_use]
    pub fn letter_count(&self, letter: u8) -> u32 {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Nodal score: summed tallies over the word's distinct letters
    ///
    /// Repeated letters contribute once, so "apple" is scored on
    /// `{a, p, l, e}` even though `p` was tallied from both positions.
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.distinct_letters()
            .map(|letter| self.letter_count(letter))
            .sum()
    }

    /// Strongest co-occurring partners for a letter
    ///
    /// Returns up to `top_k` `(partner, count)` pairs, highest count first;
    /// equal counts fall back to alphabetical order. A letter with no tally
    /// yields an empty list.
    #[must_use]
    pub fn neighbors_of(&self, letter: u8, top_k: usize) -> Vec<(u8, u32)> {
        let Some(partners) = self.cooccurrence.get(&letter) else {
            return Vec::new();
        };

        let mut neighbors: Vec<(u8, u32)> =
            partners.iter().map(|(&partner, &count)| (partner, count)).collect();
        neighbors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        neighbors.truncate(top_k);
        neighbors
    }
}

/// Ranked guesses plus the tables that produced the ranking
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    ranked: Vec<(&'a Word, u32)>,
    tables: NodalTables,
}

impl<'a> Recommendation<'a> {
    /// Ranked `(word, score)` pairs, best first
    #[must_use]
    pub fn ranked(&self) -> &[(&'a Word, u32)] {
        &self.ranked
    }

    /// The top-ranked word, if any corpus word was scored
    #[must_use]
    pub fn best(&self) -> Option<&'a Word> {
        self.ranked.first().map(|&(word, _)| word)
    }

    /// The tallies behind the ranking, for neighbor reports
    #[must_use]
    pub const fn tables(&self) -> &NodalTables {
        &self.tables
    }
}

/// Rank the corpus by nodal score against the current candidates
///
/// Ties are broken toward the lexicographically later word, and the list is
/// cut to `top_n` entries. The ranking is fully deterministic.
///
/// # Examples
/// ```
/// use wordle_nodal::core::Word;
/// use wordle_nodal::solver::recommend;
/// use wordle_nodal::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["apple", "angle", "ankle", "ample", "amble"]);
/// let candidates: Vec<&Word> = corpus.iter().collect();
///
/// let recommendation = recommend(&candidates, &corpus, 3);
/// assert_eq!(recommendation.best().unwrap().text(), "ample");
/// assert_eq!(recommendation.ranked().len(), 3);
/// ```
#[must_use]
pub fn recommend<'a>(candidates: &[&Word], corpus: &'a [Word], top_n: usize) -> Recommendation<'a> {
    let tables = NodalTables::build(candidates);

    let mut ranked: Vec<(&Word, u32)> = corpus
        .iter()
        .map(|word| (word, tables.score(word)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)));
    ranked.truncate(top_n);

    Recommendation { ranked, tables }
}
