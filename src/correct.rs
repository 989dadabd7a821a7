//! Candidate generation and ranking ("did you mean?" support).
//!
//! Approximate lookup runs in two stages. The shingle pre-filter walks the
//! stored words and keeps only those whose cached shingle set overlaps the
//! query's almost completely and whose shingle count is close; it is
//! deliberately permissive, tolerating off-by-one shingle mismatches and
//! small length differences. Edit distance then orders the survivors
//! best-first, correcting any ranking slack the cheap filter left behind.
//!
//! The distance function is an injected [`Distance`] strategy so hosts can
//! substitute their own metric; [`DamerauLevenshtein`] (optimal string
//! alignment) is provided as the default, since adjacent transpositions
//! cover a large share of real typos.
//!
//! Example:
//! ```
//! use triage::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["hello", "help", "hell", "world"] {
//!     trie.insert(word);
//! }
//! let suggestions = trie.autocorrect("helo");
//! assert!(suggestions.contains(&"hello".to_string()));
//! assert!(!suggestions.contains(&"world".to_string()));
//! ```

use std::cmp::Reverse;

use crate::error::Error;
use crate::shingle::{shingles, ShingleSet, DEFAULT_SHINGLE_LEN};
use crate::top_n::NHighest;
use crate::trie::Trie;

/// Pluggable edit-distance strategy.
///
/// Implemented for any `Fn(&str, &str) -> usize`, so a plain closure works
/// as a drop-in metric.
pub trait Distance {
    /// The number of edits needed to turn `a` into `b`.
    fn distance(&self, a: &str, b: &str) -> usize;
}

impl<F> Distance for F
where
    F: Fn(&str, &str) -> usize,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}

/// Damerau-Levenshtein distance, optimal string alignment variant:
/// insertions, deletions, substitutions and adjacent transpositions each
/// cost one edit.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamerauLevenshtein;

impl Distance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        // Rolling three-row matrix; prev2 is needed for transpositions.
        let mut prev2 = vec![0usize; b.len() + 1];
        let mut prev: Vec<usize> = (0..=b.len()).collect();
        let mut curr = vec![0usize; b.len() + 1];

        for i in 1..=a.len() {
            curr[0] = i;
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                curr[j] = (prev[j] + 1)
                    .min(curr[j - 1] + 1)
                    .min(prev[j - 1] + cost);
                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    curr[j] = curr[j].min(prev2[j - 2] + 1);
                }
            }
            std::mem::swap(&mut prev2, &mut prev);
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[b.len()]
    }
}

// Overlap must miss at most one query shingle, and the shingle counts must
// be within two of each other.
fn is_candidate(cached: &ShingleSet, source: &ShingleSet) -> bool {
    let overlap = cached.intersection(source).count();
    overlap + 1 >= source.len() && cached.len().abs_diff(source.len()) <= 2
}

impl Trie {
    /// All stored words similar to `source`, best match first.
    ///
    /// Computes the query's shingle set with length `k`, pre-filters the
    /// vocabulary by shingle overlap and length difference, then ranks the
    /// survivors by `distance` ascending. Ties keep traversal order. The
    /// result is not capped; callers truncate as needed. An empty trie
    /// yields an empty result.
    ///
    /// An empty `source` has no shingles, so the overlap test passes for
    /// every word and the result degenerates to "all words of at most three
    /// chars"; guard at the call site if that is undesired.
    ///
    /// Returns [`Error::InvalidShingleLength`] when `k` is zero.
    pub fn autocorrect_ngram<D: Distance>(
        &self,
        source: &str,
        k: usize,
        distance: &D,
    ) -> Result<Vec<String>, Error> {
        let source_shingles = shingles(source, k)?;
        let mut ranked: Vec<(String, usize)> = self
            .iter()
            .filter(|entry| is_candidate(entry.shingles, &source_shingles))
            .map(|entry| {
                let d = distance.distance(source, &entry.word);
                (entry.word, d)
            })
            .collect();
        ranked.sort_by_key(|&(_, d)| d);
        Ok(ranked.into_iter().map(|(word, _)| word).collect())
    }

    /// [`Trie::autocorrect_ngram`] with bigram shingles and the default
    /// [`DamerauLevenshtein`] metric.
    pub fn autocorrect(&self, source: &str) -> Vec<String> {
        // The default shingle length is nonzero, so extraction cannot fail.
        self.autocorrect_ngram(source, DEFAULT_SHINGLE_LEN, &DamerauLevenshtein)
            .unwrap_or_default()
    }

    /// The `limit` best `(word, distance)` suggestions for `source`.
    ///
    /// Same candidate filter as [`Trie::autocorrect_ngram`], but survivors
    /// flow through an [`NHighest`] selector instead of a full sort, so only
    /// `limit` pairs are ever retained. Ordering is distance ascending; at
    /// equal distance the heavier (more frequent) word wins.
    ///
    /// Returns [`Error::InvalidShingleLength`] when `k` is zero and
    /// [`Error::InvalidCapacity`] when `limit` is zero.
    pub fn suggest<D: Distance>(
        &self,
        source: &str,
        k: usize,
        limit: usize,
        distance: &D,
    ) -> Result<Vec<(String, usize)>, Error> {
        let source_shingles = shingles(source, k)?;
        let mut best = NHighest::new(limit)?;
        for entry in self.iter() {
            if !is_candidate(entry.shingles, &source_shingles) {
                continue;
            }
            let d = distance.distance(source, &entry.word);
            best.attempt(entry.word, (Reverse(d), entry.weight.unwrap_or(0)));
        }
        // into_sorted is ascending by (Reverse(distance), weight); flipping
        // it puts the smallest distance, then the largest weight, first.
        let mut out: Vec<(String, usize)> = best
            .into_sorted()
            .into_iter()
            .map(|(word, (Reverse(d), _))| (word, d))
            .collect();
        out.reverse();
        Ok(out)
    }
}
