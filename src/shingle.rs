//! N-gram ("shingle") extraction.
//!
//! A shingle set is the set of all contiguous `n`-character substrings of a
//! word. It acts as a cheap similarity fingerprint: two words that are one
//! edit apart share almost all of their shingles, so comparing shingle sets
//! lets the matcher discard most of the corpus before paying for a full
//! edit-distance computation.
//!
//! Example:
//! ```
//! use triage::shingle::shingles;
//!
//! let set = shingles("abcd", 2).expect("valid length");
//! assert_eq!(set.len(), 3);
//! assert!(set.contains("ab"));
//! assert!(set.contains("bc"));
//! assert!(set.contains("cd"));
//! ```

use std::collections::HashSet;

use crate::error::Error;

/// Set of fixed-length substrings drawn from one word.
pub type ShingleSet = HashSet<String>;

/// Shingle length used when the caller does not supply one. Bigrams are a
/// good fit for the short identifier-like words this crate is aimed at.
pub const DEFAULT_SHINGLE_LEN: usize = 2;

/// Compute the set of all contiguous substrings of length `n` in `s`.
///
/// Duplicate substrings collapse (set semantics). A word shorter than `n`
/// has no shingles and yields the empty set. Deterministic for a given
/// `(s, n)`; no side effects.
///
/// Returns [`Error::InvalidShingleLength`] when `n` is zero.
pub fn shingles(s: &str, n: usize) -> Result<ShingleSet, Error> {
    if n == 0 {
        return Err(Error::InvalidShingleLength(n));
    }
    Ok(shingles_of(s, n))
}

// Shared with `Trie::insert`, which always passes a validated length.
pub(crate) fn shingles_of(s: &str, n: usize) -> ShingleSet {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < n {
        return ShingleSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_extracts_bigrams() {
        let set = shingles("abcd", 2).unwrap();
        let expected: ShingleSet = ["ab", "bc", "cd"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn it_returns_empty_set_for_short_input() {
        assert!(shingles("a", 2).unwrap().is_empty());
        assert!(shingles("", 2).unwrap().is_empty());
    }

    #[test]
    fn it_collapses_duplicates() {
        // "aaaa" has a single distinct bigram
        let set = shingles("aaaa", 2).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("aa"));
    }

    #[test]
    fn it_handles_word_exactly_as_long_as_n() {
        let set = shingles("ab", 2).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("ab"));
    }

    #[test]
    fn it_supports_other_lengths() {
        let set = shingles("abcd", 3).unwrap();
        let expected: ShingleSet = ["abc", "bcd"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn it_counts_multibyte_chars_not_bytes() {
        let set = shingles("héllo", 2).unwrap();
        assert!(set.contains("hé"));
        assert!(set.contains("él"));
    }

    #[test]
    fn it_rejects_zero_length() {
        assert_eq!(
            shingles("abcd", 0),
            Err(Error::InvalidShingleLength(0))
        );
    }
}
