//! Provides a Trie-backed approximate string matcher: exact membership,
//! prefix queries, deletion with branch pruning, and fuzzy candidate
//! generation ranked by edit distance.
//!
//! Words inserted into the [`crate::trie::Trie`] carry a cached n-gram
//! ("shingle") fingerprint, computed once at insertion. A fuzzy query then
//! intersects shingle sets to discard most of the vocabulary cheaply and
//! only pays for edit-distance computation on the handful of words that
//! survive the filter. This is the classic shape of a "did you mean?"
//! feature: command-not-found recovery, tag search, dictionary lookup.
//!
//! The edit-distance metric is injected (see [`crate::correct::Distance`]);
//! a Damerau-Levenshtein default is provided. When only a few suggestions
//! are wanted, [`crate::top_n::NHighest`] keeps the best N candidates
//! without sorting the whole corpus.
//!
//! Example:
//! ```
//! use triage::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for command in ["status", "stash", "stage", "push", "pull"] {
//!     trie.insert(command);
//! }
//!
//! // Exact and prefix lookups.
//! assert!(trie.exists("push"));
//! assert!(trie.prefix("st"));
//!
//! // Fuzzy recovery for a typo, best match first.
//! let suggestions = trie.autocorrect("stsh");
//! assert_eq!(suggestions.first().map(String::as_str), Some("stash"));
//! ```
//!
//! The matcher is synchronous and single-threaded by design: no locks, no
//! I/O, no interior mutability. Hosts embedding it in a concurrent runtime
//! should treat the trie as read-mostly shared state and serialize
//! mutations (reader-writer lock, owning task, or copy-on-write snapshot,
//! at the host's discretion).
//!
//! Typical usages for this crate:
//!  - Autocorrect / "did you mean" suggestions
//!  - Prefix matching over a known vocabulary
//!  - Bounded top-N selection of scored candidates

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod correct;

pub mod error;

pub mod iterator;

pub mod shingle;

pub mod top_n;

pub mod trie;
