//! Provides the [`Trie`]: a char-labelled tree storing a vocabulary of
//! words, the backbone of the approximate matcher.
//!
//! Each root-to-node path spells a string; nodes reached by a stored word
//! carry a termination flag, a cached shingle set (see [`crate::shingle`])
//! and an optional caller-supplied corpus weight. The cached shingles are
//! what make approximate lookups cheap: insertion pays the extraction cost
//! once, and every later [`crate::trie::Trie::autocorrect_ngram`] query only
//! intersects sets.
//!
//! The trie performs no normalization. Callers wanting case-insensitive
//! matching should lowercase words before insertion and queries alike.
//!
//! Example 1
//! ```
//! use triage::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("hello");
//! trie.insert("help");
//!
//! assert!(trie.exists("hello"));
//! assert!(!trie.exists("hel")); // strict prefixes are not members
//! assert!(trie.prefix("hel"));
//! assert!(trie.delete("hello"));
//! assert!(!trie.exists("hello"));
//! assert!(trie.exists("help")); // sibling branch untouched
//! ```
//!
//! Example 2
//! ```
//! use triage::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert_weighted("the", 503);
//! trie.insert_weighted("them", 127);
//!
//! assert_eq!(trie.weight("the"), Some(503));
//! // Re-inserting without a weight keeps the existing one.
//! trie.insert("the");
//! assert_eq!(trie.weight("the"), Some(503));
//! ```

use crate::iterator::Words;
use crate::shingle::{shingles_of, ShingleSet, DEFAULT_SHINGLE_LEN};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node {
    pub(crate) children: Vec<Node>,
    pub(crate) ch: char,
    pub(crate) terminated: bool,
    // Populated iff `terminated`; always shingles_of(word, 2) for the word
    // spelled by the path to this node.
    pub(crate) shingles: Option<ShingleSet>,
    pub(crate) weight: Option<u64>,
}

impl Node {
    fn new(ch: char) -> Self {
        Self {
            ch,
            ..Default::default()
        }
    }
}

/// Stores a vocabulary of words, one char per node.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie {
    pub(crate) head: Node,
    count: usize,
}

impl Trie {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::default();
        self.count = 0;
    }

    /// How many words does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.head.children.is_empty()
    }

    /// Insert `word`, creating missing nodes along its path and caching its
    /// shingle set on the terminal node.
    ///
    /// Idempotent: re-inserting an existing word changes nothing (any
    /// previously recorded weight is kept). Inserting the empty string is a
    /// no-op. Returns true when the word was newly added.
    pub fn insert(&mut self, word: &str) -> bool {
        let (added, _) = self.insert_inner(word, None);
        added
    }

    /// Insert `word` with a corpus weight, replacing any previous weight.
    ///
    /// The weight is an opaque caller-supplied score (typically a corpus
    /// frequency) consulted by [`crate::trie::Trie::suggest`] to break ties
    /// between equally-distant candidates. Returns the previous weight.
    pub fn insert_weighted(&mut self, word: &str, weight: u64) -> Option<u64> {
        let (_, previous) = self.insert_inner(word, Some(weight));
        previous
    }

    /// Does the Trie contain `word`?
    ///
    /// True iff the path spelling `word` ends at a terminal node. A word
    /// that is only a strict prefix of stored words is not a member.
    pub fn exists(&self, word: &str) -> bool {
        self.descend(word).map_or(false, |node| node.terminated)
    }

    /// Does any stored word start with `prefix`?
    ///
    /// Ignores termination flags; the empty prefix always matches.
    pub fn prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// The corpus weight recorded for `word`, if any.
    pub fn weight(&self, word: &str) -> Option<u64> {
        self.descend(word)
            .filter(|node| node.terminated)
            .and_then(|node| node.weight)
    }

    /// Remove `word` from the Trie.
    ///
    /// Unmarks the terminal node, then prunes childless non-terminal nodes
    /// bottom-up so no dead branch survives. Nodes shared with sibling words
    /// or with words this one is a prefix of are left intact. Removing an
    /// absent word is a no-op. Returns true when the word was present.
    pub fn delete(&mut self, word: &str) -> bool {
        // Descend once, recording the child index taken at each level. The
        // recorded path then drives the unwind without recursion.
        let mut path = Vec::new();
        {
            let mut node = &self.head;
            for ch in word.chars() {
                match node.children.iter().position(|c| c.ch == ch) {
                    Some(i) => {
                        path.push(i);
                        node = &node.children[i];
                    }
                    None => return false,
                }
            }
            if !node.terminated {
                return false;
            }
        }
        if path.is_empty() {
            // The head never terminates a word.
            return false;
        }

        let node = self.node_at_mut(&path);
        node.terminated = false;
        node.shingles = None;
        node.weight = None;
        self.count -= 1;

        // Unwind deepest-first; shallower indices stay valid because only
        // deeper nodes are removed.
        for depth in (0..path.len()).rev() {
            let parent = self.node_at_mut(&path[..depth]);
            let child = &parent.children[path[depth]];
            if child.children.is_empty() && !child.terminated {
                parent.children.remove(path[depth]);
            } else {
                break;
            }
        }
        true
    }

    /// Create a lazy iterator over every stored word.
    ///
    /// Each word appears exactly once per full traversal; the order is a
    /// deterministic depth-first walk, not lexicographic. Restartable: each
    /// call yields a fresh traversal.
    pub fn iter(&self) -> Words<'_> {
        self.into_iter()
    }

    /// Create an iterator over stored words in lexicographic order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = crate::iterator::WordRef<'_>> {
        let mut v: Vec<_> = self.into_iter().collect();
        v.sort_by(|a, b| a.word.cmp(&b.word));
        v.into_iter()
    }

    fn insert_inner(&mut self, word: &str, weight: Option<u64>) -> (bool, Option<u64>) {
        let mut node = &mut self.head;
        let mut chars = word.chars().peekable();
        let mut added = false;
        let mut previous = None;

        while let Some(ch) = chars.next() {
            let last = chars.peek().is_none();

            let index = match node.children.iter().position(|c| c.ch == ch) {
                Some(i) => i,
                None => {
                    node.children.push(Node::new(ch));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];

            if last {
                if !node.terminated {
                    node.terminated = true;
                    node.shingles = Some(shingles_of(word, DEFAULT_SHINGLE_LEN));
                    self.count += 1;
                    added = true;
                }
                previous = node.weight;
                node.weight = weight.or(previous);
            }
        }
        (added, previous)
    }

    fn descend(&self, path: &str) -> Option<&Node> {
        let mut node = &self.head;
        for ch in path.chars() {
            node = node.children.iter().find(|c| c.ch == ch)?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, path: &[usize]) -> &mut Node {
        let mut node = &mut self.head;
        for &i in path {
            node = &mut node.children[i];
        }
        node
    }
}
