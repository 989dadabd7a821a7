//! Provides the Trie word iterator.
//!
//! [`Words`] walks the tree depth-first with an explicit frame stack,
//! yielding every stored word exactly once per traversal. It borrows the
//! trie, so it is cheap to restart (call [`crate::trie::Trie::iter`] again)
//! and safe to run several times over the same snapshot.

use crate::shingle::ShingleSet;
use crate::trie::{Node, Trie};

/// Iterator Item: one stored word with its cached per-word data.
#[derive(Clone, Debug)]
pub struct WordRef<'a> {
    /// The word spelled by the path to the terminal node.
    pub word: String,
    /// The shingle set cached at insertion time.
    pub shingles: &'a ShingleSet,
    /// The corpus weight, when one was supplied.
    pub weight: Option<u64>,
}

struct Frame<'a> {
    node: &'a Node,
    next_child: usize,
}

/// Depth-first iterator over the words stored in a [`Trie`].
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    prefix: String,
}

impl<'a> Iterator for Words<'a> {
    type Item = WordRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.next_child < frame.node.children.len() {
                let child = &frame.node.children[frame.next_child];
                frame.next_child += 1;
                self.prefix.push(child.ch);
                self.stack.push(Frame {
                    node: child,
                    next_child: 0,
                });
                if child.terminated {
                    // Terminal nodes always carry their shingles.
                    if let Some(shingles) = child.shingles.as_ref() {
                        return Some(WordRef {
                            word: self.prefix.clone(),
                            shingles,
                            weight: child.weight,
                        });
                    }
                }
            } else {
                self.stack.pop();
                // The head frame contributes no char to the prefix.
                if !self.stack.is_empty() {
                    self.prefix.pop();
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = WordRef<'a>;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Words {
            stack: vec![Frame {
                node: &self.head,
                next_child: 0,
            }],
            prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use std::collections::HashSet;

    #[test]
    fn it_iterates_over_empty_trie() {
        let trie = Trie::new();
        assert_eq!(trie.iter().count(), 0);
    }

    #[test]
    fn it_yields_every_word_exactly_once() {
        let mut trie = Trie::new();
        let words = ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd"];
        for word in words {
            trie.insert(word);
        }
        let seen: Vec<String> = trie.iter().map(|w| w.word).collect();
        assert_eq!(seen.len(), words.len());
        let unique: HashSet<&str> = seen.iter().map(String::as_str).collect();
        assert_eq!(unique, words.iter().copied().collect());
    }

    #[test]
    fn it_restarts_with_identical_output() {
        let mut trie = Trie::new();
        for word in ["car", "cat", "carton", "dog"] {
            trie.insert(word);
        }
        let first: Vec<String> = trie.iter().map(|w| w.word).collect();
        let second: Vec<String> = trie.iter().map(|w| w.word).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn it_exposes_cached_shingles_and_weight() {
        let mut trie = Trie::new();
        trie.insert_weighted("hello", 42);
        let entry = trie.iter().next().unwrap();
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.weight, Some(42));
        assert_eq!(
            entry.shingles,
            &crate::shingle::shingles("hello", 2).unwrap()
        );
    }

    #[test]
    fn it_skips_unmarked_interior_nodes() {
        let mut trie = Trie::new();
        trie.insert("helper");
        // "help" is a path but not a word.
        let words: Vec<String> = trie.iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["helper".to_string()]);
    }

    #[test]
    fn it_iterates_sorted_lexicographically() {
        let mut trie = Trie::new();
        for word in ["pear", "apple", "plum", "apricot"] {
            trie.insert(word);
        }
        let sorted: Vec<String> = trie.iter_sorted().map(|w| w.word).collect();
        assert_eq!(sorted, vec!["apple", "apricot", "pear", "plum"]);
    }

    #[test]
    fn it_finds_in_populated_trie() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 64;
        let mut trie = Trie::new();
        let mut searches: Vec<String> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=SIZE))
                .map(char::from)
                .collect();
            searches.push(entry.clone());
            trie.insert(&entry);
        }
        for entry in &searches {
            let mut iterator = trie.iter();
            assert_eq!(
                Some(entry.clone()),
                iterator.find(|x| x.word == *entry).map(|x| x.word)
            );
        }
    }
}
