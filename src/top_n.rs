//! Bounded top-N selection.
//!
//! [`NHighest`] keeps the `n` best-scoring items seen so far, evicting the
//! current worst when a better candidate arrives. Ranking feeds every
//! filtered candidate through one of these instead of sorting the whole
//! corpus when only a handful of suggestions are wanted.
//!
//! Example:
//! ```
//! use triage::top_n::NHighest;
//!
//! let mut best = NHighest::new(2).expect("valid capacity");
//! best.attempt("a", 1);
//! best.attempt("b", 5);
//! best.attempt("c", 3);
//! assert_eq!(best.get(), vec![("c", 3), ("b", 5)]);
//! ```

use crate::error::Error;

/// Fixed-capacity container retaining the highest-valued pairs seen.
///
/// `attempt` is a linear scan over at most `capacity` entries; capacities at
/// the call sites are small (tens), so no heap is used.
#[derive(Clone, Debug)]
pub struct NHighest<T, V> {
    capacity: usize,
    entries: Vec<(T, V)>,
}

impl<T, V: Ord> NHighest<T, V> {
    /// Create a selector retaining up to `capacity` pairs.
    ///
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        })
    }

    /// Offer a candidate pair.
    ///
    /// Inserted unconditionally while under capacity. Once full, the new
    /// pair replaces the current minimum only when its value is strictly
    /// greater; when several entries tie for the minimum, the first
    /// encountered is the one evicted.
    pub fn attempt(&mut self, item: T, value: V) {
        if self.entries.len() < self.capacity {
            self.entries.push((item, value));
            return;
        }
        let mut min = 0;
        for i in 1..self.entries.len() {
            if self.entries[i].1 < self.entries[min].1 {
                min = i;
            }
        }
        if value > self.entries[min].1 {
            self.entries[min] = (item, value);
        }
    }

    /// How many pairs are currently held?
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the selector empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the retained pairs, ascending by value. Does not mutate.
    pub fn get(&self) -> Vec<(T, V)>
    where
        T: Clone,
        V: Clone,
    {
        let mut snapshot = self.entries.clone();
        snapshot.sort_by(|a, b| a.1.cmp(&b.1));
        snapshot
    }

    /// Consume the selector, returning the retained pairs ascending by value.
    pub fn into_sorted(self) -> Vec<(T, V)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_the_n_highest() {
        let mut best = NHighest::new(2).unwrap();
        best.attempt("a", 1);
        best.attempt("b", 5);
        best.attempt("c", 3);
        assert_eq!(best.get(), vec![("c", 3), ("b", 5)]);
    }

    #[test]
    fn it_fills_under_capacity_unconditionally() {
        let mut best = NHighest::new(3).unwrap();
        best.attempt("a", 10);
        best.attempt("b", 0);
        assert_eq!(best.len(), 2);
        assert_eq!(best.get(), vec![("b", 0), ("a", 10)]);
    }

    #[test]
    fn it_discards_candidates_no_better_than_the_minimum() {
        let mut best = NHighest::new(2).unwrap();
        best.attempt("a", 4);
        best.attempt("b", 7);
        // Equal to the minimum: discarded, not swapped.
        best.attempt("c", 4);
        assert_eq!(best.get(), vec![("a", 4), ("b", 7)]);
    }

    #[test]
    fn it_evicts_the_first_encountered_minimum_on_ties() {
        let mut best = NHighest::new(3).unwrap();
        best.attempt("a", 2);
        best.attempt("b", 2);
        best.attempt("c", 9);
        best.attempt("d", 5);
        let got = best.get();
        assert_eq!(got, vec![("b", 2), ("d", 5), ("c", 9)]);
    }

    #[test]
    fn it_rejects_zero_capacity() {
        assert_eq!(
            NHighest::<&str, usize>::new(0).unwrap_err(),
            Error::InvalidCapacity(0)
        );
    }

    #[test]
    fn it_does_not_mutate_on_get() {
        let mut best = NHighest::new(2).unwrap();
        best.attempt("a", 1);
        best.attempt("b", 2);
        let first = best.get();
        let second = best.get();
        assert_eq!(first, second);
        assert_eq!(best.len(), 2);
    }

    #[test]
    fn it_sorts_into_sorted_ascending() {
        let mut best = NHighest::new(4).unwrap();
        for (item, value) in [("w", 9), ("x", 1), ("y", 7), ("z", 3)] {
            best.attempt(item, value);
        }
        assert_eq!(
            best.into_sorted(),
            vec![("x", 1), ("z", 3), ("y", 7), ("w", 9)]
        );
    }
}
