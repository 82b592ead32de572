// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Multiset bookkeeping for window scans.
//!
//! Two map types back the covering search: `FrequencyTable` counts symbol
//! occurrences inside the live window and is mutated on every expansion and
//! contraction, while `TargetMultiset` is derived once from the pattern and
//! never changes afterwards.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Occurrence counts of the symbols inside the current window.
///
/// Counts only ever reflect symbols that actually appeared in the window so
/// far; symbols never seen report a count of zero without occupying a map
/// entry.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: FxHashMap<S, usize>,
}

impl<S> FrequencyTable<S>
where
    S: Copy + Eq + Hash,
{
    /// Creates an empty `FrequencyTable`.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Creates an empty `FrequencyTable` with preallocated capacity for the
    /// given number of distinct symbols.
    #[inline]
    pub fn preallocated(distinct_symbols: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(distinct_symbols, Default::default()),
        }
    }

    /// Increments the count of `symbol` and returns the count after the
    /// increment.
    #[inline]
    pub fn increment(&mut self, symbol: S) -> usize {
        let count = self.counts.entry(symbol).or_insert(0);
        *count += 1;
        *count
    }

    /// Decrements the count of `symbol` and returns the count after the
    /// decrement.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `symbol` has a zero count: a window can
    /// only give back symbols it previously absorbed.
    #[inline]
    pub fn decrement(&mut self, symbol: S) -> usize {
        match self.counts.get_mut(&symbol) {
            Some(count) if *count > 0 => {
                *count -= 1;
                *count
            }
            _ => {
                debug_assert!(
                    false,
                    "called `FrequencyTable::decrement` on a symbol with zero count"
                );
                0
            }
        }
    }

    /// Returns the current count of `symbol` (zero if never seen).
    #[inline]
    pub fn count(&self, symbol: S) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Returns the number of distinct symbols with an entry in the table.
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Removes all counts, returning the table to its initial state while
    /// keeping its allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// The fixed requirement map derived from a pattern sequence.
///
/// Maps every distinct pattern symbol to the number of occurrences a window
/// must contain to cover it. Built once before a scan; never mutated.
#[derive(Debug, Clone)]
pub struct TargetMultiset<S> {
    required: FxHashMap<S, usize>,
}

impl<S> TargetMultiset<S>
where
    S: Copy + Eq + Hash,
{
    /// Derives the requirement map from the pattern symbols.
    pub fn from_symbols(pattern: &[S]) -> Self {
        let mut required =
            FxHashMap::with_capacity_and_hasher(pattern.len(), Default::default());
        for &symbol in pattern {
            *required.entry(symbol).or_insert(0) += 1;
        }
        Self { required }
    }

    /// Returns the required count of `symbol` (zero if the pattern does not
    /// contain it).
    #[inline]
    pub fn required_count(&self, symbol: S) -> usize {
        self.required.get(&symbol).copied().unwrap_or(0)
    }

    /// Returns `true` if the pattern contains `symbol`.
    #[inline]
    pub fn requires(&self, symbol: S) -> bool {
        self.required.contains_key(&symbol)
    }

    /// Returns the number of distinct symbols the pattern requires.
    #[inline]
    pub fn distinct_count(&self) -> usize {
        self.required.len()
    }

    /// Returns `true` if the pattern was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_increment_decrement() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.count('a'), 0);

        assert_eq!(table.increment('a'), 1);
        assert_eq!(table.increment('a'), 2);
        assert_eq!(table.increment('b'), 1);
        assert_eq!(table.distinct_len(), 2);

        assert_eq!(table.decrement('a'), 1);
        assert_eq!(table.count('a'), 1);
        assert_eq!(table.count('b'), 1);
    }

    #[test]
    fn test_frequency_table_clear() {
        let mut table = FrequencyTable::new();
        table.increment('x');
        table.clear();
        assert_eq!(table.count('x'), 0);
        assert_eq!(table.distinct_len(), 0);
    }

    #[test]
    fn test_target_multiset_counts() {
        let target = TargetMultiset::from_symbols(&['a', 'b', 'a']);
        assert_eq!(target.required_count('a'), 2);
        assert_eq!(target.required_count('b'), 1);
        assert_eq!(target.required_count('z'), 0);
        assert!(target.requires('a'));
        assert!(!target.requires('z'));
        assert_eq!(target.distinct_count(), 2);
        assert!(!target.is_empty());
    }

    #[test]
    fn test_target_multiset_empty() {
        let target = TargetMultiset::<char>::from_symbols(&[]);
        assert!(target.is_empty());
        assert_eq!(target.distinct_count(), 0);
    }
}
