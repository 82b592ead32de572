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

//! Minimum covering window search.
//!
//! The two-phase expand/contract protocol: the window's end bound sweeps the
//! haystack absorbing symbols, and whenever the window covers the full
//! pattern multiset the start bound chases forward, shedding symbols until
//! coverage breaks. Tracking `formed` — how many distinct pattern symbols
//! have exactly reached their required count — makes the coverage check O(1)
//! per step. Both bounds move forward monotonically, so the search is
//! amortized linear in the haystack length.

use crate::{
    freq::{FrequencyTable, TargetMultiset},
    result::{CoverOutcome, CoverResult},
    stats::ScanStatistics,
};
use seiche_core::math::span::ClosedOpenSpan;
use std::hash::Hash;

/// A reusable scanner for the shortest window covering a pattern multiset.
///
/// The scanner owns the window frequency table so that repeated scans reuse
/// its allocation; the table is cleared after each run. Each call to
/// [`scan`] depends only on its inputs.
///
/// [`scan`]: CoveringScanner::scan
///
/// # Examples
///
/// ```rust
/// # use seiche_scan::covering::CoveringScanner;
/// # use seiche_core::math::span::ClosedOpenSpan;
///
/// let haystack: Vec<char> = "ADOBECODEBANC".chars().collect();
/// let pattern: Vec<char> = "ABC".chars().collect();
/// let outcome = CoveringScanner::new().scan(&haystack, &pattern);
/// assert_eq!(outcome.span(), Some(ClosedOpenSpan::new(9, 13))); // "BANC"
/// ```
#[derive(Debug, Clone)]
pub struct CoveringScanner<S> {
    window_counts: FrequencyTable<S>,
}

impl<S> Default for CoveringScanner<S>
where
    S: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CoveringScanner<S>
where
    S: Copy + Eq + Hash,
{
    /// Creates a new scanner.
    #[inline]
    pub fn new() -> Self {
        Self {
            window_counts: FrequencyTable::new(),
        }
    }

    /// Creates a new scanner with preallocated storage for the given number
    /// of distinct symbols.
    #[inline]
    pub fn preallocated(distinct_symbols: usize) -> Self {
        Self {
            window_counts: FrequencyTable::preallocated(distinct_symbols),
        }
    }

    /// Searches `haystack` for the shortest contiguous window containing at
    /// least the multiset of symbols in `pattern`.
    ///
    /// Returns [`CoverResult::EmptyPattern`] for an empty pattern and
    /// [`CoverResult::Uncovered`] when no window covers the pattern
    /// (including the trivial case of a haystack shorter than the pattern).
    /// Among equal-length covering windows, the leftmost wins: the best
    /// candidate is only replaced on strict length improvement.
    pub fn scan(&mut self, haystack: &[S], pattern: &[S]) -> CoverOutcome {
        let mut statistics = ScanStatistics::default();

        if pattern.is_empty() {
            return CoverOutcome::new(CoverResult::EmptyPattern, statistics);
        }
        if haystack.len() < pattern.len() {
            return CoverOutcome::new(CoverResult::Uncovered, statistics);
        }

        let target = TargetMultiset::from_symbols(pattern);
        let required = target.distinct_count();

        let mut formed = 0usize;
        let mut best: Option<ClosedOpenSpan<usize>> = None;
        let mut start = 0usize;

        for (end, &symbol) in haystack.iter().enumerate() {
            statistics.on_symbol_examined();
            let count = self.window_counts.increment(symbol);
            statistics.on_window_expansion();

            // `formed` advances only on the transition to exactly meeting a
            // requirement; overshooting a count changes nothing.
            if count == target.required_count(symbol) {
                formed += 1;
            }

            while formed == required {
                let window = ClosedOpenSpan::new(start, end + 1);
                if best.is_none_or(|current| window.len() < current.len()) {
                    best = Some(window);
                    statistics.on_candidate_recorded();
                }

                let leaving = haystack[start];
                let remaining = self.window_counts.decrement(leaving);
                if remaining < target.required_count(leaving) {
                    formed -= 1;
                }
                start += 1;
                statistics.on_window_contraction();
            }
        }

        self.window_counts.clear();

        let result = match best {
            Some(span) => CoverResult::Covered(span),
            None => CoverResult::Uncovered,
        };
        CoverOutcome::new(result, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn scan_str(haystack: &str, pattern: &str) -> CoverOutcome {
        let haystack: Vec<char> = haystack.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        CoveringScanner::new().scan(&haystack, &pattern)
    }

    #[test]
    fn test_classic_covering() {
        let outcome = scan_str("ADOBECODEBANC", "ABC");
        assert_eq!(outcome.span(), Some(ClosedOpenSpan::new(9, 13))); // "BANC"
    }

    #[test]
    fn test_whole_haystack_is_the_window() {
        let outcome = scan_str("ab", "ab");
        assert_eq!(outcome.span(), Some(ClosedOpenSpan::new(0, 2)));
    }

    #[test]
    fn test_duplicate_requirements() {
        // Both 'a's are required, so "aa" only matches where they are
        // adjacent-or-spanned.
        let outcome = scan_str("abaca", "aa");
        assert_eq!(outcome.span(), Some(ClosedOpenSpan::new(0, 3))); // "aba"
    }

    #[test]
    fn test_uncovered() {
        assert_eq!(scan_str("abc", "abd").result, CoverResult::Uncovered);
    }

    #[test]
    fn test_haystack_shorter_than_pattern() {
        assert_eq!(scan_str("a", "aa").result, CoverResult::Uncovered);
    }

    #[test]
    fn test_empty_pattern_is_not_uncovered() {
        assert_eq!(scan_str("abc", "").result, CoverResult::EmptyPattern);
        assert_eq!(scan_str("", "").result, CoverResult::EmptyPattern);
    }

    #[test]
    fn test_empty_haystack() {
        assert_eq!(scan_str("", "a").result, CoverResult::Uncovered);
    }

    #[test]
    fn test_tie_break_keeps_leftmost() {
        // "ab" and the later "ba" both cover {a, b} with length 2; the
        // earlier window must win.
        let outcome = scan_str("abba", "ab");
        assert_eq!(outcome.span(), Some(ClosedOpenSpan::new(0, 2)));
    }

    #[test]
    fn test_scanner_reuse_is_idempotent() {
        let haystack: Vec<char> = "ADOBECODEBANC".chars().collect();
        let pattern: Vec<char> = "ABC".chars().collect();
        let mut scanner = CoveringScanner::new();
        let first = scanner.scan(&haystack, &pattern);
        let second = scanner.scan(&haystack, &pattern);
        assert_eq!(first, second);
    }

    /// Leftmost-shortest covering window by exhaustive search.
    fn brute_force(haystack: &[u8], pattern: &[u8]) -> Option<ClosedOpenSpan<usize>> {
        let target = TargetMultiset::from_symbols(pattern);
        let covers = |window: &[u8]| {
            pattern.iter().all(|&symbol| {
                window.iter().filter(|&&s| s == symbol).count() >= target.required_count(symbol)
            })
        };
        for len in 1..=haystack.len() {
            for start in 0..=(haystack.len() - len) {
                if covers(&haystack[start..start + len]) {
                    return Some(ClosedOpenSpan::new(start, start + len));
                }
            }
        }
        None
    }

    #[test]
    fn test_agrees_with_brute_force() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut scanner = CoveringScanner::new();

        for _ in 0..200 {
            let haystack: Vec<u8> = (0..rng.gen_range(1..20)).map(|_| rng.gen_range(0..4)).collect();
            let pattern: Vec<u8> = (0..rng.gen_range(1..5)).map(|_| rng.gen_range(0..4)).collect();

            let expected = brute_force(&haystack, &pattern);
            let actual = scanner.scan(&haystack, &pattern).span();
            assert_eq!(
                actual, expected,
                "mismatch for haystack {:?} pattern {:?}",
                haystack, pattern
            );
        }
    }
}
