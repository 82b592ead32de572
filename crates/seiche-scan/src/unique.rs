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

//! Longest duplicate-free run scanning.
//!
//! A variable-size sliding window walks the sequence once. A map from symbol
//! to its most recent position lets the window start jump directly past a
//! repeated symbol instead of contracting one position at a time; both
//! window bounds move forward monotonically, so the scan is linear.

use crate::{result::UniqueRunOutcome, stats::ScanStatistics};
use rustc_hash::FxHashMap;
use seiche_core::math::span::ClosedOpenSpan;
use std::hash::Hash;

/// A reusable scanner for the longest contiguous run without repeated
/// symbols.
///
/// The scanner owns its last-seen map so that repeated scans reuse the
/// allocation. Each call to [`scan`] is independent: internal state is
/// cleared on entry, and the result depends only on the input sequence.
///
/// [`scan`]: UniqueRunScanner::scan
///
/// # Examples
///
/// ```rust
/// # use seiche_scan::unique::UniqueRunScanner;
///
/// let symbols: Vec<char> = "abcabcbb".chars().collect();
/// let outcome = UniqueRunScanner::new().scan(&symbols);
/// assert_eq!(outcome.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct UniqueRunScanner<S> {
    last_seen: FxHashMap<S, usize>,
}

impl<S> Default for UniqueRunScanner<S>
where
    S: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> UniqueRunScanner<S>
where
    S: Copy + Eq + Hash,
{
    /// Creates a new scanner.
    #[inline]
    pub fn new() -> Self {
        Self {
            last_seen: FxHashMap::default(),
        }
    }

    /// Creates a new scanner with preallocated storage for the given number
    /// of distinct symbols.
    #[inline]
    pub fn preallocated(distinct_symbols: usize) -> Self {
        Self {
            last_seen: FxHashMap::with_capacity_and_hasher(distinct_symbols, Default::default()),
        }
    }

    /// Scans `sequence` and returns the longest duplicate-free span.
    ///
    /// When the symbol under the window's end was already seen at a position
    /// inside the window, the start jumps to one past that prior occurrence.
    /// Occurrences left behind by earlier jumps are stale and are simply
    /// overwritten. An empty sequence yields an empty span of length 0.
    pub fn scan(&mut self, sequence: &[S]) -> UniqueRunOutcome {
        self.last_seen.clear();

        let mut statistics = ScanStatistics::default();
        let mut window: ClosedOpenSpan<usize> = ClosedOpenSpan::default();
        let mut best: ClosedOpenSpan<usize> = ClosedOpenSpan::default();

        for (position, &symbol) in sequence.iter().enumerate() {
            statistics.on_symbol_examined();
            window.extend_end_to(position + 1);
            statistics.on_window_expansion();

            if let Some(&prior) = self.last_seen.get(&symbol) {
                if prior >= window.start() {
                    window.advance_start_to(prior + 1);
                    statistics.on_window_contraction();
                }
            }
            self.last_seen.insert(symbol, position);

            // Strict improvement keeps the leftmost longest run.
            if window.len() > best.len() {
                best = window;
                statistics.on_candidate_recorded();
            }
        }

        UniqueRunOutcome::new(best, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(text: &str) -> UniqueRunOutcome {
        let symbols: Vec<char> = text.chars().collect();
        UniqueRunScanner::new().scan(&symbols)
    }

    #[test]
    fn test_repeating_tail() {
        let outcome = scan_str("abcabcbb");
        assert_eq!(outcome.len(), 3);
        // The leftmost longest run is "abc".
        assert_eq!(outcome.best, ClosedOpenSpan::new(0, 3));
    }

    #[test]
    fn test_all_identical() {
        assert_eq!(scan_str("bbbbb").len(), 1);
    }

    #[test]
    fn test_interleaved() {
        assert_eq!(scan_str("pwwkew").len(), 3); // "wke"
    }

    #[test]
    fn test_all_distinct() {
        let outcome = scan_str("abcdef");
        assert_eq!(outcome.len(), 6);
        assert_eq!(outcome.best, ClosedOpenSpan::new(0, 6));
    }

    #[test]
    fn test_empty_sequence() {
        let outcome = scan_str("");
        assert_eq!(outcome.len(), 0);
        assert!(outcome.is_empty());
        assert_eq!(outcome.statistics.symbols_examined, 0);
    }

    #[test]
    fn test_jump_skips_multiple_positions() {
        // After "abcd", revisiting 'a' jumps the start from 0 to 1 in one
        // step; revisiting 'b' next jumps from 1 to 2.
        let outcome = scan_str("abcdab");
        assert_eq!(outcome.len(), 4);
        assert_eq!(outcome.best, ClosedOpenSpan::new(0, 4));
    }

    #[test]
    fn test_stale_occurrence_is_ignored() {
        // In "abba", the final 'a' was last seen at position 0, which lies
        // left of the window after the "bb" contraction; the window must not
        // move backward.
        let outcome = scan_str("abba");
        assert_eq!(outcome.len(), 2);
    }

    #[test]
    fn test_scanner_reuse_is_idempotent() {
        let symbols: Vec<char> = "tmmzuxt".chars().collect();
        let mut scanner = UniqueRunScanner::new();
        let first = scanner.scan(&symbols);
        let second = scanner.scan(&symbols);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5); // "mzuxt"
    }

    #[test]
    fn test_non_char_symbols() {
        let readings = [3u32, 3, 1, 2, 3, 4, 4];
        let outcome = UniqueRunScanner::new().scan(&readings);
        assert_eq!(outcome.len(), 4); // 1, 2, 3, 4
        assert_eq!(outcome.best, ClosedOpenSpan::new(2, 6));
    }
}
