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

use crate::stats::ScanStatistics;
use seiche_core::math::span::ClosedOpenSpan;

/// The result of a minimum-covering-window search.
///
/// "No covering window exists" and "the pattern was empty" are semantically
/// different outcomes; conflating them into one empty signal forces callers
/// to guess. They are separate variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverResult {
    /// The shortest window of the haystack that covers the pattern multiset.
    /// Among equal-length windows, the leftmost one.
    Covered(ClosedOpenSpan<usize>),
    /// The pattern is non-degenerate, but no window of the haystack covers it.
    Uncovered,
    /// The pattern was empty; there is nothing to cover.
    EmptyPattern,
}

impl CoverResult {
    /// Returns `true` if a covering window was found.
    #[inline]
    pub fn is_covered(&self) -> bool {
        matches!(self, CoverResult::Covered(_))
    }

    /// Returns the covering window, if any.
    #[inline]
    pub fn span(&self) -> Option<ClosedOpenSpan<usize>> {
        match self {
            CoverResult::Covered(span) => Some(*span),
            _ => None,
        }
    }
}

impl std::fmt::Display for CoverResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverResult::Covered(span) => write!(f, "Covered({})", span),
            CoverResult::Uncovered => write!(f, "Uncovered"),
            CoverResult::EmptyPattern => write!(f, "EmptyPattern"),
        }
    }
}

/// The outcome of a covering scan: the result plus the statistics gathered
/// while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverOutcome {
    pub result: CoverResult,
    pub statistics: ScanStatistics,
}

impl CoverOutcome {
    #[inline]
    pub fn new(result: CoverResult, statistics: ScanStatistics) -> Self {
        Self { result, statistics }
    }

    /// Returns `true` if a covering window was found.
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.result.is_covered()
    }

    /// Returns the covering window, if any.
    #[inline]
    pub fn span(&self) -> Option<ClosedOpenSpan<usize>> {
        self.result.span()
    }
}

/// The outcome of a longest-unique-run scan.
///
/// The best span is empty for an empty input; there is no failure case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueRunOutcome {
    /// The leftmost longest duplicate-free span.
    pub best: ClosedOpenSpan<usize>,
    pub statistics: ScanStatistics,
}

impl UniqueRunOutcome {
    #[inline]
    pub fn new(best: ClosedOpenSpan<usize>, statistics: ScanStatistics) -> Self {
        Self { best, statistics }
    }

    /// Returns the length of the longest duplicate-free run.
    #[inline]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Returns `true` if the input contained no symbols at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

impl std::fmt::Display for UniqueRunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UniqueRun(best={}, len={})", self.best, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_result_helpers() {
        let covered = CoverResult::Covered(ClosedOpenSpan::new(2, 6));
        assert!(covered.is_covered());
        assert_eq!(covered.span(), Some(ClosedOpenSpan::new(2, 6)));

        assert!(!CoverResult::Uncovered.is_covered());
        assert_eq!(CoverResult::Uncovered.span(), None);
        assert_eq!(CoverResult::EmptyPattern.span(), None);
    }

    #[test]
    fn test_cover_result_display() {
        let covered = CoverResult::Covered(ClosedOpenSpan::new(2, 6));
        assert_eq!(format!("{}", covered), "Covered([2, 6))");
        assert_eq!(format!("{}", CoverResult::Uncovered), "Uncovered");
        assert_eq!(format!("{}", CoverResult::EmptyPattern), "EmptyPattern");
    }

    #[test]
    fn test_unique_run_outcome() {
        let outcome =
            UniqueRunOutcome::new(ClosedOpenSpan::new(3, 7), ScanStatistics::default());
        assert_eq!(outcome.len(), 4);
        assert!(!outcome.is_empty());
        assert_eq!(format!("{}", outcome), "UniqueRun(best=[3, 7), len=4)");
    }
}
