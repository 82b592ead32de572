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

use crate::{rounds::RoundCount, stats::PropagationStatistics};
use num_traits::Signed;
use seiche_core::num::constants::MinusOne;

/// The result of a propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationResult<T> {
    /// Every dormant cell was activated after the given number of rounds.
    Saturated(T),
    /// Dormant cells remain that no active cell can ever reach.
    Unreachable,
}

impl<T> PropagationResult<T>
where
    T: Copy,
{
    /// Returns `true` if every dormant cell was reached.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        matches!(self, PropagationResult::Saturated(_))
    }

    /// Returns `true` if dormant cells were unreachable.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PropagationResult::Unreachable)
    }

    /// Returns the elapsed rounds, if the grid saturated.
    #[inline]
    pub fn rounds(&self) -> Option<T> {
        match self {
            PropagationResult::Saturated(rounds) => Some(*rounds),
            PropagationResult::Unreachable => None,
        }
    }
}

impl<T> std::fmt::Display for PropagationResult<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationResult::Saturated(rounds) => write!(f, "Saturated(rounds={})", rounds),
            PropagationResult::Unreachable => write!(f, "Unreachable"),
        }
    }
}

/// The outcome of a propagation run: the result plus the statistics gathered
/// while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationOutcome<T> {
    pub result: PropagationResult<T>,
    pub statistics: PropagationStatistics,
}

impl<T> PropagationOutcome<T>
where
    T: Copy + Signed + MinusOne,
{
    #[inline]
    pub fn new(result: PropagationResult<T>, statistics: PropagationStatistics) -> Self {
        Self { result, statistics }
    }

    /// Returns `true` if every dormant cell was reached.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.result.is_saturated()
    }

    /// Returns `true` if dormant cells were unreachable.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.result.is_unreachable()
    }

    /// Returns the sentinel-encoded round count: the elapsed rounds on
    /// saturation, `-1` on unreachability.
    #[inline]
    pub fn round_count(&self) -> RoundCount<T> {
        match self.result {
            PropagationResult::Saturated(rounds) => RoundCount::from_raw(rounds),
            PropagationResult::Unreachable => RoundCount::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_helpers() {
        let saturated = PropagationResult::Saturated(4i32);
        assert!(saturated.is_saturated());
        assert_eq!(saturated.rounds(), Some(4));

        let unreachable: PropagationResult<i32> = PropagationResult::Unreachable;
        assert!(unreachable.is_unreachable());
        assert_eq!(unreachable.rounds(), None);
    }

    #[test]
    fn test_result_display() {
        assert_eq!(
            format!("{}", PropagationResult::Saturated(4i32)),
            "Saturated(rounds=4)"
        );
        assert_eq!(
            format!("{}", PropagationResult::<i32>::Unreachable),
            "Unreachable"
        );
    }

    #[test]
    fn test_outcome_round_count() {
        let outcome = PropagationOutcome::new(
            PropagationResult::Saturated(4i32),
            PropagationStatistics::default(),
        );
        assert_eq!(outcome.round_count().raw(), 4);

        let outcome = PropagationOutcome::new(
            PropagationResult::<i32>::Unreachable,
            PropagationStatistics::default(),
        );
        assert_eq!(outcome.round_count().raw(), -1);
    }
}
