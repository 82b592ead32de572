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

use seiche_core::num::ops::saturating_arithmetic::SaturatingAddVal;

/// Statistics collected during one propagation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropagationStatistics {
    /// Cells that started the run active.
    pub sources_seeded: u64,
    /// Frontier levels processed.
    pub rounds_completed: u64,
    /// Dormant cells activated over the whole run.
    pub cells_activated: u64,
    /// The largest frontier observed, including the initial one.
    pub frontier_peak: u64,
}

impl PropagationStatistics {
    #[inline]
    pub fn on_source_seeded(&mut self) {
        self.sources_seeded = self.sources_seeded.saturating_add_val(1);
    }

    #[inline]
    pub fn on_round_completed(&mut self) {
        self.rounds_completed = self.rounds_completed.saturating_add_val(1);
    }

    #[inline]
    pub fn on_cell_activated(&mut self) {
        self.cells_activated = self.cells_activated.saturating_add_val(1);
    }

    /// Records a frontier size, tracking the peak.
    #[inline]
    pub fn on_frontier_observed(&mut self, frontier_len: u64) {
        self.frontier_peak = self.frontier_peak.max(frontier_len);
    }
}

impl std::fmt::Display for PropagationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Propagation Statistics:")?;
        writeln!(f, "  Sources seeded:    {}", self.sources_seeded)?;
        writeln!(f, "  Rounds completed:  {}", self.rounds_completed)?;
        writeln!(f, "  Cells activated:   {}", self.cells_activated)?;
        writeln!(f, "  Frontier peak:     {}", self.frontier_peak)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_counters() {
        let mut statistics = PropagationStatistics::default();
        statistics.on_source_seeded();
        statistics.on_round_completed();
        statistics.on_cell_activated();
        statistics.on_cell_activated();
        statistics.on_frontier_observed(3);
        statistics.on_frontier_observed(1);

        assert_eq!(statistics.sources_seeded, 1);
        assert_eq!(statistics.rounds_completed, 1);
        assert_eq!(statistics.cells_activated, 2);
        assert_eq!(statistics.frontier_peak, 3);
    }

    #[test]
    fn test_counters_saturate() {
        let mut statistics = PropagationStatistics {
            cells_activated: u64::MAX,
            ..Default::default()
        };
        statistics.on_cell_activated();
        assert_eq!(statistics.cells_activated, u64::MAX);
    }
}
