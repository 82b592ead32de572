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

/// Statistics collected during a single window scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanStatistics {
    /// Total symbols read from the input sequence.
    pub symbols_examined: u64,
    /// Times the window's end bound moved forward.
    pub window_expansions: u64,
    /// Times the window's start bound moved forward.
    pub window_contractions: u64,
    /// Times a window replaced the best candidate found so far.
    pub candidates_recorded: u64,
}

impl ScanStatistics {
    #[inline]
    pub fn on_symbol_examined(&mut self) {
        self.symbols_examined = self.symbols_examined.saturating_add_val(1);
    }

    #[inline]
    pub fn on_window_expansion(&mut self) {
        self.window_expansions = self.window_expansions.saturating_add_val(1);
    }

    #[inline]
    pub fn on_window_contraction(&mut self) {
        self.window_contractions = self.window_contractions.saturating_add_val(1);
    }

    #[inline]
    pub fn on_candidate_recorded(&mut self) {
        self.candidates_recorded = self.candidates_recorded.saturating_add_val(1);
    }
}

impl std::fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scan Statistics:")?;
        writeln!(f, "  Symbols examined:     {}", self.symbols_examined)?;
        writeln!(f, "  Window expansions:    {}", self.window_expansions)?;
        writeln!(f, "  Window contractions:  {}", self.window_contractions)?;
        writeln!(f, "  Candidates recorded:  {}", self.candidates_recorded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_counters() {
        let mut statistics = ScanStatistics::default();
        statistics.on_symbol_examined();
        statistics.on_symbol_examined();
        statistics.on_window_expansion();
        statistics.on_window_contraction();
        statistics.on_candidate_recorded();

        assert_eq!(statistics.symbols_examined, 2);
        assert_eq!(statistics.window_expansions, 1);
        assert_eq!(statistics.window_contractions, 1);
        assert_eq!(statistics.candidates_recorded, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut statistics = ScanStatistics {
            symbols_examined: u64::MAX,
            ..Default::default()
        };
        statistics.on_symbol_examined();
        assert_eq!(statistics.symbols_examined, u64::MAX);
    }
}
