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

use crate::{grid::Grid, index::CellIndex, stats::PropagationStatistics};
use num_traits::{PrimInt, Signed};

/// An observer of propagation runs.
///
/// The engine reports one event per round plus enter/exit bookends.
/// Monitors observe; the run itself is a bounded linear pass over the grid,
/// so there is nothing for a monitor to steer or abort. Callbacks take
/// `&mut self`; keep handlers fast and non-blocking.
pub trait PropagationMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str;
    fn on_enter_propagation(&mut self, grid: &Grid, statistics: &PropagationStatistics);
    fn on_round_complete(
        &mut self,
        round: T,
        newly_active: &[CellIndex],
        statistics: &PropagationStatistics,
    );
    fn on_exit_propagation(&mut self, statistics: &PropagationStatistics);
}

impl<T> std::fmt::Debug for dyn PropagationMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PropagationMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn PropagationMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PropagationMonitor({})", self.name())
    }
}
