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

//! Monitoring combinators for propagation runs.
//!
//! Provides `CompositePropagationMonitor`, a fan-out monitor that forwards
//! every event to its children in insertion order. This lets you mix
//! progress reporting, metrics, and visualization without coupling them to
//! the engine.

use crate::{
    grid::Grid, index::CellIndex, monitor::propagation_monitor::PropagationMonitor,
    stats::PropagationStatistics,
};
use num_traits::{PrimInt, Signed};

/// A propagation monitor that aggregates multiple monitors and forwards
/// events to all of them.
pub struct CompositePropagationMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    monitors: Vec<Box<dyn PropagationMonitor<T> + 'a>>,
}

impl<T> Default for CompositePropagationMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositePropagationMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositePropagationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositePropagationMonitor` with the specified
    /// capacity. This pre-allocates space for the given number of monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: PropagationMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn PropagationMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn PropagationMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }
}

impl<T> PropagationMonitor<T> for CompositePropagationMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "CompositePropagationMonitor"
    }

    fn on_enter_propagation(&mut self, grid: &Grid, statistics: &PropagationStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_propagation(grid, statistics);
        }
    }

    fn on_round_complete(
        &mut self,
        round: T,
        newly_active: &[CellIndex],
        statistics: &PropagationStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_round_complete(round, newly_active, statistics);
        }
    }

    fn on_exit_propagation(&mut self, statistics: &PropagationStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_propagation(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct CountingMonitor {
        rounds_seen: Rc<RefCell<Vec<i32>>>,
    }

    impl PropagationMonitor<i32> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_enter_propagation(&mut self, _grid: &Grid, _statistics: &PropagationStatistics) {}

        fn on_round_complete(
            &mut self,
            round: i32,
            _newly_active: &[CellIndex],
            _statistics: &PropagationStatistics,
        ) {
            self.rounds_seen.borrow_mut().push(round);
        }

        fn on_exit_propagation(&mut self, _statistics: &PropagationStatistics) {}
    }

    #[test]
    fn test_events_fan_out_to_all_children() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let mut composite = CompositePropagationMonitor::with_capacity(2);
        composite.add_monitor(CountingMonitor {
            rounds_seen: Rc::clone(&first),
        });
        composite.add_monitor(CountingMonitor {
            rounds_seen: Rc::clone(&second),
        });
        assert_eq!(composite.monitors().len(), 2);

        let statistics = PropagationStatistics::default();
        composite.on_round_complete(1, &[], &statistics);
        composite.on_round_complete(2, &[], &statistics);

        assert_eq!(*first.borrow(), vec![1, 2]);
        assert_eq!(*second.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_clear_removes_children() {
        let rounds = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositePropagationMonitor::new();
        composite.add_monitor(CountingMonitor {
            rounds_seen: Rc::clone(&rounds),
        });
        composite.clear();
        assert!(composite.monitors().is_empty());
    }
}
