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

//! Round-synchronized multi-source propagation.
//!
//! The engine spreads activation from all initially active cells at once,
//! one round at a time: the current frontier is drained, every dormant
//! orthogonal neighbor is activated into the next frontier, and the two
//! frontier buffers swap. A round is counted per processed frontier level
//! while dormant cells remain, so the round that activates the last dormant
//! cell is counted. The run terminates when no dormant cells remain
//! (saturation) or when the frontier empties with dormant cells left
//! (unreachable).

use crate::{
    cell::CellState,
    grid::Grid,
    index::CellIndex,
    monitor::{no_op::NoOperationMonitor, propagation_monitor::PropagationMonitor},
    result::{PropagationOutcome, PropagationResult},
    state::PropagationState,
    stats::PropagationStatistics,
};
use num_traits::{PrimInt, Signed};
use seiche_core::num::constants::MinusOne;

/// A reusable engine for synchronous multi-source propagation, generic over
/// the round-counter type `T`.
///
/// The engine owns the per-run activation state and both frontier buffers,
/// so repeated runs reuse their allocations. The grid itself is never
/// mutated; running the same grid twice yields the same outcome.
///
/// # Examples
///
/// ```rust
/// # use seiche_grid::grid::Grid;
/// # use seiche_grid::propagation::PropagationEngine;
///
/// let grid = Grid::from_digits(&[vec![2, 1, 1], vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
/// let outcome = PropagationEngine::<i32>::new().run(&grid);
/// assert_eq!(outcome.round_count().raw(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PropagationEngine<T>
where
    T: PrimInt + Signed + MinusOne,
{
    state: PropagationState,
    frontier: Vec<CellIndex>,
    next_frontier: Vec<CellIndex>,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for PropagationEngine<T>
where
    T: PrimInt + Signed + MinusOne,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PropagationEngine<T>
where
    T: PrimInt + Signed + MinusOne,
{
    /// Creates a new propagation engine.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: PropagationState::new(),
            frontier: Vec::new(),
            next_frontier: Vec::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Creates a new propagation engine with preallocated storage for grids
    /// of up to `num_cells` cells.
    ///
    /// # Note
    ///
    /// When you invoke the engine it will internally ensure sufficient
    /// capacity for the given grid. Preallocating only moves the cost of
    /// the memory allocations to construction time.
    #[inline]
    pub fn preallocated(num_cells: usize) -> Self {
        Self {
            state: PropagationState::preallocated(num_cells),
            frontier: Vec::with_capacity(num_cells),
            next_frontier: Vec::with_capacity(num_cells),
            _marker: std::marker::PhantomData,
        }
    }

    /// Runs the propagation over `grid` without observation.
    #[inline]
    pub fn run(&mut self, grid: &Grid) -> PropagationOutcome<T> {
        self.run_monitored(grid, &mut NoOperationMonitor::new())
    }

    /// Runs the propagation over `grid`, reporting each round to `monitor`.
    pub fn run_monitored<M>(&mut self, grid: &Grid, monitor: &mut M) -> PropagationOutcome<T>
    where
        M: PropagationMonitor<T>,
    {
        let mut statistics = PropagationStatistics::default();

        self.frontier.clear();
        self.next_frontier.clear();

        let mut num_dormant = 0usize;
        for index in grid.cell_indices() {
            match grid.state(index) {
                CellState::Active => {
                    self.frontier.push(index);
                    statistics.on_source_seeded();
                }
                CellState::Dormant => num_dormant += 1,
                CellState::Empty => {}
            }
        }
        self.state.prepare(grid.num_cells(), num_dormant);

        monitor.on_enter_propagation(grid, &statistics);
        statistics.on_frontier_observed(self.frontier.len() as u64);

        let mut rounds = T::zero();
        while !self.frontier.is_empty() && !self.state.is_saturated() {
            for position in 0..self.frontier.len() {
                let cell = self.frontier[position];
                for neighbor in grid.orthogonal_neighbors(cell) {
                    if grid.state(neighbor).is_dormant() && !self.state.is_activated(neighbor) {
                        self.state.activate(neighbor);
                        statistics.on_cell_activated();
                        self.next_frontier.push(neighbor);
                    }
                }
            }

            rounds = rounds + T::one();
            statistics.on_round_completed();
            statistics.on_frontier_observed(self.next_frontier.len() as u64);
            monitor.on_round_complete(rounds, &self.next_frontier, &statistics);

            std::mem::swap(&mut self.frontier, &mut self.next_frontier);
            self.next_frontier.clear();
        }

        let result = if self.state.is_saturated() {
            PropagationResult::Saturated(rounds)
        } else {
            PropagationResult::Unreachable
        };
        monitor.on_exit_propagation(&statistics);

        let outcome = PropagationOutcome::new(result, statistics);
        self.reset();
        outcome
    }

    /// Resets the internal state of the engine, clearing the per-run state
    /// while keeping allocations.
    fn reset(&mut self) {
        self.state.reset();
        self.frontier.clear();
        self.next_frontier.clear();
    }
}
