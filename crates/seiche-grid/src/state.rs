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

use crate::index::CellIndex;
use fixedbitset::FixedBitSet;

/// The mutable per-run state of a propagation, layered over an immutable
/// `Grid`.
///
/// The state tracks:
/// - `activated`: bitset of cells activated during the current run.
/// - `num_dormant_remaining`: dormant cells not yet reached.
/// - `num_activated`: cells activated so far.
///
/// Invariants (debug-checked):
/// - A cell is activated at most once per run; the dormant-to-active
///   transition is monotonic and single-shot.
/// - `num_dormant_remaining` never underflows: activation requires a
///   dormant cell to remain.
#[derive(Debug, Clone, Default)]
pub struct PropagationState {
    activated: FixedBitSet,
    num_cells: usize,
    num_dormant_remaining: usize,
    num_activated: usize,
}

impl PropagationState {
    /// Creates an empty `PropagationState`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `PropagationState` with preallocated storage for the given
    /// number of cells.
    #[inline]
    pub fn preallocated(num_cells: usize) -> Self {
        Self {
            activated: FixedBitSet::with_capacity(num_cells),
            num_cells: 0,
            num_dormant_remaining: 0,
            num_activated: 0,
        }
    }

    /// Prepares the state for a run over a grid with `num_cells` cells, of
    /// which `num_dormant` start dormant.
    pub fn prepare(&mut self, num_cells: usize, num_dormant: usize) {
        self.activated.clear();
        self.activated.grow(num_cells);
        self.num_cells = num_cells;
        self.num_dormant_remaining = num_dormant;
        self.num_activated = 0;
    }

    /// Returns `true` if the given cell was activated during this run.
    #[inline]
    pub fn is_activated(&self, index: CellIndex) -> bool {
        self.activated.contains(index.get())
    }

    /// Marks the given cell as activated.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the cell is out of bounds, was already
    /// activated, or no dormant cells remain.
    #[inline]
    pub fn activate(&mut self, index: CellIndex) {
        debug_assert!(
            index.get() < self.num_cells,
            "called `PropagationState::activate` with cell id {} but the state covers {} cells",
            index,
            self.num_cells
        );
        debug_assert!(
            !self.activated.contains(index.get()),
            "called `PropagationState::activate` on cell {} twice",
            index
        );
        debug_assert!(
            self.num_dormant_remaining > 0,
            "called `PropagationState::activate` with no dormant cells remaining"
        );

        self.activated.insert(index.get());
        self.num_dormant_remaining -= 1;
        self.num_activated += 1;
    }

    /// Returns the number of dormant cells not yet reached.
    #[inline]
    pub fn dormant_remaining(&self) -> usize {
        self.num_dormant_remaining
    }

    /// Returns the number of cells activated so far.
    #[inline]
    pub fn num_activated(&self) -> usize {
        self.num_activated
    }

    /// Returns `true` if no dormant cells remain.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.num_dormant_remaining == 0
    }

    /// Clears the per-run state, keeping allocations.
    pub fn reset(&mut self) {
        self.activated.clear();
        self.num_cells = 0;
        self.num_dormant_remaining = 0;
        self.num_activated = 0;
    }
}
