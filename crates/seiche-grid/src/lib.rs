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

//! Seiche-Grid: multi-source synchronous propagation
//!
//! Simulates a wavefront spreading from all initially active cells of a
//! rectangular grid to orthogonally adjacent dormant cells, one synchronized
//! round at a time, until the grid saturates or unreachable dormant cells
//! remain.
//!
//! Core flow
//! - Build an immutable `grid::Grid` (validated eagerly; ragged input and
//!   invalid digits are rejected).
//! - Run `propagation::PropagationEngine`, optionally with monitors.
//! - Read the typed `result::PropagationOutcome`: `Saturated(rounds)` or
//!   `Unreachable`, plus statistics; `round_count()` yields the flat
//!   rounds-or-`-1` sentinel form.
//!
//! Design highlights
//! - The grid is never mutated; the engine layers a `state::PropagationState`
//!   (bitset overlay plus counters) over it, so the dormant-to-active
//!   transition is single-shot by construction and repeated runs over the
//!   same grid are trivially idempotent.
//! - Deterministic: frontier cells are processed in row-major seed order.
//!
//! Module map
//! - `cell`: cell states and the raw digit encoding.
//! - `grid`: the immutable grid model and its validation errors.
//! - `index`: typed row/column/cell indices.
//! - `monitor`: observation hooks (no-op, composite).
//! - `propagation`: the round-synchronized engine.
//! - `result`: run outcomes with termination results.
//! - `rounds`: sentinel-encoded round counts.
//! - `state`: the mutable per-run activation overlay.
//! - `stats`: lightweight counters.

pub mod cell;
pub mod grid;
pub mod index;
pub mod monitor;
pub mod propagation;
pub mod result;
pub mod rounds;
pub mod state;
pub mod stats;
