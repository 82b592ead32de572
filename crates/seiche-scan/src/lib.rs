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

//! Seiche-Scan: sliding-window kernels over symbol sequences
//!
//! Two variable-size window scans over generic symbol slices, each a single
//! forward pass with monotone window bounds:
//!
//! - `unique`: longest contiguous run without repeated symbols, using a
//!   last-seen map so the window start jumps directly past a repeat.
//! - `covering`: shortest window containing a pattern multiset, using the
//!   expand/contract protocol with `formed`/`required` accounting.
//!
//! Core flow
//! - Build a scanner (`UniqueRunScanner`, `CoveringScanner`); scanners own
//!   reusable map storage and may be reused across scans.
//! - Call `scan` with symbol slices; read the typed outcome (span, length,
//!   or covering result) and the gathered `ScanStatistics`.
//! - For `&str` inputs, `text` offers adapters that return string slices.
//!
//! Design highlights
//! - Outcomes are explicit: an empty pattern is reported as its own variant
//!   instead of being conflated with "no covering window".
//! - Scanners hold no state across scans beyond allocations; results depend
//!   only on inputs.
//!
//! Module map
//! - `covering`: minimum covering window search.
//! - `freq`: window frequency table and pattern requirement multiset.
//! - `result`: typed scan outcomes.
//! - `stats`: per-scan event counters.
//! - `text`: `&str` adapters.
//! - `unique`: longest duplicate-free run scan.

pub mod covering;
pub mod freq;
pub mod result;
pub mod stats;
pub mod text;
pub mod unique;
